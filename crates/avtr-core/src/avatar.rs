//! The avatar URL builder.

use std::fmt;

use crate::color::Rgba;
use crate::config::AvtrConfig;
use crate::error::AvtrError;
use crate::identity::{classify, Identity};
use crate::options::{Font, Format, Shape, TextCase, Theme};
use crate::url_model::{build_url, Endpoint, QueryValue};

const MIN_FONT_WEIGHT: i64 = 100;
const MAX_FONT_WEIGHT: i64 = 900;
const DEFAULT_LETTER_COUNT: i64 = 2;
const DEFAULT_SIZE: i64 = 100;

/// Builder for an avatar URL.
///
/// Construct it from an identity string, chain setters, then call
/// [`Avtr::to_url`]. Numeric setters normalize out-of-range input and never
/// fail; setters for enumerated options reject unknown values and leave the
/// builder untouched.
///
/// ```
/// use avtr_core::Avtr;
///
/// let mut avtr = Avtr::new("Jamosaur");
/// avtr.size(500).format("jpg")?.shape("circle")?;
/// assert_eq!(
///     avtr.to_url(),
///     "https://avtr.io/avtr.jpg?initials=Jamosaur&size=500&shape=circle"
/// );
/// # Ok::<(), avtr_core::AvtrError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Avtr {
    endpoint: Endpoint,
    format: Format,
    initials: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    letter_count: Option<i64>,
    background: Option<Rgba>,
    size: Option<i64>,
    rounded_corners: Option<bool>,
    shape: Option<Shape>,
    theme: Option<Theme>,
    text_case: Option<TextCase>,
    text_color: Option<Rgba>,
    font_weight: Option<i64>,
    font: Option<Font>,
}

impl Avtr {
    /// Creates a builder labelled from `value` (see [`classify`]).
    pub fn new(value: &str) -> Self {
        let mut avtr = Avtr::default();
        match classify(value) {
            Identity::Email(email) => avtr.email = Some(email),
            Identity::Name { first, last } => {
                avtr.first_name = Some(first);
                avtr.last_name = last;
            }
            Identity::Initials(initials) => avtr.initials = Some(initials),
            Identity::None => {}
        }
        avtr
    }

    /// Like [`Avtr::new`], targeting the configured endpoint and starting
    /// from the configured default format.
    pub fn with_config(value: &str, cfg: &AvtrConfig) -> anyhow::Result<Self> {
        let mut avtr = Avtr::new(value);
        avtr.endpoint = cfg.endpoint()?;
        if let Some(format) = cfg.default_format {
            avtr.format = format;
        }
        Ok(avtr)
    }

    /// Points the builder at another rendering service.
    pub fn endpoint(&mut self, endpoint: Endpoint) -> &mut Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the image format from its wire name (`png`, `jpg`, `gif`).
    pub fn format(&mut self, format: &str) -> Result<&mut Self, AvtrError> {
        Ok(self.set_format(format.parse()?))
    }

    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    pub fn first_name(&mut self, first_name: &str) -> &mut Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn last_name(&mut self, last_name: &str) -> &mut Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    /// Number of letters drawn. Anything outside `1..=2` becomes 2.
    pub fn letter_count(&mut self, count: i64) -> &mut Self {
        let normalized = if (1..=2).contains(&count) {
            count
        } else {
            DEFAULT_LETTER_COUNT
        };
        log_normalized("letter_count", count, normalized);
        self.letter_count = Some(normalized);
        self
    }

    /// Background colour; channels are clamped.
    pub fn background(&mut self, r: i64, g: i64, b: i64, a: f64) -> &mut Self {
        self.background = Some(Rgba::clamped(r, g, b, a));
        self
    }

    /// Opaque background colour.
    pub fn background_rgb(&mut self, r: i64, g: i64, b: i64) -> &mut Self {
        self.background = Some(Rgba::opaque(r, g, b));
        self
    }

    /// Image size in pixels. Negative input resets to 100.
    pub fn size(&mut self, size: i64) -> &mut Self {
        let normalized = if size < 0 { DEFAULT_SIZE } else { size };
        log_normalized("size", size, normalized);
        self.size = Some(normalized);
        self
    }

    pub fn rounded_corners(&mut self, rounded: bool) -> &mut Self {
        self.rounded_corners = Some(rounded);
        self
    }

    pub fn shape(&mut self, shape: &str) -> Result<&mut Self, AvtrError> {
        Ok(self.set_shape(shape.parse()?))
    }

    pub fn set_shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = Some(shape);
        self
    }

    pub fn theme(&mut self, theme: &str) -> Result<&mut Self, AvtrError> {
        Ok(self.set_theme(theme.parse()?))
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = Some(theme);
        self
    }

    pub fn text_case(&mut self, text_case: &str) -> Result<&mut Self, AvtrError> {
        Ok(self.set_text_case(text_case.parse()?))
    }

    pub fn set_text_case(&mut self, text_case: TextCase) -> &mut Self {
        self.text_case = Some(text_case);
        self
    }

    /// Text colour; channels are clamped.
    pub fn color(&mut self, r: i64, g: i64, b: i64, a: f64) -> &mut Self {
        self.text_color = Some(Rgba::clamped(r, g, b, a));
        self
    }

    /// Opaque text colour.
    pub fn color_rgb(&mut self, r: i64, g: i64, b: i64) -> &mut Self {
        self.text_color = Some(Rgba::opaque(r, g, b));
        self
    }

    /// Font weight, clamped to `100..=900`.
    pub fn font_weight(&mut self, weight: i64) -> &mut Self {
        let normalized = weight.clamp(MIN_FONT_WEIGHT, MAX_FONT_WEIGHT);
        log_normalized("font_weight", weight, normalized);
        self.font_weight = Some(normalized);
        self
    }

    pub fn font(&mut self, font: &str) -> Result<&mut Self, AvtrError> {
        Ok(self.set_font(font.parse()?))
    }

    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.font = Some(font);
        self
    }

    pub fn format_value(&self) -> Format {
        self.format
    }

    /// The identity set at construction or through the name setters.
    ///
    /// Name setters used after construction may leave several identity
    /// attributes set at once; the first populated one wins here, in URL
    /// order (initials, name, email).
    pub fn identity(&self) -> Identity {
        if let Some(initials) = &self.initials {
            Identity::Initials(initials.clone())
        } else if let Some(first) = &self.first_name {
            Identity::Name {
                first: first.clone(),
                last: self.last_name.clone(),
            }
        } else if let Some(email) = &self.email {
            Identity::Email(email.clone())
        } else {
            Identity::None
        }
    }

    /// Every set attribute in URL order, as it will be encoded.
    pub fn query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        let text = |v: &Option<String>| v.as_deref().map(QueryValue::from);
        let option_text = |v: Option<&'static str>| v.map(QueryValue::from);

        let fields: [(&'static str, Option<QueryValue>); 14] = [
            ("initials", text(&self.initials)),
            ("first_name", text(&self.first_name)),
            ("last_name", text(&self.last_name)),
            ("email", text(&self.email)),
            ("letter_count", self.letter_count.map(QueryValue::Int)),
            ("background", self.background.map(QueryValue::Color)),
            ("size", self.size.map(QueryValue::Int)),
            (
                "rounded_corners",
                self.rounded_corners.map(|r| QueryValue::Int(i64::from(r))),
            ),
            ("shape", option_text(self.shape.map(Shape::as_str))),
            ("theme", option_text(self.theme.map(Theme::as_str))),
            ("text_case", option_text(self.text_case.map(TextCase::as_str))),
            ("text_color", self.text_color.map(QueryValue::Color)),
            ("font_weight", self.font_weight.map(QueryValue::Int)),
            ("font", option_text(self.font.map(Font::as_str))),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// Serializes the builder to its URL. Calling it does not change state.
    pub fn to_url(&self) -> String {
        build_url(&self.endpoint, self.format, &self.query_pairs())
    }
}

impl fmt::Display for Avtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

fn log_normalized(field: &'static str, given: i64, stored: i64) {
    if given != stored {
        tracing::debug!(field, given, stored, "normalized out-of-range value");
    }
}
