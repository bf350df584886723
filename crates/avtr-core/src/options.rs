//! Enumerated avatar options.
//!
//! Each option accepts a fixed set of wire names. Parsing anything else fails
//! with the option's own [`AvtrError`] variant.

use crate::error::AvtrError;

/// Defines an option enum together with its wire names, `FromStr`,
/// `Display` and string-based serde impls.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name used in the generated URL.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = AvtrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(AvtrError::$error(other.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

option_enum! {
    /// Image format; becomes the file extension of the URL path.
    Format, InvalidFormat {
        Png => "png",
        Jpg => "jpg",
        Gif => "gif",
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Png
    }
}

option_enum! {
    /// Outline of the rendered avatar.
    Shape, InvalidShape {
        Square => "square",
        Circle => "circle",
    }
}

option_enum! {
    /// Colour palette the service picks from when no background is given.
    Theme, InvalidTheme {
        Material => "material",
        Flat => "flat",
    }
}

option_enum! {
    TextCase, InvalidTextCase {
        Lower => "lower",
        Upper => "upper",
        Title => "title",
    }
}

option_enum! {
    Font, InvalidFont {
        OpenSans => "open-sans",
        SourceSansPro => "source-sans-pro",
        Roboto => "roboto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_png() {
        assert_eq!(Format::default(), Format::Png);
    }

    #[test]
    fn parses_every_wire_name() {
        for f in Format::ALL {
            assert_eq!(f.as_str().parse::<Format>().unwrap(), *f);
        }
        for s in Shape::ALL {
            assert_eq!(s.as_str().parse::<Shape>().unwrap(), *s);
        }
        for t in Theme::ALL {
            assert_eq!(t.as_str().parse::<Theme>().unwrap(), *t);
        }
        for c in TextCase::ALL {
            assert_eq!(c.as_str().parse::<TextCase>().unwrap(), *c);
        }
        for f in Font::ALL {
            assert_eq!(f.as_str().parse::<Font>().unwrap(), *f);
        }
    }

    #[test]
    fn rejects_unknown_values_with_field_specific_error() {
        assert_eq!(
            "webm".parse::<Format>(),
            Err(AvtrError::InvalidFormat("webm".to_string()))
        );
        assert_eq!(
            "triangle".parse::<Shape>(),
            Err(AvtrError::InvalidShape("triangle".to_string()))
        );
        assert_eq!(
            "metro".parse::<Theme>(),
            Err(AvtrError::InvalidTheme("metro".to_string()))
        );
        assert_eq!(
            "camel".parse::<TextCase>(),
            Err(AvtrError::InvalidTextCase("camel".to_string()))
        );
        assert_eq!(
            "invalid font".parse::<Font>(),
            Err(AvtrError::InvalidFont("invalid font".to_string()))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!("PNG".parse::<Format>().is_err());
        assert!("Roboto".parse::<Font>().is_err());
    }

    #[test]
    fn font_display_uses_hyphenated_name() {
        assert_eq!(Font::SourceSansPro.to_string(), "source-sans-pro");
    }
}
