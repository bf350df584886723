//! RGBA colour values as sent to the rendering service.

use std::fmt;

/// An RGBA colour with every channel already inside its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Builds a colour from unchecked input.
    ///
    /// `r`, `g` and `b` are clamped to `[0, 255]`, `a` to `[0, 1]`. A NaN
    /// alpha becomes 0.
    pub fn clamped(r: i64, g: i64, b: i64, a: f64) -> Self {
        Rgba {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_alpha(a),
        }
    }

    /// Opaque colour from unchecked channel input.
    pub fn opaque(r: i64, g: i64, b: i64) -> Self {
        Self::clamped(r, g, b, 1.0)
    }
}

fn clamp_channel(v: i64) -> u8 {
    // Lossless after the clamp.
    v.clamp(0, 255) as u8
}

fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        return 0.0;
    }
    // Adding +0.0 turns -0.0 into 0.0 so it never renders as "-0".
    a.clamp(0.0, 1.0) + 0.0
}

/// Significant digits kept in the rendered alpha.
const ALPHA_PRECISION: usize = 14;

/// Rounds to [`ALPHA_PRECISION`] significant digits so `1/3` renders as
/// `0.33333333333333` rather than the full round-trip form.
fn round_alpha(a: f64) -> f64 {
    format!("{:.*e}", ALPHA_PRECISION - 1, a)
        .parse()
        .unwrap_or(a)
}

impl fmt::Display for Rgba {
    /// Renders as `rgba(r,g,b,a)`; alpha without trailing zeros (`1`, `0.5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            round_alpha(self.a)
        )
    }
}
