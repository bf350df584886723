//! `avtr url <identity>` – build and print an avatar URL.

use anyhow::{Context, Result};
use avtr_core::{Avtr, AvtrConfig};
use clap::Args;
use std::str::FromStr;

/// Colour given as `R,G,B` or `R,G,B,A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaArg {
    pub r: i64,
    pub g: i64,
    pub b: i64,
    pub a: f64,
}

impl FromStr for RgbaArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let channel = |v: &str| {
            v.parse::<i64>()
                .map_err(|e| format!("bad colour channel '{v}': {e}"))
        };
        match parts.as_slice() {
            [r, g, b] => Ok(RgbaArg {
                r: channel(*r)?,
                g: channel(*g)?,
                b: channel(*b)?,
                a: 1.0,
            }),
            [r, g, b, a] => Ok(RgbaArg {
                r: channel(*r)?,
                g: channel(*g)?,
                b: channel(*b)?,
                a: a.parse().map_err(|e| format!("bad alpha '{a}': {e}"))?,
            }),
            _ => Err(format!("expected R,G,B or R,G,B,A, got '{s}'")),
        }
    }
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Email address, "First Last" or initials.
    pub identity: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Letters drawn (1 or 2; anything else means 2).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub letter_count: Option<i64>,

    /// Background colour as R,G,B[,A].
    #[arg(long, value_name = "R,G,B[,A]", allow_hyphen_values = true)]
    pub background: Option<RgbaArg>,

    /// Size in pixels (negative means 100).
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    pub size: Option<i64>,

    #[arg(long)]
    pub rounded_corners: bool,

    /// square | circle
    #[arg(long)]
    pub shape: Option<String>,

    /// material | flat
    #[arg(long)]
    pub theme: Option<String>,

    /// lower | upper | title
    #[arg(long)]
    pub text_case: Option<String>,

    /// Text colour as R,G,B[,A].
    #[arg(long, value_name = "R,G,B[,A]", allow_hyphen_values = true)]
    pub color: Option<RgbaArg>,

    /// Font weight, clamped to 100..=900.
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub font_weight: Option<i64>,

    /// open-sans | source-sans-pro | roboto
    #[arg(long)]
    pub font: Option<String>,

    /// png | jpg | gif (defaults to the configured format, else png)
    #[arg(long)]
    pub format: Option<String>,
}

/// Applies `args` to a builder created from `cfg` and returns the URL.
pub fn run_url(cfg: &AvtrConfig, args: &UrlArgs) -> Result<String> {
    let mut avtr = Avtr::with_config(args.identity.as_deref().unwrap_or_default(), cfg)?;

    if let Some(name) = &args.first_name {
        avtr.first_name(name);
    }
    if let Some(name) = &args.last_name {
        avtr.last_name(name);
    }
    if let Some(n) = args.letter_count {
        avtr.letter_count(n);
    }
    if let Some(c) = args.background {
        avtr.background(c.r, c.g, c.b, c.a);
    }
    if let Some(px) = args.size {
        avtr.size(px);
    }
    if args.rounded_corners {
        avtr.rounded_corners(true);
    }
    if let Some(shape) = &args.shape {
        avtr.shape(shape).context("--shape")?;
    }
    if let Some(theme) = &args.theme {
        avtr.theme(theme).context("--theme")?;
    }
    if let Some(case) = &args.text_case {
        avtr.text_case(case).context("--text-case")?;
    }
    if let Some(c) = args.color {
        avtr.color(c.r, c.g, c.b, c.a);
    }
    if let Some(w) = args.font_weight {
        avtr.font_weight(w);
    }
    if let Some(font) = &args.font {
        avtr.font(font).context("--font")?;
    }
    if let Some(format) = &args.format {
        avtr.format(format).context("--format")?;
    }

    let url = avtr.to_url();
    tracing::debug!(%url, "built avatar url");
    Ok(url)
}
