//! Builds avatar image URLs for the avtr.io rendering service.
//!
//! The crate only produces URLs; fetching the image is left to the caller's
//! HTTP client.

pub mod avatar;
pub mod color;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod options;
pub mod url_model;

pub use avatar::Avtr;
pub use color::Rgba;
pub use config::AvtrConfig;
pub use error::AvtrError;
pub use identity::{classify, Identity};
pub use options::{Font, Format, Shape, TextCase, Theme};
pub use url_model::Endpoint;
