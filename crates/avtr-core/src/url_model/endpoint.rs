//! Base URL of the rendering service.

use anyhow::{bail, Context, Result};
use std::borrow::Cow;
use std::fmt;

/// The URL the `.<format>` extension is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// The public avtr.io service.
    pub const DEFAULT: Endpoint = Endpoint(Cow::Borrowed("https://avtr.io/avtr"));

    /// Validates a configured endpoint.
    ///
    /// It must be an absolute http(s) URL whose path names a file stem
    /// (not ending in `/`), with no query or fragment.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = url::Url::parse(raw).with_context(|| format!("invalid endpoint URL: {raw}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            bail!("endpoint must use http or https: {raw}");
        }
        if url.query().is_some() || url.fragment().is_some() {
            bail!("endpoint must not carry a query or fragment: {raw}");
        }
        if url.path().ends_with('/') {
            bail!("endpoint must name a path such as https://avtr.io/avtr: {raw}");
        }
        Ok(Endpoint(Cow::Owned(url.into())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::DEFAULT
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
