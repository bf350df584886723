//! URL assembly.
//!
//! Joins the endpoint, the format extension and the form-encoded query built
//! from the avatar's attributes, in the order they are given.

mod endpoint;
mod query;

pub use endpoint::Endpoint;
pub use query::QueryValue;

use crate::options::Format;
use url::form_urlencoded;

/// Builds `<endpoint>.<format>[?<query>]`.
///
/// The query is appended whenever `pairs` is non-empty and carries every
/// pair, in order. Zero and empty values are still real values here.
///
/// # Examples
///
/// - no pairs → `"https://avtr.io/avtr.png"`
/// - `[("email", "a@b.c")]` → `"https://avtr.io/avtr.png?email=a%40b.c"`
pub fn build_url(endpoint: &Endpoint, format: Format, pairs: &[(&'static str, QueryValue)]) -> String {
    let mut out = format!("{}.{}", endpoint, format);
    if !pairs.is_empty() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.to_string())))
            .finish();
        out.push('?');
        out.push_str(&query);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn bare_url_without_pairs() {
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Png, &[]),
            "https://avtr.io/avtr.png"
        );
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Gif, &[]),
            "https://avtr.io/avtr.gif"
        );
    }

    #[test]
    fn reserved_characters_are_form_encoded() {
        let pairs = [
            ("email", QueryValue::from("email@test.com")),
            ("background", QueryValue::from(Rgba::clamped(100, 100, 100, 0.5))),
            ("initials", QueryValue::from("J W")),
        ];
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Png, &pairs),
            "https://avtr.io/avtr.png?email=email%40test.com\
             &background=rgba%28100%2C100%2C100%2C0.5%29&initials=J+W"
        );
    }

    #[test]
    fn zero_and_empty_values_still_get_a_query() {
        let pairs = [("rounded_corners", QueryValue::Int(0))];
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Png, &pairs),
            "https://avtr.io/avtr.png?rounded_corners=0"
        );
        let pairs = [("last_name", QueryValue::from(""))];
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Png, &pairs),
            "https://avtr.io/avtr.png?last_name="
        );
    }

    #[test]
    fn zero_values_kept_next_to_others() {
        let pairs = [
            ("size", QueryValue::Int(500)),
            ("rounded_corners", QueryValue::Int(0)),
        ];
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Jpg, &pairs),
            "https://avtr.io/avtr.jpg?size=500&rounded_corners=0"
        );
    }

    #[test]
    fn asterisk_stays_literal() {
        let pairs = [("initials", QueryValue::from("A*B"))];
        assert_eq!(
            build_url(&Endpoint::DEFAULT, Format::Png, &pairs),
            "https://avtr.io/avtr.png?initials=A*B"
        );
    }

    #[test]
    fn custom_endpoint_prefix() {
        let ep = Endpoint::parse("http://localhost:8080/avatar").unwrap();
        assert_eq!(
            build_url(&ep, Format::Png, &[("size", QueryValue::Int(64))]),
            "http://localhost:8080/avatar.png?size=64"
        );
    }
}
