// src/presentation/http/redirect.rs
//! Encoding of names carried through redirect query strings.
//!
//! A name is form-url-encoded once here and once more when the redirect
//! query string is serialized. The query extractor of the finish handler
//! removes the outer layer and [`decode_value`] removes the inner one.
//! A list is encoded element-wise and joined with `,`, which an encoded
//! element never contains.

use axum::response::Redirect;
use serde::Serialize;

const LIST_SEPARATOR: char = ',';

pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Inverse of [`encode_value`]. `None` when the input holds characters an
/// encoded value never contains.
pub fn decode_value(encoded: &str) -> Option<String> {
    if encoded.contains(['&', '=', LIST_SEPARATOR]) {
        return None;
    }
    let decoded = form_urlencoded::parse(encoded.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default();
    Some(decoded)
}

pub fn encode_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| encode_value(value.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn decode_list(encoded: &str) -> Option<Vec<String>> {
    if encoded.is_empty() {
        return Some(Vec::new());
    }
    encoded.split(LIST_SEPARATOR).map(decode_value).collect()
}

/// `303 See Other` to `path` with `params` as its query string.
pub fn see_other<P: Serialize>(path: &str, params: &P) -> Redirect {
    match serde_urlencoded::to_string(params) {
        Ok(query) if !query.is_empty() => Redirect::to(&format!("{path}?{query}")),
        Ok(_) => Redirect::to(path),
        Err(err) => {
            tracing::warn!(error = %err, path, "redirect parameters not serializable");
            Redirect::to(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn values_round_trip() {
        for name in [
            "삼성전자, 1분기 영업이익 6.6조",
            "a & b = c",
            "100% 성장?",
            "plus+sign / slash",
            "x",
        ] {
            let encoded = encode_value(name);
            assert!(!encoded.contains(','), "{encoded}");
            assert_eq!(decode_value(&encoded).as_deref(), Some(name));
        }
    }

    #[test]
    fn lists_round_trip_in_order() {
        let names = ["가, 나", "다", "라 마"];
        let encoded = encode_list(&names);
        assert_eq!(encoded.matches(',').count(), 2);
        assert_eq!(decode_list(&encoded).unwrap(), names);
        assert_eq!(decode_list("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn raw_delimiters_are_rejected() {
        assert_eq!(decode_value("a=b"), None);
        assert_eq!(decode_value("a&b"), None);
    }

    #[test]
    fn redirect_query_is_encoded_twice() {
        let encoded = encode_value("삼성 전자");
        let response = see_other("/finish", &[("name", encoded.as_str())]).into_response();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        let location = response.headers()["location"].to_str().unwrap();
        let query = location.strip_prefix("/finish?").unwrap();
        let parsed: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
        assert_eq!(parsed, vec![("name".to_string(), encoded.clone())]);
        assert_eq!(decode_value(&parsed[0].1).unwrap(), "삼성 전자");
    }
}
