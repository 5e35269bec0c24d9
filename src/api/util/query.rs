//! Explicit query-string parsing
//!
//! Descriptors are built from a string-keyed multi-value lookup instead of
//! serde binding: several parameters may repeat (`filters[]=a&filters[]=b`)
//! and the legacy API accepts both `key` and `key[]` spellings.

use std::str::FromStr;

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
#[error("invalid value for parameter '{name}': '{value}'")]
pub struct InvalidParam {
    pub name: String,
    pub value: String,
}

impl InvalidParam {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<InvalidParam> for AppError {
    fn from(err: InvalidParam) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Decoded query parameters in request order.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut pairs = Vec::new();

        for piece in raw.unwrap_or("").split('&').filter(|p| !p.is_empty()) {
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            pairs.push((decode(key), decode(value)));
        }

        Self(pairs)
    }

    /// First value for `key`, also matching the `key[]` spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| key_matches(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in request order.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| key_matches(k, key))
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn number<T: FromStr>(&self, key: &str) -> Result<Option<T>, InvalidParam> {
        match self.get(key) {
            Some(v) => v
                .parse()
                .map(Some)
                .map_err(|_| InvalidParam::new(key, v)),
            None => Ok(None),
        }
    }

    pub fn boolean(&self, key: &str) -> Result<Option<bool>, InvalidParam> {
        match self.get(key) {
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(v) => Err(InvalidParam::new(key, v)),
            None => Ok(None),
        }
    }
}

fn key_matches(k: &str, key: &str) -> bool {
    k == key || k.strip_suffix("[]") == Some(key)
}

fn decode(s: &str) -> String {
    let plus = s.replace('+', " ");
    urlencoding::decode(&plus)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| plus.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_keys_in_order() {
        let pairs = QueryPairs::parse(Some("filters[]=request_count&filters[]=request_duration"));
        assert_eq!(
            pairs.get_all("filters"),
            vec!["request_count", "request_duration"]
        );
    }

    #[test]
    fn bracket_and_plain_spellings_are_equivalent() {
        let pairs = QueryPairs::parse(Some("quantiles=0.5&quantiles[]=0.99"));
        assert_eq!(pairs.get_all("quantiles"), vec!["0.5", "0.99"]);
    }

    #[test]
    fn percent_decodes_keys_and_values() {
        let pairs = QueryPairs::parse(Some("byLabels%5B%5D=source_workload&graphType=a+b%2Fc"));
        assert_eq!(pairs.get_all("byLabels"), vec!["source_workload"]);
        assert_eq!(pairs.get("graphType"), Some("a b/c"));
    }

    #[test]
    fn missing_and_empty_values() {
        let pairs = QueryPairs::parse(Some("loopback=&reporter"));
        assert_eq!(pairs.get("loopback"), Some(""));
        assert_eq!(pairs.get("reporter"), Some(""));
        assert_eq!(pairs.get("limit"), None);
        assert!(QueryPairs::parse(None).get("limit").is_none());
    }

    #[test]
    fn numbers_and_booleans() {
        let pairs = QueryPairs::parse(Some("duration=60&injectServiceNodes=true&step=abc"));
        assert_eq!(pairs.number::<i64>("duration").unwrap(), Some(60));
        assert_eq!(pairs.boolean("injectServiceNodes").unwrap(), Some(true));
        assert!(pairs.number::<i64>("step").is_err());
        assert_eq!(pairs.number::<i64>("queryTime").unwrap(), None);
    }
}
