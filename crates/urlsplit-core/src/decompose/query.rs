//! Query-string decoding and canonical re-encoding.

use std::collections::BTreeMap;

/// Decoded query parameters, keyed by name in ascending byte order.
/// Values of a repeated name keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    /// Decodes an `application/x-www-form-urlencoded` query string.
    pub fn parse(query: &str) -> Self {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self(params)
    }

    /// Parameters of an optional raw query component.
    pub fn from_query(query: Option<&str>) -> Self {
        query.map(Self::parse).unwrap_or_default()
    }

    /// Canonical encoding: names sorted, every value emitted, form-encoded.
    pub fn encode(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.0 {
            for value in values {
                out.append_pair(name, value);
            }
        }
        out.finish()
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// `(name, first value)` for each distinct name, sorted by name.
    pub fn first_values(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().filter_map(|(name, values)| {
            values
                .first()
                .map(|value| (name.as_str(), value.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_names_and_keeps_value_order() {
        let q = QueryParams::parse("b=2&a=x&a=y");
        assert_eq!(q.encode(), "a=x&a=y&b=2");
        assert_eq!(q.first("a"), Some("x"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn decodes_plus_and_percent() {
        let q = QueryParams::parse("msg=hello+world&path=%2Ftmp%2Fx");
        assert_eq!(q.first("msg"), Some("hello world"));
        assert_eq!(q.first("path"), Some("/tmp/x"));
        assert_eq!(q.encode(), "msg=hello+world&path=%2Ftmp%2Fx");
    }

    #[test]
    fn bare_name_gets_empty_value() {
        let q = QueryParams::parse("flag&x=1");
        assert_eq!(q.first("flag"), Some(""));
        assert_eq!(q.encode(), "flag=&x=1");
    }

    #[test]
    fn canonical_encoding_is_stable() {
        let original = "z=%7E&a=b+c&a=%26&empty=";
        let decoded = QueryParams::parse(original);
        let canonical = decoded.encode();
        let reparsed = QueryParams::parse(&canonical);
        assert_eq!(reparsed, decoded);
        assert_eq!(reparsed.encode(), canonical);
    }

    #[test]
    fn empty_query() {
        let q = QueryParams::parse("");
        assert!(q.is_empty());
        assert_eq!(q.encode(), "");
        assert_eq!(q.first_values().count(), 0);
    }
}
