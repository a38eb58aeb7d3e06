use std::collections::BTreeMap;

use percent_encoding::utf8_percent_encode;

use crate::constants::QUERY_ENCODE_SET;

/// Value of a query parameter.
///
/// A key may carry a single value or a sequence of values; every element of a
/// sequence is emitted as its own `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value.
    Single(String),
    /// Multiple values, kept in the given order.
    Multi(Vec<String>),
}

impl QueryValue {
    fn values(&self) -> &[String] {
        match self {
            QueryValue::Single(v) => std::slice::from_ref(v),
            QueryValue::Multi(vs) => vs,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Single(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Single(v)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(vs: Vec<String>) -> Self {
        QueryValue::Multi(vs)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(vs: Vec<&str>) -> Self {
        QueryValue::Multi(vs.into_iter().map(String::from).collect())
    }
}

/// Query parameters of a request, ordered by key.
pub type Query = BTreeMap<String, QueryValue>;

/// Serialize query parameters into the canonical query string.
///
/// - keys are visited in ascending byte-wise order
/// - values of a multi-valued key keep their given order
/// - keys and values are percent-encoded, only `A-Za-z0-9-_.~` stay as-is
///
/// The same string is used for signing and for the query of the actual
/// request.
///
/// ```
/// use volcsign_openapi::{normalize_query, Query, QueryValue};
///
/// let mut query = Query::new();
/// query.insert("Limit".to_string(), QueryValue::from("10"));
/// query.insert("Action".to_string(), QueryValue::from("ListUsers"));
/// assert_eq!(normalize_query(&query), "Action=ListUsers&Limit=10");
/// ```
pub fn normalize_query(query: &Query) -> String {
    let mut s = String::with_capacity(64);

    for (k, v) in query {
        let key = utf8_percent_encode(k, &QUERY_ENCODE_SET).to_string();
        for value in v.values() {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&key);
            s.push('=');
            s.extend(utf8_percent_encode(value, &QUERY_ENCODE_SET));
        }
    }

    // Spaces must show up as `%20`, never `+`.
    s.replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn query<const N: usize>(pairs: [(&str, QueryValue); N]) -> Query {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(normalize_query(&Query::new()), "");
    }

    #[test]
    fn test_keys_are_sorted() {
        let q = query([
            ("Version", "2021-03-03".into()),
            ("Action", "ListUsers".into()),
            ("Limit", "2".into()),
        ]);
        assert_eq!(
            normalize_query(&q),
            "Action=ListUsers&Limit=2&Version=2021-03-03"
        );
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = query([("b", "2".into()), ("a", "1".into()), ("c", "3".into())]);
        let b = query([("c", "3".into()), ("b", "2".into()), ("a", "1".into())]);
        assert_eq!(normalize_query(&a), normalize_query(&b));
        assert_eq!(normalize_query(&a), "a=1&b=2&c=3");
    }

    #[test]
    fn test_multi_value_keeps_given_order() {
        let q = query([("key", vec!["b", "a"].into()), ("a", "1".into())]);
        assert_eq!(normalize_query(&q), "a=1&key=b&key=a");
    }

    #[test]
    fn test_multi_value_without_elements() {
        let q = query([("empty", QueryValue::Multi(vec![])), ("k", "v".into())]);
        assert_eq!(normalize_query(&q), "k=v");

        let q = query([("empty", QueryValue::Multi(vec![]))]);
        assert_eq!(normalize_query(&q), "");
    }

    #[test]
    fn test_byte_wise_key_order() {
        // Uppercase letters sort before lowercase ones.
        let q = query([("a", "1".into()), ("B", "2".into()), ("é", "3".into())]);
        assert_eq!(normalize_query(&q), "B=2&a=1&%C3%A9=3");
    }

    #[test_case("a b", "k=a%20b"; "space")]
    #[test_case("a+b", "k=a%2Bb"; "plus")]
    #[test_case("-_.~", "k=-_.~"; "unreserved")]
    #[test_case("x/y", "k=x%2Fy"; "slash")]
    #[test_case("a=b&c", "k=a%3Db%26c"; "separators")]
    #[test_case("", "k="; "empty value")]
    #[test_case("中", "k=%E4%B8%AD"; "utf8")]
    fn test_value_encoding(value: &str, expected: &str) {
        let q = query([("k", value.into())]);
        assert_eq!(normalize_query(&q), expected);
    }
}
