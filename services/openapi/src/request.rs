use http::header::IntoHeaderName;
use http::{HeaderMap, HeaderValue, Method};
use volcsign_core::Result;

use crate::query::{Query, QueryValue};

/// ApiRequest describes one call to the openapi gateway before signing.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Action to invoke, sent as the `Action` query.
    pub action: String,
    /// Region to sign for, falls back to the signer's region.
    pub region: Option<String>,
    /// Query parameters besides `Action` and `Version`.
    pub query: Query,
    /// Caller supplied headers.
    pub headers: HeaderMap,
    /// Request body, absent means empty.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Create a new request for given method and action.
    pub fn new(method: Method, action: impl Into<String>) -> Self {
        Self {
            method,
            action: action.into(),
            region: None,
            query: Query::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set the region of this request.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Add a query parameter, replacing the previous value of the same key.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl IntoHeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set the body of this request.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// SignedRequest is a request that is ready to be sent.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method.
    pub method: Method,
    /// Host to send to.
    pub host: String,
    /// Request path.
    pub path: String,
    /// Normalized query, exactly the one that has been signed.
    pub query: String,
    /// Caller headers merged with the signed headers.
    pub headers: HeaderMap,
    /// Body whose digest has been signed.
    pub body: String,
}

impl SignedRequest {
    /// Uri of this request: `https://{host}{path}?{query}`.
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            format!("https://{}{}", self.host, self.path)
        } else {
            format!("https://{}{}?{}", self.host, self.path, self.query)
        }
    }

    /// Convert into an [`http::Request`] for the transport of your choice.
    pub fn into_http_request(self) -> Result<http::Request<String>> {
        let uri = self.uri();
        let mut req = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body)?;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}

/// Merge computed headers into caller headers.
///
/// Every computed header replaces all caller values of the same name (header
/// names compare case-insensitively). Caller headers without a computed
/// counterpart are kept as-is.
pub fn merge_headers(caller: HeaderMap, computed: HeaderMap) -> HeaderMap {
    let mut merged = caller;
    let mut last = None;
    for (name, value) in computed {
        // `None` means another value of the previous name.
        let name = match name {
            Some(name) => {
                merged.remove(&name);
                last = Some(name.clone());
                name
            }
            None => match &last {
                Some(name) => name.clone(),
                None => continue,
            },
        };
        merged.append(name, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST, USER_AGENT};
    use pretty_assertions::assert_eq;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut m = HeaderMap::new();
        for &(k, v) in pairs {
            m.append(k, HeaderValue::from_static(v));
        }
        m
    }

    #[test]
    fn test_merge_computed_wins() {
        let caller = headers(&[
            ("content-type", "text/plain"),
            ("user-agent", "volcsign"),
            ("host", "caller.example.com"),
        ]);
        let computed = headers(&[
            ("host", "iam.volcengineapi.com"),
            ("content-type", "application/json"),
            ("authorization", "HMAC-SHA256 ..."),
        ]);

        let merged = merge_headers(caller, computed);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[HOST], "iam.volcengineapi.com");
        assert_eq!(merged[CONTENT_TYPE], "application/json");
        assert_eq!(merged[AUTHORIZATION], "HMAC-SHA256 ...");
        assert_eq!(merged[USER_AGENT], "volcsign");
    }

    #[test]
    fn test_merge_replaces_every_caller_value() {
        let caller = headers(&[("x-date", "a"), ("x-date", "b")]);
        let computed = headers(&[("x-date", "20240102T030405Z")]);

        let merged = merge_headers(caller, computed);
        let values: Vec<_> = merged.get_all("x-date").iter().collect();
        assert_eq!(values, vec!["20240102T030405Z"]);
    }

    #[test]
    fn test_merge_keeps_multi_valued_computed_headers() {
        let computed = headers(&[("x-multi", "1"), ("x-multi", "2")]);

        let merged = merge_headers(headers(&[("x-multi", "0")]), computed);
        let values: Vec<_> = merged.get_all("x-multi").iter().collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_merge_into_empty() {
        let computed = headers(&[("host", "iam.volcengineapi.com")]);
        let merged = merge_headers(HeaderMap::new(), computed.clone());
        assert_eq!(merged, computed);
    }

    #[test]
    fn test_signed_request_uri() {
        let mut req = SignedRequest {
            method: Method::GET,
            host: "iam.volcengineapi.com".to_string(),
            path: "/".to_string(),
            query: "Action=ListUsers&Version=2021-03-03".to_string(),
            headers: HeaderMap::new(),
            body: String::new(),
        };
        assert_eq!(
            req.uri(),
            "https://iam.volcengineapi.com/?Action=ListUsers&Version=2021-03-03"
        );

        req.query = String::new();
        assert_eq!(req.uri(), "https://iam.volcengineapi.com/");
    }

    #[test]
    fn test_into_http_request() -> anyhow::Result<()> {
        let req = SignedRequest {
            method: Method::POST,
            host: "iam.volcengineapi.com".to_string(),
            path: "/".to_string(),
            query: "Action=CreateRoute&Version=2022-11-12".to_string(),
            headers: headers(&[("content-type", "application/json")]),
            body: r#"{"Name":"route"}"#.to_string(),
        };

        let req = req.into_http_request()?;
        assert_eq!(req.method(), Method::POST);
        assert_eq!(
            req.uri().to_string(),
            "https://iam.volcengineapi.com/?Action=CreateRoute&Version=2022-11-12"
        );
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.body(), r#"{"Name":"route"}"#);
        Ok(())
    }

    #[test]
    fn test_api_request_builder() {
        let req = ApiRequest::new(Method::GET, "ListUsers")
            .with_region("cn-shanghai")
            .with_query("Limit", "2")
            .with_query("Tag", vec!["a", "b"])
            .with_header("user-agent", HeaderValue::from_static("volcsign"))
            .with_body("");

        assert_eq!(req.action, "ListUsers");
        assert_eq!(req.region.as_deref(), Some("cn-shanghai"));
        assert_eq!(req.query.get("Limit"), Some(&QueryValue::from("2")));
        assert_eq!(
            req.query.get("Tag"),
            Some(&QueryValue::Multi(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(req.headers[USER_AGENT], "volcsign");
        assert_eq!(req.body.as_deref(), Some(""));
    }
}
