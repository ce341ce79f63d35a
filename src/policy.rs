use crate::case::normalize_lower_all;
use crate::constants::{SIMPLE_RESPONSE_HEADERS, request_header};
use crate::options::CorsOptions;
use crate::origin::Origins;

/// Normalized, read-only cross-origin policy.
///
/// Header-name lists are lower-cased once here, so every later comparison is a
/// plain membership test.
#[derive(Clone, Debug)]
pub struct Policy {
    origins: Origins,
    methods: Vec<String>,
    request_headers: Vec<String>,
    response_headers: Vec<String>,
    supports_credentials: bool,
    max_age: Option<u64>,
    end_preflight_requests: bool,
}

impl Policy {
    pub fn new(options: CorsOptions) -> Self {
        let CorsOptions {
            origins,
            methods,
            request_headers,
            response_headers,
            supports_credentials,
            max_age,
            end_preflight_requests,
        } = options;

        Self {
            origins,
            methods,
            request_headers: normalize_lower_all(request_headers),
            response_headers: normalize_lower_all(response_headers),
            supports_credentials,
            max_age,
            end_preflight_requests,
        }
    }

    pub fn origins(&self) -> &Origins {
        &self.origins
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn request_headers(&self) -> &[String] {
        &self.request_headers
    }

    pub fn response_headers(&self) -> &[String] {
        &self.response_headers
    }

    pub fn supports_credentials(&self) -> bool {
        self.supports_credentials
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    pub fn end_preflight_requests(&self) -> bool {
        self.end_preflight_requests
    }

    /// Case-sensitive: method tokens are compared as received.
    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.iter().any(|allowed| allowed == method)
    }

    /// `header` must already be lower-cased. `origin` is always allowed since
    /// user agents add it to every preflight on their own.
    pub fn allows_request_header(&self, header: &str) -> bool {
        header == request_header::ORIGIN
            || self
                .request_headers
                .iter()
                .any(|allowed| allowed == header)
    }

    /// Response headers scripts can only read once explicitly exposed.
    pub fn exposed_headers(&self) -> Vec<&str> {
        self.response_headers
            .iter()
            .map(String::as_str)
            .filter(|header| !SIMPLE_RESPONSE_HEADERS.contains(header))
            .collect()
    }

    /// Whether allow-origin must echo the request origin instead of `*`.
    pub fn reflects_origin(&self) -> bool {
        self.supports_credentials || self.origins.is_restricted()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl From<CorsOptions> for Policy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
