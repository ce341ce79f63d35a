use crate::constants::{SIMPLE_METHODS, SIMPLE_REQUEST_HEADERS, SIMPLE_RESPONSE_HEADERS};
use crate::origin::Origins;

/// Caller-facing CORS configuration.
///
/// Override individual fields with struct-update syntax; everything else keeps
/// the defaults below:
///
/// ```
/// use libcors::{CorsOptions, Origins};
///
/// let options = CorsOptions {
///     origins: Origins::list(["https://app.example.com"]),
///     max_age: Some(600),
///     ..CorsOptions::default()
/// };
/// assert!(options.end_preflight_requests);
/// ```
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origins: Origins,
    pub methods: Vec<String>,
    pub request_headers: Vec<String>,
    pub response_headers: Vec<String>,
    pub supports_credentials: bool,
    pub max_age: Option<u64>,
    pub end_preflight_requests: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: Origins::any(),
            methods: SIMPLE_METHODS.iter().map(|&value| value.into()).collect(),
            request_headers: SIMPLE_REQUEST_HEADERS
                .iter()
                .map(|&value| value.into())
                .collect(),
            response_headers: SIMPLE_RESPONSE_HEADERS
                .iter()
                .map(|&value| value.into())
                .collect(),
            supports_credentials: false,
            max_age: None,
            end_preflight_requests: true,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
