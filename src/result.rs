use crate::headers::{Headers, merge_vary};
use crate::origin::PredicateError;
use thiserror::Error;

/// What the caller should add to the outgoing response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsDecision {
    pub headers: Headers,
    /// Request headers the decision depended on, to be merged into `Vary`.
    pub vary: Vec<String>,
    /// Set only when a preflight should be answered right away.
    pub status: Option<u16>,
}

impl CorsDecision {
    /// True for requests outside CORS scope and for denied origins.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.vary.is_empty() && self.status.is_none()
    }

    pub fn ends_response(&self) -> bool {
        self.status.is_some()
    }

    /// The `Vary` value to write back, given the one already on the response.
    pub fn vary_header(&self, existing: Option<&str>) -> Option<String> {
        merge_vary(existing, &self.vary)
    }
}

/// Errors that can be produced during CORS evaluation.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("failed to evaluate origin `{origin}`")]
    OriginPredicate {
        origin: String,
        #[source]
        source: PredicateError,
    },
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
