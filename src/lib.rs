//! Transport-agnostic CORS decisions.
//!
//! Given a request method and its (lower-cased) headers, [`Cors`] works out
//! which `Access-Control-*` headers the response needs, what to merge into
//! `Vary`, and whether a preflight should be answered right away. Applying the
//! [`CorsDecision`] to a real response is left to the caller.
//!
//! ```
//! use libcors::{Cors, CorsOptions, Origins, constants::header};
//! use std::collections::HashMap;
//!
//! let cors = Cors::new(CorsOptions {
//!     origins: Origins::list(["https://app.example.com"]),
//!     supports_credentials: true,
//!     ..CorsOptions::default()
//! });
//!
//! let headers = HashMap::from([("origin".to_string(), "https://app.example.com".to_string())]);
//! let decision = futures_util::FutureExt::now_or_never(cors.decide("GET", &headers))
//!     .expect("static origins resolve immediately")
//!     .expect("no origin predicate to fail");
//!
//! assert_eq!(
//!     decision.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(String::as_str),
//!     Some("https://app.example.com"),
//! );
//! assert_eq!(decision.vary, vec![header::ORIGIN]);
//! ```

pub mod constants;
mod case;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use constants::{SIMPLE_METHODS, SIMPLE_REQUEST_HEADERS, SIMPLE_RESPONSE_HEADERS};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::{Headers, merge_vary};
pub use options::CorsOptions;
pub use origin::{BoxError, OriginMatch, OriginPredicateFn, Origins, PredicateError};
pub use policy::Policy;
pub use result::{CorsDecision, CorsError};
