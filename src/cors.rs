use crate::case::normalize_lower;
use crate::constants::{PREFLIGHT_STATUS, header, method};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginMatch;
use crate::policy::Policy;
use crate::result::{CorsDecision, CorsError};
use tracing::{debug, trace, warn};

/// CORS decision engine evaluating requests against a [`Policy`].
///
/// Stateless per request: one engine can be shared across threads and tasks.
#[derive(Clone, Debug, Default)]
pub struct Cors {
    policy: Policy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self::with_policy(Policy::new(options))
    }

    pub fn with_policy(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Evaluates a request given its method and lower-cased headers.
    pub async fn decide<'a, I, K, V>(
        &self,
        method: &'a str,
        headers: I,
    ) -> Result<CorsDecision, CorsError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: AsRef<str> + ?Sized + 'a,
        V: AsRef<str> + ?Sized + 'a,
    {
        let request = RequestContext::from_headers(method, headers);
        self.evaluate(&request).await
    }

    pub async fn evaluate(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        let mut decision = CorsDecision::default();

        // Same-origin or non-browser request.
        let Some(origin) = request.origin.filter(|origin| !origin.is_empty()) else {
            trace!(method = request.method, "no origin header, outside CORS scope");
            return Ok(decision);
        };

        let outcome = match self.policy.origins().resolve(origin).await {
            Ok(outcome) => outcome,
            Err(source) => {
                warn!(origin, error = %source, "origin predicate failed");
                return Err(CorsError::OriginPredicate {
                    origin: origin.to_owned(),
                    source,
                });
            }
        };

        match outcome {
            OriginMatch::NotMatched => {
                debug!(origin, "origin not permitted");
                return Ok(decision);
            }
            OriginMatch::Matched => decision.vary.push(header::ORIGIN.to_owned()),
            OriginMatch::Unrestricted => {}
        }

        let builder = HeaderBuilder::new(&self.policy, origin);
        let headers = if request.method == method::OPTIONS {
            let headers = self.process_preflight(request, &builder);
            if self.policy.end_preflight_requests() {
                decision.status = Some(PREFLIGHT_STATUS);
            }
            headers
        } else {
            self.process_actual(&builder)
        };
        decision.headers = headers.into_headers();

        Ok(decision)
    }

    /// Empty collection when the preflight is rejected.
    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
    ) -> HeaderCollection {
        let Some(requested_method) = request.access_control_request_method else {
            debug!("preflight without access-control-request-method");
            return HeaderCollection::new();
        };

        if !self.policy.allows_method(requested_method) {
            debug!(method = requested_method, "preflight method not permitted");
            return HeaderCollection::new();
        }

        let requested_headers = parse_request_headers(request.access_control_request_headers);
        if let Some(rejected) = requested_headers
            .iter()
            .find(|name| !self.policy.allows_request_header(name))
        {
            debug!(header = %rejected, "preflight header not permitted");
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(5);
        headers.extend(builder.build_origin_headers());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        debug!(method = requested_method, "preflight accepted");
        headers
    }

    fn process_actual(&self, builder: &HeaderBuilder<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(3);
        headers.extend(builder.build_origin_headers());
        headers.extend(builder.build_exposed_headers());
        headers
    }
}

/// Splits `Access-Control-Request-Headers` on a comma and the whitespace
/// following it, lower-casing every token. Tokens are not trimmed otherwise,
/// so stray spaces or empty segments fail the membership test.
fn parse_request_headers(value: Option<&str>) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(value) => value
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                if index == 0 {
                    normalize_lower(token)
                } else {
                    normalize_lower(token.trim_start())
                }
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
