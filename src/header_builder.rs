use crate::constants::{WILDCARD, header};
use crate::headers::HeaderCollection;
use crate::policy::Policy;

/// Builds the `Access-Control-*` headers for one accepted request.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
    origin: &'a str,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy, origin: &'a str) -> Self {
        Self { policy, origin }
    }

    /// Allow-origin plus, when credentials are supported, allow-credentials.
    /// The wildcard is only used without credentials and without an origin
    /// restriction.
    pub(crate) fn build_origin_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        let value = if self.policy.reflects_origin() {
            self.origin
        } else {
            WILDCARD
        };
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);

        if self.policy.supports_credentials() {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.policy.max_age() {
            Some(seconds) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(header::ACCESS_CONTROL_ALLOW_METHODS, self.policy.methods());
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.policy.request_headers(),
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let exposed = self.policy.exposed_headers();
        if exposed.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.as_slice());
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
