#![allow(dead_code)]

use libcors::constants::method;
use libcors::{Cors, CorsDecision, CorsError, CorsOptions, Origins, RequestContext};
use std::future::Future;

pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("tokio runtime")
        .block_on(future)
}

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<Origins>,
    methods: Option<Vec<String>>,
    request_headers: Option<Vec<String>>,
    response_headers: Option<Vec<String>>,
    supports_credentials: Option<bool>,
    max_age: Option<u64>,
    end_preflight_requests: Option<bool>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: Origins) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn origin_list<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins(Origins::list(origins))
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn request_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn response_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.supports_credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn end_preflight_requests(mut self, enabled: bool) -> Self {
        self.end_preflight_requests = Some(enabled);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::default();

        Cors::new(CorsOptions {
            origins: self.origins.unwrap_or(defaults.origins),
            methods: self.methods.unwrap_or(defaults.methods),
            request_headers: self.request_headers.unwrap_or(defaults.request_headers),
            response_headers: self.response_headers.unwrap_or(defaults.response_headers),
            supports_credentials: self
                .supports_credentials
                .unwrap_or(defaults.supports_credentials),
            max_age: self.max_age.or(defaults.max_age),
            end_preflight_requests: self
                .end_preflight_requests
                .unwrap_or(defaults.end_preflight_requests),
        })
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn try_check(self, cors: &Cors) -> Result<CorsDecision, CorsError> {
        let ActualRequestBuilder { method, origin } = self;
        let ctx = RequestContext {
            method: &method,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        block_on(cors.evaluate(&ctx))
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        self.try_check(cors)
            .expect("actual request evaluation should succeed")
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn try_check(self, cors: &Cors) -> Result<CorsDecision, CorsError> {
        let PreflightRequestBuilder {
            origin,
            request_method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        };
        block_on(cors.evaluate(&ctx))
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        self.try_check(cors)
            .expect("preflight request evaluation should succeed")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
