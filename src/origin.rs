use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stored form of every origin predicate: the raw origin in, a boxed future of
/// the verdict out.
pub type OriginPredicateFn =
    dyn Fn(&str) -> BoxFuture<'static, Result<bool, PredicateError>> + Send + Sync;

/// The set of origins permitted to make cross-origin requests.
#[derive(Clone)]
pub enum Origins {
    /// Exact, case-sensitive origin strings. An empty list places no
    /// restriction on the origin.
    List(Vec<String>),
    /// An external predicate. Only a resolved `true` authorizes the origin.
    Predicate(Arc<OriginPredicateFn>),
}

/// Outcome of resolving a request origin against [`Origins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    Matched,
    NotMatched,
    /// The policy imposes no restriction, so any origin is accepted.
    Unrestricted,
}

/// Failure raised by a fallible or asynchronous origin predicate.
#[derive(Debug, Error)]
#[error("origin predicate failed: {source}")]
pub struct PredicateError {
    source: BoxError,
}

impl PredicateError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            source: error.into(),
        }
    }

    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

impl Default for Origins {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Debug for Origins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origins::List(values) => f.debug_tuple("List").field(values).finish(),
            Origins::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<Vec<String>> for Origins {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl Origins {
    /// Unrestricted: every origin is accepted.
    pub fn any() -> Self {
        Self::List(Vec::new())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::from_fn(move |origin| future::ready(Ok(predicate(origin))).boxed())
    }

    /// A synchronous predicate whose failure aborts the decision.
    pub fn try_predicate<F, E>(predicate: F) -> Self
    where
        F: Fn(&str) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::from_fn(move |origin| {
            future::ready(predicate(origin).map_err(PredicateError::new)).boxed()
        })
    }

    /// A predicate resolved asynchronously, e.g. against a database or a
    /// remote allow-list.
    pub fn async_predicate<F, Fut, E>(predicate: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::from_fn(move |origin| {
            predicate(origin.to_owned())
                .map(|verdict| verdict.map_err(PredicateError::new))
                .boxed()
        })
    }

    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> BoxFuture<'static, Result<bool, PredicateError>> + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether responses must carry the literal origin rather than `*`.
    pub fn is_restricted(&self) -> bool {
        match self {
            Origins::List(values) => !values.is_empty(),
            Origins::Predicate(_) => true,
        }
    }

    pub async fn resolve(&self, origin: &str) -> Result<OriginMatch, PredicateError> {
        match self {
            Origins::Predicate(predicate) => {
                let verdict = predicate(origin).await?;
                Ok(if verdict {
                    OriginMatch::Matched
                } else {
                    OriginMatch::NotMatched
                })
            }
            Origins::List(values) if values.is_empty() => Ok(OriginMatch::Unrestricted),
            Origins::List(values) => Ok(if values.iter().any(|value| value == origin) {
                OriginMatch::Matched
            } else {
                OriginMatch::NotMatched
            }),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
