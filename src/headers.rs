use indexmap::IndexMap;

/// Response headers in insertion order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(0)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    /// Comma-joined list value, e.g. `GET,HEAD,POST`.
    pub(crate) fn push_list<N, S>(&mut self, name: N, values: &[S])
    where
        N: Into<String>,
        S: AsRef<str>,
    {
        let value = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, value);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Merges `additions` into an existing `Vary` header value.
///
/// Entries are deduplicated case-insensitively and the first spelling wins.
/// Returns `None` when the result would be empty.
pub fn merge_vary<S>(existing: Option<&str>, additions: &[S]) -> Option<String>
where
    S: AsRef<str>,
{
    let mut entries: Vec<&str> = Vec::new();
    let incoming = existing
        .into_iter()
        .flat_map(|value| value.split(','))
        .chain(additions.iter().map(AsRef::as_ref));

    for entry in incoming {
        let entry = entry.trim();
        if entry.is_empty()
            || entries
                .iter()
                .any(|present| present.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
