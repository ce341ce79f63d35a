use crate::constants::request_header;

/// The parts of a request the decision depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Picks the CORS-relevant headers out of a parsed header mapping.
    ///
    /// Names are expected lower-cased. An exact lower-case key always takes
    /// precedence; other casings are only used when no exact key is present.
    /// Among keys of the same kind the first occurrence wins, so multi-valued
    /// headers must be joined by the caller beforehand.
    pub fn from_headers<I, K, V>(method: &'a str, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: AsRef<str> + ?Sized + 'a,
        V: AsRef<str> + ?Sized + 'a,
    {
        let mut slots = [HeaderSlot::default(); TRACKED_HEADERS.len()];

        for (name, value) in headers {
            let name = name.as_ref();
            let Some(index) = TRACKED_HEADERS
                .iter()
                .position(|tracked| name.eq_ignore_ascii_case(tracked))
            else {
                continue;
            };
            slots[index].offer(name == TRACKED_HEADERS[index], value.as_ref());
        }

        let [origin, request_method, request_headers] = slots;
        Self {
            method,
            origin: origin.value,
            access_control_request_method: request_method.value,
            access_control_request_headers: request_headers.value,
        }
    }
}

const TRACKED_HEADERS: [&str; 3] = [
    request_header::ORIGIN,
    request_header::ACCESS_CONTROL_REQUEST_METHOD,
    request_header::ACCESS_CONTROL_REQUEST_HEADERS,
];

#[derive(Debug, Clone, Copy, Default)]
struct HeaderSlot<'a> {
    value: Option<&'a str>,
    exact: bool,
}

impl<'a> HeaderSlot<'a> {
    fn offer(&mut self, exact: bool, value: &'a str) {
        if self.exact || (self.value.is_some() && !exact) {
            return;
        }
        self.value = Some(value);
        self.exact = exact;
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
