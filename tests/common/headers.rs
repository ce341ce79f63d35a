#![allow(dead_code)]

use libcors::Headers;

/// Case-insensitive lookup; the engine emits canonical names but callers may not.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .or_else(|| {
            headers
                .iter()
                .find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value))
        })
        .map(String::as_str)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// Any `Access-Control-*` header present.
pub fn has_access_control_header(headers: &Headers) -> bool {
    headers.keys().any(|name| {
        name.get(..15)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("access-control-"))
    })
}
