#![allow(dead_code)]

use libcors::constants::PREFLIGHT_STATUS;
use libcors::{CorsDecision, Headers};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    assert_eq!(
        decision.status, None,
        "actual requests never carry a status: {decision:?}"
    );
    decision.headers
}

pub fn assert_preflight_ended(decision: CorsDecision) -> Headers {
    assert_eq!(
        decision.status,
        Some(PREFLIGHT_STATUS),
        "expected ended preflight, got {decision:?}"
    );
    decision.headers
}

pub fn assert_empty(decision: &CorsDecision) {
    assert!(decision.is_empty(), "expected empty decision, got {decision:?}");
}

pub fn assert_vary_eq<const N: usize>(decision: &CorsDecision, expected: [&str; N]) {
    assert_eq!(decision.vary, expected.to_vec());
}
