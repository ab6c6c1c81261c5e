//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{FailingIo, MockIo, MockPwm, PwmCall};
use servo_shell::{InterpreterConfig, RangePolicy, Session};

/// Session type used by most integration tests.
pub type TestSession<C> = Session<MockIo, MockPwm, C>;

// ============================================================================
// Session Creation Helpers
// ============================================================================

/// Create an activated session with clean output and call log.
pub fn create_test_session<C: InterpreterConfig>() -> TestSession<C> {
    let mut session = Session::new(MockIo::new(), MockPwm::new());
    session.activate().unwrap();
    session.io_mut().clear_output();
    session.pwm_mut().clear_calls();
    session
}

/// Create an activated session with a specific validation policy.
pub fn create_session_with_policy<C: InterpreterConfig>(policy: RangePolicy) -> TestSession<C> {
    let mut session = create_test_session::<C>();
    session.set_policy(policy);
    session
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Feed bytes without a terminator.
pub fn type_input<C: InterpreterConfig>(session: &mut TestSession<C>, input: &[u8]) {
    for &byte in input {
        session.on_byte(byte).unwrap();
    }
}

/// Feed a line followed by `\r\n` and return everything written in response.
pub fn send_line<C: InterpreterConfig>(session: &mut TestSession<C>, line: &str) -> String {
    session.io_mut().clear_output();
    type_input(session, line.as_bytes());
    type_input(session, b"\r\n");
    session.io().output()
}

/// Feed raw bytes exactly as given and return the output they produced.
pub fn send_bytes<C: InterpreterConfig>(session: &mut TestSession<C>, bytes: &[u8]) -> String {
    session.io_mut().clear_output();
    type_input(session, bytes);
    session.io().output()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}
