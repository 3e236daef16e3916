//! Response validation
//!
//! Every rule is checked independently and all violations are collected, so a
//! single error message can report a wrong status code and a wrong content
//! type together.

use crate::transport::HttpResponse;

/// Failures collected while validating one response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionResult {
    failures: Vec<String>,
}

impl AssertionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_failure(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    /// True iff no failure was added
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Joins all failure messages with `separator`; empty when nothing failed
    pub fn summarize(&self, separator: &str) -> String {
        self.failures.join(separator)
    }
}

/// What a valid response looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseExpectation<'a> {
    pub status: u16,
    pub content_type: &'a str,
    pub content_required: bool,
}

/// Checks that `actual` equals the `expected` status code
pub fn assert_response_status(result: &mut AssertionResult, expected: u16, actual: u16) {
    if actual != expected {
        result.add_failure(format!(
            "Response status code is {} but {} was expected",
            actual, expected
        ));
    }
}

/// Checks that a content type is present and starts with `expected`
///
/// The comparison is a case-insensitive prefix match so parameters such as
/// `; charset=UTF-8` are accepted.
pub fn assert_content_type(result: &mut AssertionResult, expected: &str, actual: Option<&str>) {
    match actual {
        None => result.add_failure(format!(
            "Response has no content type but {} was expected",
            expected
        )),
        Some(actual) => {
            let matches = actual
                .get(..expected.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(expected));
            if !matches {
                result.add_failure(format!(
                    "Response content type is '{}' but {} was expected",
                    actual, expected
                ));
            }
        }
    }
}

/// Checks that a body is present when one is required
pub fn assert_content(result: &mut AssertionResult, required: bool, body: &str) {
    if required && body.is_empty() {
        result.add_failure("Response has no content but content was expected");
    }
}

/// Runs every rule against `response`
pub fn validate_response(
    response: &HttpResponse,
    expectation: ResponseExpectation<'_>,
) -> AssertionResult {
    let mut result = AssertionResult::new();
    assert_response_status(&mut result, expectation.status, response.status);
    assert_content_type(
        &mut result,
        expectation.content_type,
        response.content_type.as_deref(),
    );
    assert_content(&mut result, expectation.content_required, &response.body);
    result
}
