//! Sequential HTTP smoke test against a running server
//!
//! Steps run in order. A failure at `/` or `/data.json` is fatal and stops
//! the run; a missing stylesheet is reported and the run continues.

use std::io::Write;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::checks::{inspect_hierarchy, inspect_stylesheet, inspect_target_sequence, Summary};
use crate::error::{ValidatorError, ValidatorResult};
use crate::expectations::Expectations;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Server or document unavailable; later steps skipped
    Fatal,
    /// Every step ran
    Completed(Summary),
}

impl Outcome {
    /// Process exit code: 1 for a fatal run, 0 otherwise
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Fatal => 1,
            Self::Completed(_) => 0,
        }
    }
}

/// Smoke-test runner holding one HTTP client
#[derive(Debug, Clone)]
pub struct SmokeTest {
    client: Client,
    expectations: Expectations,
    base: Url,
}

impl SmokeTest {
    /// Create runner for `expectations`
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the client cannot be built
    pub fn new(expectations: Expectations) -> ValidatorResult<Self> {
        let base = Url::parse(&expectations.base_url).map_err(|e| {
            ValidatorError::InvalidBaseUrl {
                url: expectations.base_url.clone(),
                message: e.to_string(),
            }
        })?;
        let client = Client::builder()
            .timeout(expectations.timeout)
            .build()
            .map_err(ValidatorError::Client)?;
        Ok(Self {
            client,
            expectations,
            base,
        })
    }

    async fn get(&self, path: &str) -> ValidatorResult<reqwest::Response> {
        let url = self.expectations.url(path);
        debug!(%url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ValidatorError::Unreachable {
                url: url.clone(),
                source,
            })?;
        if response.status() != StatusCode::OK {
            return Err(ValidatorError::UnexpectedStatus {
                url,
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    /// GET `/`, expecting 200
    ///
    /// # Errors
    /// Returns error if the server is unreachable or answers non-200
    pub async fn fetch_root(&self) -> ValidatorResult<()> {
        self.get("/").await.map(drop)
    }

    /// GET `/data.json`, expecting 200 and a JSON body
    ///
    /// # Errors
    /// Returns error if the request fails or the body is not JSON
    pub async fn fetch_document(&self) -> ValidatorResult<Value> {
        let url = self.expectations.url("/data.json");
        self.get("/data.json")
            .await?
            .json()
            .await
            .map_err(|source| ValidatorError::InvalidJson { url, source })
    }

    /// GET `/styles.css`, expecting 200
    ///
    /// # Errors
    /// Returns error if the request fails
    pub async fn fetch_stylesheet(&self) -> ValidatorResult<String> {
        let url = self.expectations.url("/styles.css");
        self.get("/styles.css")
            .await?
            .text()
            .await
            .map_err(|source| ValidatorError::Unreachable { url, source })
    }

    /// Run every step, writing the report to `out`
    ///
    /// # Errors
    /// Returns error only if writing to `out` fails
    pub async fn run<W: Write>(&self, out: &mut W) -> ValidatorResult<Outcome> {
        writeln!(out, "=== Bridge System Hierarchical Implementation Test ===\n")?;

        match self.fetch_root().await {
            Ok(()) => writeln!(out, "✓ Server is running on port {}", self.port())?,
            Err(ValidatorError::UnexpectedStatus { status, .. }) => {
                writeln!(out, "✗ Server returned status code {status}")?;
                return Ok(Outcome::Fatal);
            }
            Err(e) => {
                writeln!(out, "✗ Server not accessible: {}", cause(&e))?;
                return Ok(Outcome::Fatal);
            }
        }

        let data = match self.fetch_document().await {
            Ok(data) => {
                writeln!(out, "✓ data.json loads correctly")?;
                data
            }
            Err(ValidatorError::UnexpectedStatus { status, .. }) => {
                writeln!(out, "✗ data.json returned status code {status}")?;
                return Ok(Outcome::Fatal);
            }
            Err(e) => {
                writeln!(out, "✗ data.json not accessible: {}", cause(&e))?;
                return Ok(Outcome::Fatal);
            }
        };
        if is_empty_document(&data) {
            return Ok(Outcome::Fatal);
        }

        writeln!(out, "\n--- Testing hierarchical structure ---")?;
        let hierarchy = inspect_hierarchy(&data);
        writeln!(out, "{hierarchy}")?;

        writeln!(
            out,
            "\n--- Testing {} sequence ---",
            self.expectations.target_sequence
        )?;
        writeln!(out, "{}", inspect_target_sequence(&data, &self.expectations))?;

        writeln!(out, "\n--- Testing color and styling requirements ---")?;
        match self.fetch_stylesheet().await {
            Ok(css) => writeln!(out, "{}", inspect_stylesheet(&css, &self.expectations))?,
            Err(ValidatorError::UnexpectedStatus { status, .. }) => {
                writeln!(out, "✗ styles.css returned status code {status}")?;
            }
            Err(e) => writeln!(out, "✗ styles.css not accessible: {}", cause(&e))?,
        }

        let summary = Summary::new(&hierarchy, &self.expectations);
        writeln!(out, "\n=== Summary ===")?;
        writeln!(out, "{summary}")?;
        writeln!(out, "\nServer accessible at: {}", self.expectations.base_url)?;
        writeln!(out, "Test completed successfully!")?;

        Ok(Outcome::Completed(summary))
    }

    fn port(&self) -> String {
        self.base
            .port_or_known_default()
            .map_or_else(|| self.expectations.base_url.clone(), |port| port.to_string())
    }
}

/// Falsy JSON counts as no document: null, false, zero, `""`, `[]` or `{}`
fn is_empty_document(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Underlying message of a request failure
fn cause(err: &ValidatorError) -> String {
    match err {
        ValidatorError::Unreachable { source, .. } | ValidatorError::InvalidJson { source, .. } => {
            source.to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = SmokeTest::new(Expectations::new().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn port_comes_from_base_url() {
        let smoke = SmokeTest::new(Expectations::new()).unwrap();
        assert_eq!(smoke.port(), "8004");

        let smoke = SmokeTest::new(Expectations::new().with_base_url("http://example.test")).unwrap();
        assert_eq!(smoke.port(), "80");
    }

    #[test]
    fn empty_documents_are_fatal() {
        assert!(is_empty_document(&Value::Null));
        assert!(is_empty_document(&serde_json::json!({})));
        assert!(!is_empty_document(&serde_json::json!({ "sections": {} })));
    }

    #[test]
    fn falsy_json_counts_as_empty() {
        for falsy in [
            serde_json::json!(false),
            serde_json::json!(0),
            serde_json::json!(0.0),
            serde_json::json!(""),
            serde_json::json!([]),
        ] {
            assert!(is_empty_document(&falsy), "{falsy} should be empty");
        }
        for truthy in [
            serde_json::json!(true),
            serde_json::json!(1),
            serde_json::json!("x"),
            serde_json::json!([{}]),
        ] {
            assert!(!is_empty_document(&truthy), "{truthy} should not be empty");
        }
    }

    #[test]
    fn only_fatal_runs_fail_the_process() {
        let summary = Summary {
            found: 0,
            expected: 22,
            threshold: 18,
        };
        assert_eq!(Outcome::Fatal.exit_code(), 1);
        assert_eq!(Outcome::Completed(summary).exit_code(), 0);
    }
}
