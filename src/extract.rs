//! Field extraction from the fetched manifest.

use crate::traits::CommandExecutor;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Pulls the `data` mapping out of a secret manifest as compact JSON.
pub trait FieldExtractor {
    /// Extract the `.data` subtree of the manifest, serialized as JSON
    fn extract_data(&self, manifest: &str) -> Result<String>;
}

/// Extractor that pipes the manifest through `yq .data -j`
pub struct YqExtractor {
    command: Arc<dyn CommandExecutor>,
}

impl YqExtractor {
    pub fn new(command: Arc<dyn CommandExecutor>) -> Self {
        Self { command }
    }
}

impl FieldExtractor for YqExtractor {
    fn extract_data(&self, manifest: &str) -> Result<String> {
        let output = self
            .command
            .execute_with_stdin("yq", &[".data", "-j"], manifest)
            .context("Failed to execute yq command")?;

        if !output.status.success() {
            anyhow::bail!(
                "yq extraction failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockCommandExecutor, MockCommandResult};

    #[test]
    fn test_extract_feeds_manifest_on_stdin() {
        let executor = Arc::new(MockCommandExecutor::with_outputs(vec![MockCommandResult {
            command: "yq".to_string(),
            exit_code: 0,
            stdout: "{\"username\":\"YWRtaW4=\"}".to_string(),
            stderr: String::new(),
        }]));
        let extractor = YqExtractor::new(executor.clone());

        let json = extractor.extract_data("kind: Secret\ndata:\n  username: YWRtaW4=\n");

        assert_eq!(json.unwrap(), "{\"username\":\"YWRtaW4=\"}");

        let calls = executor.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command, "yq");
        assert_eq!(calls[0].args, vec![".data", "-j"]);
        assert_eq!(
            calls[0].stdin.as_deref(),
            Some("kind: Secret\ndata:\n  username: YWRtaW4=\n")
        );
    }

    #[test]
    fn test_extract_fails_on_nonzero_exit() {
        let executor = Arc::new(MockCommandExecutor::with_outputs(vec![MockCommandResult {
            command: "yq".to_string(),
            exit_code: 1,
            stdout: String::new(),
            stderr: "Error: bad expression".to_string(),
        }]));
        let extractor = YqExtractor::new(executor);

        let err = extractor.extract_data("kind: Secret\n").unwrap_err();

        assert!(err.to_string().contains("yq extraction failed"));
    }
}
