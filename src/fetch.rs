//! Secret retrieval via the cluster client.

use crate::config::SecretRef;
use crate::traits::CommandExecutor;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Fetches a secret's full manifest from a cluster.
///
/// The production implementation shells out to kubectl; tests substitute a
/// mock so no cluster is needed.
pub trait SecretFetcher {
    /// Fetch the named secret's manifest as YAML text
    fn fetch_manifest(&self, reference: &SecretRef) -> Result<String>;
}

/// Fetcher that invokes `kubectl get secret` through a command executor
pub struct KubectlFetcher {
    command: Arc<dyn CommandExecutor>,
}

impl KubectlFetcher {
    pub fn new(command: Arc<dyn CommandExecutor>) -> Self {
        Self { command }
    }
}

impl SecretFetcher for KubectlFetcher {
    fn fetch_manifest(&self, reference: &SecretRef) -> Result<String> {
        let output = self
            .command
            .execute(
                "kubectl",
                &[
                    "get",
                    "secret",
                    reference.secret.as_str(),
                    "-n",
                    reference.namespace.as_str(),
                    "-o",
                    "yaml",
                    "--context",
                    reference.context.as_str(),
                ],
            )
            .context("Failed to execute kubectl command")?;

        if !output.status.success() {
            anyhow::bail!(
                "kubectl get secret failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
