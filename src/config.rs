/// Reference to a secret in a cluster: context, namespace and name.
///
/// Threaded explicitly through the pipeline so every step is pure given its
/// inputs. All fields are opaque strings; empty values are passed through to
/// kubectl, which rejects them itself.
#[derive(Debug, Clone)]
pub struct SecretRef {
    pub context: String,
    pub namespace: String,
    pub secret: String,
}

impl SecretRef {
    pub fn new(context: String, namespace: String, secret: String) -> Self {
        Self {
            context,
            namespace,
            secret,
        }
    }

    /// File name the decoded manifest is written to, relative to the current
    /// working directory.
    pub fn output_file_name(&self) -> String {
        format!("updated_secret_{}_{}.yaml", self.namespace, self.secret)
    }
}
