use crate::traits::{
    CommandExecutor, FileSystem, Output, RealCommandExecutor, RealFileSystem, TerminalOutput,
};
#[cfg(test)]
use crate::traits::{MockCommandExecutor, MockFileSystem, MockOutput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub command: Arc<dyn CommandExecutor>,
    pub fs: Arc<dyn FileSystem>,
    pub output: Arc<dyn Output>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            command: Arc::new(RealCommandExecutor::new()),
            fs: Arc::new(RealFileSystem),
            output: Arc::new(TerminalOutput),
        }
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test() -> Self {
        Self {
            command: Arc::new(MockCommandExecutor::new()),
            fs: Arc::new(MockFileSystem::new()),
            output: Arc::new(MockOutput::new()),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(
        command: Arc<dyn CommandExecutor>,
        fs: Arc<dyn FileSystem>,
        output: Arc<dyn Output>,
    ) -> Self {
        Self {
            command,
            fs,
            output,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
