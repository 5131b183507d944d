use anyhow::Result;
use std::process::{Command, Output, Stdio};

/// Trait for executing system commands, allowing for mocking in tests
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with arguments and return output
    fn execute(&self, command: &str, args: &[&str]) -> Result<Output>;

    /// Execute a command with the given text piped to its standard input
    fn execute_with_stdin(&self, command: &str, args: &[&str], stdin: &str) -> Result<Output>;
}

/// Real command executor using std::process::Command
pub struct RealCommandExecutor;

impl RealCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, command: &str, args: &[&str]) -> Result<Output> {
        let output = Command::new(command).args(args).output()?;

        Ok(output)
    }

    fn execute_with_stdin(&self, command: &str, args: &[&str], stdin: &str) -> Result<Output> {
        use std::io::Write;

        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is piped above, so take() always yields a handle
        if let Some(mut handle) = child.stdin.take() {
            handle.write_all(stdin.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        Ok(output)
    }
}

/// Mock command executor for testing
#[cfg(test)]
pub struct MockCommandExecutor {
    /// Pre-configured outputs for commands
    outputs: std::sync::Mutex<Vec<MockCommandResult>>,
    /// Invocations seen so far, for test assertions
    calls: std::sync::Mutex<Vec<RecordedCall>>,
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockCommandResult {
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub command: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            outputs: std::sync::Mutex::new(Vec::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_outputs(outputs: Vec<MockCommandResult>) -> Self {
        Self {
            outputs: std::sync::Mutex::new(outputs),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Get all recorded invocations
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: &str, args: &[&str], stdin: Option<&str>) {
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.map(|s| s.to_string()),
        });
    }

    fn next_output(&self, command: &str) -> Output {
        let mut outputs = self.outputs.lock().unwrap();

        if let Some(position) = outputs.iter().position(|r| r.command == command) {
            let mock_result = outputs.remove(position);
            return Output {
                status: create_exit_status(mock_result.exit_code),
                stdout: mock_result.stdout.into_bytes(),
                stderr: mock_result.stderr.into_bytes(),
            };
        }

        // Default: successful empty output
        Output {
            status: create_exit_status(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Default for MockCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, command: &str, args: &[&str]) -> Result<Output> {
        self.record(command, args, None);
        Ok(self.next_output(command))
    }

    fn execute_with_stdin(&self, command: &str, args: &[&str], stdin: &str) -> Result<Output> {
        self.record(command, args, Some(stdin));
        Ok(self.next_output(command))
    }
}

#[cfg(test)]
fn create_exit_status(code: i32) -> std::process::ExitStatus {
    // ExitStatus can't be constructed directly; go through the OS extension trait
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code)
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_returns_configured_output() {
        let executor = MockCommandExecutor::with_outputs(vec![MockCommandResult {
            command: "kubectl".to_string(),
            exit_code: 0,
            stdout: "manifest".to_string(),
            stderr: String::new(),
        }]);

        let output = executor.execute("kubectl", &[]).unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "manifest");
    }

    #[test]
    fn test_mock_executor_default_success() {
        let executor = MockCommandExecutor::new();
        let output = executor.execute("unknown", &[]).unwrap();
        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_mock_executor_records_stdin() {
        let executor = MockCommandExecutor::new();
        executor
            .execute_with_stdin("yq", &[".data", "-j"], "kind: Secret")
            .unwrap();

        let calls = executor.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command, "yq");
        assert_eq!(calls[0].args, vec![".data", "-j"]);
        assert_eq!(calls[0].stdin.as_deref(), Some("kind: Secret"));
    }

    #[test]
    fn test_real_executor_pipes_stdin() {
        let executor = RealCommandExecutor::new();
        let output = executor
            .execute_with_stdin("cat", &[], "hello from stdin")
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello from stdin");
    }
}
