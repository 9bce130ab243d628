//! Process-backed validator invoker
//!
//! Runs the multiOTP executable once per request and reports its exit code.
//! Output is drained in the background and kept only for debug logging; the
//! exit code is the sole signal handed back to the adapter.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use motp_core::errors::{InvocationError, InvocationResult};
use motp_core::services::ValidatorInvoker;
use motp_shared::config::ValidatorConfig;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Bytes of each output stream kept for logging
const OUTPUT_PREFIX_BYTES: usize = 4096;

/// How long to wait for output after the process has exited
const OUTPUT_GRACE: Duration = Duration::from_millis(100);

/// Invokes the validator executable as a child process
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    executable: PathBuf,
    /// Display form of `executable`
    program: String,
    working_dir: Option<PathBuf>,
    base_args: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessInvoker {
    /// Create an invoker for `executable` with no extra arguments and no timeout
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        Self {
            program: executable.display().to_string(),
            executable,
            working_dir: None,
            base_args: Vec::new(),
            timeout: None,
        }
    }

    /// Create an invoker from validator configuration
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let mut invoker = Self::new(config.executable.clone()).with_base_args(config.base_args.clone());
        if let Some(dir) = &config.working_dir {
            invoker = invoker.with_working_dir(dir.clone());
        }
        invoker.timeout = config.timeout();
        invoker
    }

    /// Arguments placed before every command
    pub fn with_base_args(mut self, base_args: Vec<String>) -> Self {
        self.base_args = base_args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command(&self, args: &[String]) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        command
    }
}

#[async_trait]
impl ValidatorInvoker for ProcessInvoker {
    async fn invoke(&self, args: &[String]) -> InvocationResult<i32> {
        let mut child = self
            .command(args)
            .spawn()
            .map_err(|e| InvocationError::from_io(self.program.clone(), e))?;

        // Pipes may outlive the validator if it leaves a background process
        // behind, so they are never awaited before the exit status
        let stdout = child.stdout.take().map(|pipe| tokio::spawn(read_prefix(pipe)));
        let stderr = child.stderr.take().map(|pipe| tokio::spawn(read_prefix(pipe)));

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        program = %self.program,
                        timeout_ms = limit.as_millis() as u64,
                        event = "validator_timeout",
                        "Validator did not finish in time, killing it"
                    );
                    // Dropping the child kills it (kill_on_drop)
                    abort(stdout);
                    abort(stderr);
                    return Err(InvocationError::TimedOut {
                        program: self.program.clone(),
                        after: limit,
                    });
                }
            },
            None => child.wait().await,
        }
        .map_err(|e| InvocationError::from_io(self.program.clone(), e))?;

        let stdout = collect(stdout).await;
        let stderr = collect(stderr).await;
        debug!(
            program = %self.program,
            stdout = %first_line(&stdout),
            stderr = %first_line(&stderr),
            "Validator finished"
        );

        status.code().ok_or_else(|| InvocationError::Terminated {
            program: self.program.clone(),
        })
    }

    fn program(&self) -> &str {
        &self.program
    }
}

/// Read `pipe` to end of stream, keeping at most `OUTPUT_PREFIX_BYTES`
async fn read_prefix<R: AsyncRead + Unpin>(mut pipe: R) -> Vec<u8> {
    let mut kept = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match pipe.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let room = OUTPUT_PREFIX_BYTES.saturating_sub(kept.len());
                kept.extend_from_slice(&chunk[..n.min(room)]);
            }
        }
    }
    kept
}

/// Output gathered so far, giving the reader a short grace period
async fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    let Some(mut handle) = reader else {
        return Vec::new();
    };
    match tokio::time::timeout(OUTPUT_GRACE, &mut handle).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(_)) => Vec::new(),
        Err(_) => {
            handle.abort();
            Vec::new()
        }
    }
}

fn abort(reader: Option<JoinHandle<Vec<u8>>>) {
    if let Some(handle) = reader {
        handle.abort();
    }
}

fn first_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ValidatorConfig::new("/opt/multiotp/multiotp")
            .with_timeout_secs(0)
            .with_base_args(["-log"]);
        let invoker = ProcessInvoker::from_config(&config);

        assert_eq!(invoker.program(), "/opt/multiotp/multiotp");
        assert_eq!(invoker.timeout(), None);
        assert_eq!(invoker.base_args, vec!["-log".to_string()]);
        assert_eq!(invoker.working_dir, None);

        let config = ValidatorConfig {
            working_dir: Some(PathBuf::from("/opt/multiotp")),
            ..config
        };
        let invoker = ProcessInvoker::from_config(&config);
        assert_eq!(invoker.working_dir, Some(PathBuf::from("/opt/multiotp")));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b"0 OK: Token accepted\r\nmore"), "0 OK: Token accepted");
        assert_eq!(first_line(b""), "");
    }

    #[tokio::test]
    async fn test_output_prefix_is_bounded() {
        let output = vec![b'x'; OUTPUT_PREFIX_BYTES * 3];
        let kept = read_prefix(output.as_slice()).await;

        assert_eq!(kept.len(), OUTPUT_PREFIX_BYTES);
    }

    #[tokio::test]
    async fn test_missing_executable_is_not_found() {
        let invoker = ProcessInvoker::new("/nonexistent/path/to/multiotp")
            .with_timeout(Duration::from_secs(5));
        let err = invoker.invoke(&["alice".to_string()]).await.unwrap_err();

        assert!(matches!(err, InvocationError::NotFound { .. }), "got {err:?}");
    }
}
