//! gh CLI spawning.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::DEFAULT_GH_TIMEOUT_SECS;
use crate::error::GhError;

/// Trait for executing gh CLI commands.
///
/// This abstraction allows mocking the gh subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GhExecutor: Send + Sync {
    /// Run gh with the given arguments and return its stdout.
    async fn run(&self, args: Vec<String>) -> Result<String, GhError>;
}

/// Default executor that spawns the real gh binary.
#[derive(Debug, Clone)]
pub struct DefaultExecutor {
    timeout: Duration,
}

impl DefaultExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DefaultExecutor {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_GH_TIMEOUT_SECS))
    }
}

#[async_trait]
impl GhExecutor for DefaultExecutor {
    async fn run(&self, args: Vec<String>) -> Result<String, GhError> {
        run_gh(&args, self.timeout).await
    }
}

/// Check if the gh CLI is installed and accessible.
pub async fn check_gh_installed() -> Result<(), GhError> {
    if which::which("gh").is_err() {
        return Err(GhError::NotInstalled);
    }

    let version_check = Command::new("gh")
        .arg("--version")
        .output()
        .await
        .map_err(GhError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GhError::NotInstalled);
    }

    Ok(())
}

/// Run gh with `args`, failing on timeout or a non-zero exit.
pub async fn run_gh(args: &[String], timeout_duration: Duration) -> Result<String, GhError> {
    run_program("gh", args, timeout_duration).await
}

async fn run_program(
    program: &str,
    args: &[String],
    timeout_duration: Duration,
) -> Result<String, GhError> {
    debug!("Running {} {}", program, args.join(" "));

    let output = timeout(
        timeout_duration,
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| GhError::Timeout(timeout_duration.as_secs()))?
    .map_err(GhError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(GhError::NonZeroExit { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
