//! Third-party dependency installation
//!
//! Components declare the packages they need; the installer hands the whole
//! list to the host package manager in a single call.

use std::process::Stdio;

use async_trait::async_trait;

use crate::config::PackageManagerCommand;
use crate::error::InstallError;

/// Installs third-party packages into the consumer project
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    async fn install(&self, packages: &[String]) -> Result<(), InstallError>;
}

/// Runs the host package manager, sharing this process's terminal
pub struct PackageManagerInstaller {
    command: PackageManagerCommand,
}

impl PackageManagerInstaller {
    pub fn new(command: PackageManagerCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl DependencyInstaller for PackageManagerInstaller {
    async fn install(&self, packages: &[String]) -> Result<(), InstallError> {
        let command_line = self.command.display_with(packages);
        tracing::debug!("Running {}", command_line);

        let status = tokio::process::Command::new(&self.command.program)
            .args(&self.command.args)
            .args(packages)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| InstallError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(InstallError::ExitStatus {
                command: command_line,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
