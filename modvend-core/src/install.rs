use crate::error::{Result, VendError};
use std::path::Path;
use std::process::Command;

/// Capability interface for the dependency-install step.
///
/// The archive pipeline only needs a working directory handed over and a
/// success/failure answer back; which ecosystem tool runs underneath is the
/// implementor's business.
pub trait Installer {
    fn install(&self, working_dir: &Path) -> Result<()>;
}

/// Runs `npm install` in the working directory.
pub struct NpmInstaller;

impl Installer for NpmInstaller {
    fn install(&self, working_dir: &Path) -> Result<()> {
        let status = Command::new("npm")
            .arg("install")
            .current_dir(working_dir)
            .status()
            .map_err(|e| VendError::Install(format!("spawning npm install: {e}")))?;

        if !status.success() {
            return Err(VendError::Install(format!(
                "npm install exited with {status}"
            )));
        }

        Ok(())
    }
}
