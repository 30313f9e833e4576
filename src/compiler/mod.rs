//! External shader compiler invocation.
//!
//! The compiler is consumed as a black box: `glslangValidator -H -V <input>
//! -o <input>.spv`. Its human-readable dump goes straight to our stdout.
use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use thiserror::Error;
use tracing::{debug, info};


#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to launch shader compiler `{}`", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("shader compiler `{}` failed on `{}` ({status})", executable.display(), input.display())]
    Failed {
        executable: PathBuf,
        input: PathBuf,
        status: ExitStatus,
    },
}

#[derive(Debug, Clone)]
pub struct Compiler {
    executable: PathBuf,
}
impl Compiler {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// `<input>.spv`; the original extension is kept.
    pub fn spirv_path(input: &Path) -> PathBuf {
        let mut path = OsString::from(input.as_os_str());
        path.push(".spv");
        PathBuf::from(path)
    }

    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-H") // Human-readable SPIR-V dump
            .arg("-V") // Create SPIR-V
            .arg(input)
            .arg("-o")
            .arg(output);
        cmd
    }

    pub fn compile(&self, input: &Path) -> Result<PathBuf, CompileError> {
        let output = Self::spirv_path(input);
        info!(
            compiler = %self.executable.display(),
            input = %input.display(),
            output = %output.display(),
            "compiling shader"
        );

        let status = self
            .command(input, &output)
            .status()
            .map_err(|source| CompileError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;
        debug!(%status, "shader compiler exited");

        if !status.success() {
            return Err(CompileError::Failed {
                executable: self.executable.clone(),
                input: input.to_path_buf(),
                status,
            });
        }
        Ok(output)
    }
}
