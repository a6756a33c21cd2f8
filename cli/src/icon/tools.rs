//! Wrappers around the external image tools the pipeline shells out to.
//!
//! Rasterizing and bitmap tracing are delegated to ImageMagick's `convert`
//! and to `potrace`; their contracts are assumed, not reimplemented. Both
//! block until the child exits. A non-zero exit surfaces as a typed error
//! carrying the exit status and whatever the tool wrote to stderr.

use crate::icon::ConvertError;
use std::ffi::OsStr;
use std::process::Command;

/// Invokes ImageMagick's `convert`.
pub fn convert<I, S>(args: I) -> Result<(), ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_tool("convert", args)
}

/// Invokes `potrace`.
pub fn potrace<I, S>(args: I) -> Result<(), ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_tool("potrace", args)
}

fn run_tool<I, S>(tool: &'static str, args: I) -> Result<(), ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| ConvertError::ToolSpawn { tool, source })?;

    if !output.status.success() {
        return Err(ConvertError::Tool {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_reports_spawn_failure() {
        let err = run_tool("convert-icons-no-such-tool", ["--version"]).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ToolSpawn {
                tool: "convert-icons-no-such-tool",
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_carries_status_and_stderr() {
        let err = run_tool("sh", ["-c", "echo trace error >&2; exit 3"]).unwrap_err();
        match err {
            ConvertError::Tool {
                tool,
                status,
                stderr,
            } => {
                assert_eq!(tool, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "trace error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_ok() {
        run_tool("sh", ["-c", "exit 0"]).unwrap();
    }
}
