// src/exit.rs
//! Standardized process exit codes for `routeguard`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RouteGuardExit {
    /// Operation completed successfully; the connection was accepted.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Input could not be used (malformed rules, graph, or config).
    InvalidInput = 2,
    /// A connection was rejected with a reason, a replay was not clean,
    /// or an audit found cycles.
    Rejected = 3,
    /// A connection was rejected silently (duplicate or missing endpoint).
    SilentReject = 4,
}

impl RouteGuardExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Chooses the exit code for a failed command: input errors from the
    /// library map to `InvalidInput`, everything else to `Error`.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let input = err
            .chain()
            .filter_map(|cause| cause.downcast_ref::<crate::error::RouteGuardError>())
            .any(crate::error::RouteGuardError::is_input_error);
        if input {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}

/// Maps the outcome of writing plain output (help text) to an exit code.
impl From<std::io::Result<()>> for RouteGuardExit {
    fn from(res: std::io::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::Error
            }
        }
    }
}

impl Termination for RouteGuardExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteGuardError;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            RouteGuardExit::Success,
            RouteGuardExit::Error,
            RouteGuardExit::InvalidInput,
            RouteGuardExit::Rejected,
            RouteGuardExit::SilentReject,
        ]
        .map(RouteGuardExit::code);
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_error_classifies_input_errors() {
        let err = anyhow::Error::new(RouteGuardError::Config("bad".into()));
        assert_eq!(RouteGuardExit::from_error(&err), RouteGuardExit::InvalidInput);

        let disk = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let io = anyhow::Error::new(RouteGuardError::io(disk, "graph.json"));
        assert_eq!(RouteGuardExit::from_error(&io), RouteGuardExit::Error);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(RouteGuardExit::from_error(&plain), RouteGuardExit::Error);
    }

    #[test]
    fn test_help_output_result_maps_to_exit_code() {
        let printed: std::io::Result<()> = Ok(());
        assert_eq!(RouteGuardExit::from(printed), RouteGuardExit::Success);

        let broken: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(RouteGuardExit::from(broken), RouteGuardExit::Error);
    }
}
