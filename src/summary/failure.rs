//! Stable process exit codes
//!
//! Status 2 is left to clap, which exits with it on a usage error before
//! any of these codes come into play.

/// Exit codes for the `nrtest-summary` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Summary printed
    Success = 0,
    /// Summary printed, tests failed, and failures are configured to be fatal
    TestsFailed = 1,
    /// Report or config missing or unreadable
    Io = 3,
    /// Report is not valid JSON, or config is not valid TOML
    Format = 4,
    /// Report or config has the wrong shape
    Schema = 5,
}

impl ExitCode {
    /// Get the integer value of the exit code
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}
