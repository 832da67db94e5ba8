#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Invalid CLI options (bad flags, unknown resolution, empty command).
    InvalidInput = 30,

    /// Failed to spawn or wait on the child process, or it died to a
    /// signal without an exit code.
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
