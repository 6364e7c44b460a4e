//! Exit code constants for the navbar CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown format)
//! - 2: Configuration failure (parse or validation)
//! - 3: Render failure (output sink rejected a write)
//! - 4: I/O failure (reading config, writing output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unsupported file type.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: the navbar config could not be parsed or validated.
pub const CONFIG_FAILURE: i32 = 2;

/// Render failure: the fragment could not be written to its sink.
pub const RENDER_FAILURE: i32 = 3;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 4;
