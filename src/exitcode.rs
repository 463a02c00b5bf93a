//! Process exit codes, following BSD sysexits.h
//!
//! See `CliError::exit_code` for which failure maps to which code.

/// Boards extracted and printed
pub const OK: i32 = 0;

/// Bad command line, or `config init` over an existing file
pub const USAGE: i32 = 64;

/// Snapshot is not valid JSON, or its board grid is malformed
pub const DATAERR: i32 = 65;

/// Snapshot file missing or unreadable
pub const NOINPUT: i32 = 66;

/// Results could not be serialized
pub const SOFTWARE: i32 = 70;

/// Reading stdin or writing a config file failed
pub const IOERR: i32 = 74;

/// Invalid `.gridread.toml` or `GRIDREAD_*` value
pub const CONFIG: i32 = 78;
