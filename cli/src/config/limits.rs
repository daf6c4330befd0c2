/// Shortest accepted per-request deadline for the external services
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Longest accepted per-request deadline (two minutes)
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
