//! Shared system constants.

/// Maximum length, in characters, of a consumer group name.
pub const MAX_GROUP_NAME_LENGTH: usize = 1024;

/// Default consume model: start from the latest offset on first join.
pub const DEFAULT_CONSUME_MODEL: i32 = 0;

/// Number of heartbeats after which the full subscription info is reported.
pub const MAX_SUBSCRIBE_REPORT_INTERVAL_TIMES: i32 = 6;

pub const DEFAULT_MSG_NOT_FOUND_WAIT_PERIOD_MS: i64 = 200;
pub const DEFAULT_SHUTDOWN_REBALANCE_WAIT_PERIOD_MS: i64 = 10_000;
pub const DEFAULT_PUSH_LISTENER_WAIT_PERIOD_MS: i64 = 3_000;
pub const DEFAULT_PULL_REB_CONFIRM_WAIT_PERIOD_MS: i64 = 3_000;
pub const DEFAULT_PULL_PROTECT_CONFIRM_WAIT_PERIOD_MS: i64 = 60_000;

// Base client configuration.

pub const DEFAULT_RPC_TIMEOUT_MS: i64 = 15_000;
pub const MIN_RPC_TIMEOUT_MS: i64 = 8_000;
pub const MAX_RPC_TIMEOUT_MS: i64 = 300_000;
pub const DEFAULT_HEARTBEAT_PERIOD_MS: i64 = 13_000;
pub const DEFAULT_HEARTBEAT_PERIOD_AFTER_FAIL_MS: i64 = 60_000;
pub const DEFAULT_MAX_REGISTER_RETRY_TIMES: i32 = 5;
pub const DEFAULT_REG_FAIL_WAIT_PERIOD_MS: i64 = 1_000;
pub const DEFAULT_MAX_HEARTBEAT_RETRY_TIMES: i32 = 5;
