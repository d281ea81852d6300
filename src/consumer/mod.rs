//! Consumer configuration and the normalization rules of its tunables.
//!
//! Only two consumer tunables are corrected on input: the consume model and
//! the push fetch thread count. Both corrections are exposed as plain
//! functions so the exact mapping can be checked in isolation.

pub mod config;

pub use crate::consumer::config::{validate_group_name, ConsumerConfig};

use std::sync::OnceLock;

use crate::util::available_processors;

/// Where a consumer group starts reading a partition.
///
/// The runtime meaning of each policy is owned by the consumer runtime; this
/// type only fixes the raw values exchanged with it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConsumeModel {
    /// Start from the earliest offset on first join, then resume from the
    /// committed offset.
    FromEarliestThenResume,
    /// Start from the latest offset on first join, then resume from the
    /// committed offset.
    #[default]
    FromLatestThenResume,
    /// Always start from the latest offset.
    AlwaysFromLatest,
}

impl ConsumeModel {
    /// Maps any integer onto a consume model by its sign.
    pub fn from_raw(raw: i32) -> ConsumeModel {
        match raw.signum() {
            -1 => ConsumeModel::FromEarliestThenResume,
            0 => ConsumeModel::FromLatestThenResume,
            _ => ConsumeModel::AlwaysFromLatest,
        }
    }

    /// Returns the raw value: -1, 0 or 1.
    pub fn as_raw(self) -> i32 {
        match self {
            ConsumeModel::FromEarliestThenResume => -1,
            ConsumeModel::FromLatestThenResume => 0,
            ConsumeModel::AlwaysFromLatest => 1,
        }
    }
}

impl From<i32> for ConsumeModel {
    fn from(raw: i32) -> ConsumeModel {
        ConsumeModel::from_raw(raw)
    }
}

/// Normalizes a requested consume model to -1, 0 or 1.
pub fn normalize_consume_model(consume_model: i32) -> i32 {
    ConsumeModel::from_raw(consume_model).as_raw()
}

/// Default number of push fetch threads: one per available processor.
///
/// The processor count is read on first use and the same value is returned
/// for the rest of the process.
pub fn default_push_fetch_thread_count() -> i32 {
    static DEFAULT: OnceLock<i32> = OnceLock::new();
    *DEFAULT.get_or_init(available_processors)
}

/// Replaces a non-positive push fetch thread count with the default.
pub fn normalize_push_fetch_thread_count(thread_count: i32) -> i32 {
    if thread_count <= 0 {
        default_push_fetch_thread_count()
    } else {
        thread_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_consume_model() {
        let table = [
            (i32::MIN, -1),
            (-42, -1),
            (-1, -1),
            (0, 0),
            (1, 1),
            (42, 1),
            (i32::MAX, 1),
        ];
        for (input, expected) in table {
            assert_eq!(normalize_consume_model(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_consume_model_raw_values() {
        assert_eq!(ConsumeModel::default().as_raw(), 0);
        assert_eq!(ConsumeModel::from(-7), ConsumeModel::FromEarliestThenResume);
        assert_eq!(ConsumeModel::from(0), ConsumeModel::FromLatestThenResume);
        assert_eq!(ConsumeModel::from(3), ConsumeModel::AlwaysFromLatest);
    }

    #[test]
    fn test_default_push_fetch_thread_count_is_fixed() {
        let first = default_push_fetch_thread_count();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(default_push_fetch_thread_count))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
        assert_eq!(default_push_fetch_thread_count(), first);
    }

    #[test]
    fn test_normalize_push_fetch_thread_count() {
        let default = default_push_fetch_thread_count();
        assert!(default > 0);
        assert_eq!(normalize_push_fetch_thread_count(0), default);
        assert_eq!(normalize_push_fetch_thread_count(-5), default);
        assert_eq!(normalize_push_fetch_thread_count(i32::MIN), default);
        assert_eq!(normalize_push_fetch_thread_count(1), 1);
        assert_eq!(normalize_push_fetch_thread_count(64), 64);
    }
}
