//! Client configuration for the TubeMQ message queue.
//!
//! The crate provides the validated configuration objects that a TubeMQ
//! consumer runtime reads at startup:
//!
//! - [`ClientConfig`]: local host identity, master cluster and the RPC and
//!   heartbeat settings shared by every client.
//! - [`ConsumerConfig`]: the consumer group and the rebalance, push and pull
//!   tunables of a consumer, wrapping a `ClientConfig`.
//!
//! ```
//! use tubemq_client::ConsumerConfig;
//!
//! let mut config = ConsumerConfig::new("10.0.0.5", "10.0.0.1:8715,10.0.0.2:8715", " orders ")?;
//! config.set_consume_model(-10).set_push_fetch_thread_count(4);
//!
//! assert_eq!(config.consumer_group(), "orders");
//! assert_eq!(config.consume_model(), -1);
//! # Ok::<(), tubemq_client::ClientError>(())
//! ```
//!
//! Construction is the only fallible step for identity fields; tunables are
//! either stored as given or, for the consume model and the push fetch thread
//! count, normalized. Once configured, the objects are plain values and can be
//! shared with the runtime, for example behind an `Arc`.
//!
//! ## Logging
//!
//! Rejections and corrections are logged through the [`log`] crate, or through
//! [`tracing`] when the `tracing` feature is enabled.
//!
//! [`log`]: https://docs.rs/log
//! [`tracing`]: https://docs.rs/tracing

#![warn(missing_debug_implementations)]

pub mod config;
pub mod constants;
pub mod consumer;
pub mod error;
mod log;
pub mod master;
pub mod util;

pub use crate::config::ClientConfig;
pub use crate::consumer::{ConsumeModel, ConsumerConfig};
pub use crate::error::{ClientError, ClientResult};
pub use crate::master::{MasterInfo, NodeAddr};
