//! Logging facade for the configuration layer.
//!
//! Macros come from [`log`] by default and from [`tracing`] when the
//! `tracing` feature is enabled, so the embedding consumer runtime decides
//! which ecosystem receives the validation and correction messages.
//!
//! [`log`]: https://docs.rs/log
//! [`tracing`]: https://docs.rs/tracing

#[cfg(not(feature = "tracing"))]
pub use log::{debug, trace, warn};

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};
