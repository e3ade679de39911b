//! # bugboard-session
//!
//! Session layer over `bugboard-core`: one [`BugSession`] instance owns the
//! live bug list, the loading/error flags, and the bounded debug log.
//! Construct one per application session and pass it to every consumer;
//! there is no global state.
//!
//! Diagnostics flow through an injected [`DebugSink`] rather than an
//! implicit output target, so hosts decide where entries land.

pub mod debug_log;
pub mod session;

pub use debug_log::{DEBUG_LOG_CAPACITY, DebugLog, DebugSink, NullSink};
pub use session::{BugSession, DEFAULT_SESSION_LATENCY, SessionError};
