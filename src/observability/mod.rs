//! # Observability
//!
//! Structured logging for degrade paths. Every fallback this crate
//! takes (empty manifest, synthesized metadata, placeholder fragment)
//! leaves a log line behind; nothing else about the failure is
//! observable to callers.

pub mod logger;

pub use logger::{Logger, Severity};
