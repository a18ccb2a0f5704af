//! Structured logging for the inventory dashboard.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with page/route context
//! - `LogSink` - Where formatted entries go (stderr, memory, browser console)
//! - `LogBuilder` - Fluent construction of entries with typed fields

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
