//! Shared utilities and error types

pub mod error;

pub use error::{ContextError, RjsError, Result};
