//! # Utilities Module
//!
//! Async helpers: a shared cancellation signal and a cancellable delay.

pub mod cancellation;
pub mod delay;

pub use cancellation::*;
pub use delay::*;
