//! # Dawala Core
//!
//! Foundational types shared by the Dawala admin server crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use dawala_core::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("Email is required"));
//! ```

pub mod errors;

pub use errors::AppError;
