//! # Dawala CLI
//!
//! Operator tools for admin account provisioning. The binary talks to the
//! identity service directly, so no running server is needed.
//!
//! This library crate holds the console report formatting used by the binary.
//!
//! ## Usage
//!
//! ```bash
//! dawala-cli seed
//! dawala-cli seed --email ops@dawala.com --name "Ops Admin"
//! dawala-cli list
//! dawala-cli delete --email ops@dawala.com --yes
//! dawala-cli setup
//! ```

pub mod report;
