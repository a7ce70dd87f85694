//! # Dawala Admin API
//!
//! An HTTP service that provisions administrator accounts in a hosted
//! identity service (a GoTrue-compatible admin API, as exposed by Supabase).
//!
//! ## Overview
//!
//! - **Seeding**: ensure a list of admin accounts exists, creating the
//!   missing ones and skipping the rest, with a per-account result report
//! - **Deletion**: remove one admin account by email
//! - **Listing**: summarize every account in the identity service
//! - **Bootstrap**: create the admin named by `ADMIN_EMAIL` if it is absent,
//!   on request or once at startup
//!
//! The identity service is the only store. This crate keeps no database and
//! no process-global provisioning state.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── dawala-core/          # AppError and the JSON error envelope
//! ├── dawala-config/        # Environment-driven configuration
//! ├── dawala-models/        # Request and response DTOs
//! ├── dawala-identity/      # AccountDirectory trait and the admin API client
//! ├── dawala-provisioning/  # Seeder, deleter, lister and bootstrap
//! └── dawala-cli/           # Operator CLI
//! src/
//! ├── modules/
//! │   ├── admin_accounts/   # /api/seed-admin and /api/delete-admin
//! │   └── setup/            # /api/auto-setup
//! ├── logging.rs            # Tracing subscriber and request logging
//! ├── metrics.rs            # Prometheus exporter and counters
//! ├── router.rs             # Application router
//! └── state.rs              # Shared application state
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! SUPABASE_URL=https://project.supabase.co
//! SUPABASE_SERVICE_ROLE_KEY=service-role-key
//! cargo run --bin dawala
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Distributed tracing and logging
//! - [`metrics`]: Prometheus metrics endpoint
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`validator`]: Request validation utilities

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use dawala_config;
pub use dawala_core;
pub use dawala_identity;
pub use dawala_models;
pub use dawala_provisioning;
