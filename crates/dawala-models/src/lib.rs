//! # Dawala Models
//!
//! DTOs shared by the HTTP server and the CLI.
//!
//! - [`provisioning`]: Seed requests, per-account outcomes and batch summaries
//! - [`accounts`]: Account listings, deletion and bootstrap responses

pub mod accounts;
pub mod provisioning;

pub use accounts::{
    AccountRef, AccountSummary, DeleteAdminRequest, DeleteAdminResponse, ErrorResponse,
    HealthResponse, ListAccountsResponse, SetupResponse,
};
pub use provisioning::{
    AdminAccountRequest, BatchSummary, OperationOutcome, OutcomeAction, SeedAdminsRequest,
    SeedAdminsResponse, SeedReport,
};
