//! Admin seeding DTOs.
//!
//! # Core Types
//!
//! - [`AdminAccountRequest`] - One account the caller wants to exist
//! - [`OperationOutcome`] - What happened to one requested account
//! - [`BatchSummary`] - Counts over a list of outcomes
//! - [`SeedReport`] - Outcomes plus summary for a whole seed call
//!
//! Field names on the wire follow the admin frontend (`adminUsers`,
//! `deletedUser`), so a few fields carry serde renames.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::accounts::AccountRef;

pub const DEFAULT_ROLE: &str = "admin";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// An admin account the caller wants to exist.
///
/// The email is the identity key. It is compared against existing accounts
/// exactly as given, without case folding or trimming.
#[derive(Deserialize, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct AdminAccountRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(alias = "displayName")]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl AdminAccountRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// The role to store. A blank role falls back to [`DEFAULT_ROLE`].
    pub fn effective_role(&self) -> &str {
        if self.role.trim().is_empty() {
            DEFAULT_ROLE
        } else {
            &self.role
        }
    }

    /// Validation messages joined into one line, or `None` when the request is valid.
    pub fn validation_error(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect();
        messages.sort();
        Some(messages.join(", "))
    }
}

impl fmt::Debug for AdminAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccountRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

/// Body of `POST /api/seed-admin`. Without `adminUsers` the default list is seeded.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct SeedAdminsRequest {
    #[serde(rename = "adminUsers", default)]
    pub admin_users: Option<Vec<AdminAccountRequest>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeAction {
    Created,
    Skipped,
    Failed,
}

impl OutcomeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeAction::Created => "created",
            OutcomeAction::Skipped => "skipped",
            OutcomeAction::Failed => "failed",
        }
    }
}

impl fmt::Display for OutcomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for one requested account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OperationOutcome {
    pub email: String,
    pub success: bool,
    pub action: OutcomeAction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<AccountRef>,
}

impl OperationOutcome {
    pub fn created(email: impl Into<String>, user: AccountRef) -> Self {
        Self {
            email: email.into(),
            success: true,
            action: OutcomeAction::Created,
            message: Some("Admin user created successfully".to_string()),
            error: None,
            user: Some(user),
        }
    }

    pub fn skipped(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            success: true,
            action: OutcomeAction::Skipped,
            message: Some("User already exists".to_string()),
            error: None,
            user: None,
        }
    }

    pub fn failed(email: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            success: false,
            action: OutcomeAction::Failed,
            message: None,
            error: Some(error.into()),
            user: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchSummary {
    pub total: usize,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Counts outcomes by action. `total` is the number of requests, which can
    /// exceed the number of outcomes if a caller passes a partial list.
    pub fn from_outcomes(total: usize, outcomes: &[OperationOutcome]) -> Self {
        outcomes.iter().fold(
            Self {
                total,
                ..Self::default()
            },
            |mut summary, outcome| {
                match outcome.action {
                    OutcomeAction::Created => summary.created += 1,
                    OutcomeAction::Skipped => summary.skipped += 1,
                    OutcomeAction::Failed => summary.failed += 1,
                }
                summary
            },
        )
    }
}

/// Outcome of a seed call.
///
/// `success` reports that the batch was processed. Failures are per item and
/// visible through `results` and `summary.failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedReport {
    pub success: bool,
    pub results: Vec<OperationOutcome>,
    pub summary: BatchSummary,
}

impl SeedReport {
    pub fn new(total: usize, results: Vec<OperationOutcome>) -> Self {
        let summary = BatchSummary::from_outcomes(total, &results);
        Self {
            success: true,
            results,
            summary,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedAdminsResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<OperationOutcome>,
    pub summary: BatchSummary,
}

impl SeedAdminsResponse {
    pub fn from_report(report: SeedReport, message: impl Into<String>) -> Self {
        Self {
            success: report.success,
            message: message.into(),
            results: report.results,
            summary: report.summary,
        }
    }
}
