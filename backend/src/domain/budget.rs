//! Spending budget over a date range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BudgetId;

/// A spending constraint between `start_date` and `end_date`.
///
/// Not yet referenced by any operation; [`crate::domain::User::budget`] holds
/// free-form labels rather than budget identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Budget {
    #[schema(value_type = String)]
    pub id: BudgetId,
    pub minimum_spending: f64,
    pub maximum_spending: f64,
    pub target_goal: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_meeting_budget: bool,
}
