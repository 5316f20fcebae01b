//! Financial account record.
//!
//! Modelled for future use; no HTTP operation reads or writes accounts yet.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AccountId;

/// A bank or brokerage account held by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    #[schema(value_type = String)]
    pub id: AccountId,
    pub account_label: String,
    pub account_type: String,
    pub account_number: String,
    pub routing_number: String,
    pub current_balance: f64,
    pub available_balance: f64,
    pub interest_rate: f64,
    pub acquired_interest: f64,
}
