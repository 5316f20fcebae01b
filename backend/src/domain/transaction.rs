//! Ledger entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BudgetId, TransactionId};

/// A single posted or pending ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    #[schema(value_type = String)]
    pub id: TransactionId,
    pub name: String,
    pub account_number: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Budget this entry counts against, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub budget_id: Option<BudgetId>,
    pub amount: f32,
    pub points_rewarded: f32,
    pub transaction_date: DateTime<Utc>,
    pub transaction_posted: DateTime<Utc>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn kind_uses_the_type_key_and_budget_is_optional() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Coffee",
            "account_number": "000123",
            "category": "food",
            "type": "debit",
            "amount": 4.5,
            "points_rewarded": 0.0,
            "transaction_date": "2024-01-02T08:00:00Z",
            "transaction_posted": "2024-01-03T08:00:00Z",
            "description": "Morning coffee",
        }))
        .expect("transaction payload");

        assert_eq!(transaction.kind, "debit");
        assert!(transaction.budget_id.is_none());

        let value = serde_json::to_value(&transaction).expect("serialise transaction");
        assert_eq!(value["type"], "debit");
        assert!(value.get("budget_id").is_none());
    }
}
