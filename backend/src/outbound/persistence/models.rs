//! Stored document shapes for the users collection.
//!
//! Documents written by older clients may carry `null` for the label lists
//! or omit fields entirely; decoding accepts both and yields defaults.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserFields, UserId};

/// Name of the collection holding user documents.
pub(crate) const USERS_COLLECTION: &str = "users";

/// A user as persisted: `{_id, username, email, net_worth, accounts,
/// credit_score, budget}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub net_worth: f64,
    #[serde(default)]
    pub accounts: Option<Vec<String>>,
    #[serde(default)]
    pub credit_score: i32,
    #[serde(default)]
    pub budget: Option<Vec<String>>,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.clone(),
            email: user.email.clone(),
            net_worth: user.net_worth,
            accounts: Some(user.accounts.clone()),
            credit_score: user.credit_score,
            budget: Some(user.budget.clone()),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        User::new(
            document.id.into(),
            UserFields {
                username: document.username,
                email: document.email,
                net_worth: document.net_worth,
                accounts: document.accounts.unwrap_or_default(),
                credit_score: document.credit_score,
                budget: document.budget.unwrap_or_default(),
            },
        )
    }
}

/// Filter matching the single document keyed by `id`.
pub(crate) fn id_filter(id: &UserId) -> Document {
    doc! { "_id": *id.as_object_id() }
}

/// `$set` update overwriting exactly the six updatable fields.
pub(crate) fn replace_fields_update(fields: &UserFields) -> Document {
    doc! {
        "$set": {
            "username": fields.username.as_str(),
            "email": fields.email.as_str(),
            "net_worth": fields.net_worth,
            "accounts": fields.accounts.clone(),
            "credit_score": fields.credit_score,
            "budget": fields.budget.clone(),
        }
    }
}
