//! User data model.
//!
//! A user is identified by a [`UserId`] assigned at creation and never
//! changed afterwards. The remaining six fields are replaced wholesale on
//! update; see [`UserFields`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// The updatable portion of a user record.
///
/// Updates are full replacements: every field here overwrites the stored
/// value, so a field the caller left at its default resets to that default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFields {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = 100.5)]
    pub net_worth: f64,
    /// Free-form account labels; not references to stored accounts.
    #[schema(example = json!(["checking"]))]
    pub accounts: Vec<String>,
    #[schema(example = 700)]
    pub credit_score: i32,
    /// Free-form budget labels; not references to stored budgets.
    #[schema(example = json!(["rent"]))]
    pub budget: Vec<String>,
}

/// Application user.
///
/// ## Invariants
/// - `id` is immutable once assigned. Uniqueness is enforced by storage.
///
/// # Examples
/// ```
/// use trackme::domain::{User, UserFields, UserId};
///
/// let fields = UserFields {
///     username: "alice".into(),
///     ..UserFields::default()
/// };
/// let user = User::new(UserId::random(), fields);
/// assert_eq!(user.username, "alice");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub net_worth: f64,
    pub accounts: Vec<String>,
    pub credit_score: i32,
    pub budget: Vec<String>,
}

impl User {
    /// Build a user from an identifier and its updatable fields.
    pub fn new(id: UserId, fields: UserFields) -> Self {
        let UserFields {
            username,
            email,
            net_worth,
            accounts,
            credit_score,
            budget,
        } = fields;
        Self {
            id,
            username,
            email,
            net_worth,
            accounts,
            credit_score,
            budget,
        }
    }

    /// Overwrite every updatable field, leaving `id` untouched.
    pub fn replace_fields(&mut self, fields: UserFields) {
        let id = self.id;
        *self = Self::new(id, fields);
    }

    /// Copy out the updatable fields.
    pub fn fields(&self) -> UserFields {
        UserFields {
            username: self.username.clone(),
            email: self.email.clone(),
            net_worth: self.net_worth,
            accounts: self.accounts.clone(),
            credit_score: self.credit_score,
            budget: self.budget.clone(),
        }
    }
}
