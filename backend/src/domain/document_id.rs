//! Opaque document identifiers shared by every record type.
//!
//! Identifiers are 12-byte document store object ids. On the wire they are
//! rendered as 24-character lowercase hex strings.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`DocumentId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdValidationError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier must be a 24 character hex string")]
    Malformed,
}

/// Identifier of a stored record.
///
/// The all-zero value is reserved as "not yet assigned"; see
/// [`DocumentId::nil`].
///
/// # Examples
/// ```
/// use trackme::domain::DocumentId;
///
/// let id = DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5f6").expect("valid id");
/// assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(DocumentId::parse("invalid-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(ObjectId);

/// Identifier of a [`crate::domain::User`].
pub type UserId = DocumentId;
/// Identifier of an [`crate::domain::Account`].
pub type AccountId = DocumentId;
/// Identifier of a [`crate::domain::Budget`].
pub type BudgetId = DocumentId;
/// Identifier of a [`crate::domain::Transaction`].
pub type TransactionId = DocumentId;

impl DocumentId {
    /// Parse an identifier from its hex representation.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentIdValidationError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(DocumentIdValidationError::Empty);
        }
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| DocumentIdValidationError::Malformed)
    }

    /// Generate a fresh, unique identifier.
    pub fn random() -> Self {
        Self(ObjectId::new())
    }

    /// The zero-valued identifier.
    pub fn nil() -> Self {
        Self(ObjectId::from_bytes([0; 12]))
    }

    /// Whether this identifier is still the zero value.
    pub fn is_nil(&self) -> bool {
        self.0.bytes() == [0; 12]
    }

    /// Access the underlying object id.
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
