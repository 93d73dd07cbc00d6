//! Customer entity representing a registered shopper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use se_shared::utils::validation::normalize_email;

/// Customer entity
///
/// The email is stored in canonical (lower-cased) form; uniqueness across
/// customers is case-insensitive and enforced before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: Uuid,

    /// Email address, canonical lower-cased form
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Optional contact phone in E.164-style format
    pub phone: Option<String>,

    /// Timestamp when the customer was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the customer was last updated
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer with a generated id and fresh timestamps
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(&email),
            first_name,
            last_name,
            phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name combining first and last name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace one or both name components
    pub fn rename(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        self.updated_at = Utc::now();
    }

    /// Replace the contact phone
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }
}
