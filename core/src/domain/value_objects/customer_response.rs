//! Response projection of the Customer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Customer;

/// Customer shape returned to callers
///
/// Constructed fresh per response and never persisted. Adds the derived
/// `full_name` field on top of the entity's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let full_name = customer.full_name();
        Self {
            id: customer.id,
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone: customer.phone,
            full_name,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_derives_full_name() {
        let customer = Customer::new(
            "jo@example.com".to_string(),
            "Jo".to_string(),
            "Do".to_string(),
            Some("+573001234567".to_string()),
        );
        let id = customer.id;

        let response = CustomerResponse::from(customer);
        assert_eq!(response.id, id);
        assert_eq!(response.full_name, "Jo Do");
        assert_eq!(response.phone.as_deref(), Some("+573001234567"));
    }
}
