use crate::shared::core::decider::{Rejection, RejectionKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Editable customer fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CustomerError {
    #[error("customer name must not be empty")]
    EmptyName,

    #[error("customer {0} not found")]
    NotFound(String),
}

impl Rejection for CustomerError {
    fn kind(&self) -> RejectionKind {
        match self {
            CustomerError::EmptyName => RejectionKind::Invalid,
            CustomerError::NotFound(_) => RejectionKind::NotFound,
        }
    }
}

impl Customer {
    pub fn create(
        id: String,
        details: CustomerDetails,
        at: DateTime<Utc>,
    ) -> Result<Self, CustomerError> {
        let mut customer = Self {
            id,
            name: String::new(),
            address: None,
            contact_person: None,
            phone: None,
            email: None,
            created_at: at,
        };
        customer.apply(details)?;
        Ok(customer)
    }

    pub fn apply(&mut self, details: CustomerDetails) -> Result<(), CustomerError> {
        let name = details.name.trim();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name.to_string();
        self.address = non_blank(details.address);
        self.contact_person = non_blank(details.contact_person);
        self.phone = non_blank(details.phone);
        self.email = non_blank(details.email);
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn save(&self, customer: Customer) -> anyhow::Result<()>;
    async fn find(&self, customer_id: &str) -> anyhow::Result<Option<Customer>>;
    /// Sorted by name.
    async fn list(&self) -> anyhow::Result<Vec<Customer>>;
    /// Returns whether a customer was removed.
    async fn delete(&self, customer_id: &str) -> anyhow::Result<bool>;
}
