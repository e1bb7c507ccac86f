use crate::modules::customers::core::customer::{Customer, CustomerRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
    is_offline: bool,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Customer repository offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: Customer) -> anyhow::Result<()> {
        self.check_online()?;
        self.customers
            .write()
            .await
            .insert(customer.id.clone(), customer);
        Ok(())
    }

    async fn find(&self, customer_id: &str) -> anyhow::Result<Option<Customer>> {
        self.check_online()?;
        Ok(self.customers.read().await.get(customer_id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Customer>> {
        self.check_online()?;
        let mut customers: Vec<Customer> = self.customers.read().await.values().cloned().collect();
        customers.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(customers)
    }

    async fn delete(&self, customer_id: &str) -> anyhow::Result<bool> {
        self.check_online()?;
        Ok(self.customers.write().await.remove(customer_id).is_some())
    }
}
