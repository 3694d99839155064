use super::DataStore;
use crate::error::{GreenbookError, Result};
use crate::model::Customer;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `save` fails with a persistence error.
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            ..Self::default()
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        if self.fail_saves {
            return Err(GreenbookError::Persistence {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "saves disabled"),
            });
        }
        self.customers = customers.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewCustomer;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, input: NewCustomer) {
            let mut customers = self.store.load().unwrap();
            let id = crate::store::next_id(&customers).unwrap();
            customers.push(Customer::new(id, input));
            self.store.customers = customers;
        }

        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                self.push(
                    NewCustomer::new(format!("Customer {}", i + 1))
                        .with_phone(format!("555-000{}", i + 1)),
                );
            }
            self
        }

        pub fn with_customer(mut self, name: &str) -> Self {
            self.push(NewCustomer::new(name));
            self
        }

        pub fn with_full_customer(
            mut self,
            name: &str,
            phone: &str,
            email: &str,
            notes: &str,
        ) -> Self {
            self.push(
                NewCustomer::new(name)
                    .with_phone(phone)
                    .with_email(email)
                    .with_notes(notes),
            );
            self
        }
    }
}
