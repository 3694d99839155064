//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! greenbook operation, whatever the front end.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It holds no business logic and does no I/O of its own beyond what the
//! [`DataStore`] it wraps performs.
//!
//! `GreenbookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `GreenbookApi<FileStore>`
//! - Testing: `GreenbookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{CustomerUpdate, NewCustomer};
use crate::store::DataStore;

pub struct GreenbookApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> GreenbookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_customer(&mut self, input: NewCustomer) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn edit_customer(
        &mut self,
        id: u64,
        update: &CustomerUpdate,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, update)
    }

    pub fn delete_customer(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GreenbookError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_a_full_lifecycle() {
        let mut api = GreenbookApi::new(InMemoryStore::new());

        let added = api
            .add_customer(NewCustomer::new("Alice").with_phone("555-1234"))
            .unwrap();
        assert_eq!(added.affected_customers[0].id, 1);

        let edited = api
            .edit_customer(1, &CustomerUpdate::new().email("alice@example.com"))
            .unwrap();
        assert_eq!(edited.affected_customers[0].email, "alice@example.com");

        let listed = api.list_customers().unwrap();
        assert_eq!(listed.listed_customers.len(), 1);

        api.delete_customer(1).unwrap();
        assert!(api.list_customers().unwrap().listed_customers.is_empty());
        assert_eq!(api.store().save_count(), 3);
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let mut api = GreenbookApi::new(InMemoryStore::new());
        assert!(matches!(
            api.delete_customer(1),
            Err(GreenbookError::NotFound(1))
        ));
        assert!(matches!(
            api.add_customer(NewCustomer::new("")),
            Err(GreenbookError::Validation(_))
        ));
    }
}
