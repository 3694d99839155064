//! # Storage Layer
//!
//! The store is a single ordered list of [`Customer`] records. Every
//! invocation loads the whole list, applies at most one mutation, and writes
//! the whole list back. There is no incremental persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in one JSON document
//!   (`customers.json` by default). Saves are written to a temporary file and
//!   renamed into place, so a reader never sees half a document.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 1, "name": "Alice", "phone": "555-1234", "email": "", "notes": "" }
//! ]
//! ```
//!
//! The helpers [`next_id`] and [`find_by_id`] operate on a loaded list and
//! are shared by every backend.

use crate::error::{GreenbookError, Result};
use crate::model::Customer;

pub mod fs;
pub mod memory;

/// Whole-store persistence.
pub trait DataStore {
    /// Load every record, in stored order. A store that was never saved is empty.
    fn load(&self) -> Result<Vec<Customer>>;

    /// Replace the stored records with `customers`.
    fn save(&mut self, customers: &[Customer]) -> Result<()>;
}

/// One greater than the largest id present, or 1 for an empty list.
pub fn next_id(customers: &[Customer]) -> Result<u64> {
    match customers.iter().map(|c| c.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| GreenbookError::Validation("No customer ids left to assign".into())),
    }
}

pub fn find_by_id(customers: &[Customer], id: u64) -> Result<&Customer> {
    customers
        .iter()
        .find(|c| c.id == id)
        .ok_or(GreenbookError::NotFound(id))
}

pub fn find_by_id_mut(customers: &mut [Customer], id: u64) -> Result<&mut Customer> {
    customers
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(GreenbookError::NotFound(id))
}
