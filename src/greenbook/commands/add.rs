use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreenbookError, Result};
use crate::model::{Customer, NewCustomer};
use crate::store::{next_id, DataStore};

pub fn run<S: DataStore>(store: &mut S, input: NewCustomer) -> Result<CmdResult> {
    if input.name.trim().is_empty() {
        return Err(GreenbookError::Validation(
            "Customer name cannot be empty".into(),
        ));
    }

    let mut customers = store.load()?;
    let customer = Customer::new(next_id(&customers)?, input);
    tracing::info!(id = customer.id, name = %customer.name, "adding customer");

    customers.push(customer.clone());
    store.save(&customers)?;

    let mut result = CmdResult::default().with_affected_customers(vec![customer]);
    result.add_message(CmdMessage::success("Added customer:"));
    Ok(result)
}
