use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{find_by_id, DataStore};

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut customers = store.load()?;
    let removed = find_by_id(&customers, id)?.clone();

    customers.retain(|c| c.id != id);
    tracing::info!(id, remaining = customers.len(), "deleting customer");
    store.save(&customers)?;

    let mut result = CmdResult::default().with_affected_customers(vec![removed]);
    result.add_message(CmdMessage::success(format!("Deleted customer {}.", id)));
    if !customers.is_empty() {
        result.add_message(CmdMessage::info("Remaining customers:"));
    }
    Ok(result.with_listed_customers(customers))
}
