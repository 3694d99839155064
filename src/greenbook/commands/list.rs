use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let customers = store.load()?;
    let mut result = CmdResult::default();
    if customers.is_empty() {
        result.add_message(CmdMessage::info("No customers yet."));
    }
    Ok(result.with_listed_customers(customers))
}
