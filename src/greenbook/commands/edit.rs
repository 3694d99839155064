use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GreenbookError, Result};
use crate::model::CustomerUpdate;
use crate::store::{find_by_id_mut, DataStore};

pub fn run<S: DataStore>(store: &mut S, id: u64, update: &CustomerUpdate) -> Result<CmdResult> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(GreenbookError::Validation(
                "Customer name cannot be empty".into(),
            ));
        }
    }

    let mut customers = store.load()?;
    let customer = find_by_id_mut(&mut customers, id)?;

    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to update"));
        return Ok(result.with_affected_customers(vec![customer.clone()]));
    }

    update.apply_to(customer);
    let updated = customer.clone();
    tracing::info!(id, "updating customer");
    store.save(&customers)?;

    result.add_message(CmdMessage::success("Updated customer:"));
    Ok(result.with_affected_customers(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_full_customer("Alice", "555-1234", "", "hedge trimming")
            .with_full_customer("Bob", "555-9876", "bob@example.com", "")
    }

    #[test]
    fn changes_only_the_supplied_field() {
        let mut fixture = fixture();
        let before = fixture.store.load().unwrap();

        run(
            &mut fixture.store,
            1,
            &CustomerUpdate::new().email("alice@example.com"),
        )
        .unwrap();

        let after = fixture.store.load().unwrap();
        assert_eq!(after[0].email, "alice@example.com");
        assert_eq!(after[0].name, before[0].name);
        assert_eq!(after[0].phone, before[0].phone);
        assert_eq!(after[0].notes, before[0].notes);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn renames_a_customer() {
        let mut fixture = fixture();
        let result = run(&mut fixture.store, 2, &CustomerUpdate::new().name("Robert")).unwrap();
        assert_eq!(result.affected_customers[0].name, "Robert");
        assert_eq!(result.affected_customers[0].id, 2);
    }

    #[test]
    fn clears_an_optional_field() {
        let mut fixture = fixture();
        run(&mut fixture.store, 1, &CustomerUpdate::new().notes("")).unwrap();
        assert_eq!(fixture.store.load().unwrap()[0].notes, "");
    }

    #[test]
    fn unknown_id_is_not_found_and_nothing_is_saved() {
        let mut fixture = fixture();
        let err = run(&mut fixture.store, 42, &CustomerUpdate::new().phone("1")).unwrap_err();
        assert!(matches!(err, GreenbookError::NotFound(42)));
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut fixture = fixture();
        let err = run(&mut fixture.store, 1, &CustomerUpdate::new().name(" ")).unwrap_err();
        assert!(matches!(err, GreenbookError::Validation(_)));
        assert_eq!(fixture.store.load().unwrap()[0].name, "Alice");
    }

    #[test]
    fn empty_update_warns_without_saving() {
        let mut fixture = fixture();
        let result = run(&mut fixture.store, 1, &CustomerUpdate::new()).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to update");
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn empty_update_still_requires_an_existing_id() {
        let mut fixture = fixture();
        assert!(matches!(
            run(&mut fixture.store, 9, &CustomerUpdate::new()),
            Err(GreenbookError::NotFound(9))
        ));
    }
}
