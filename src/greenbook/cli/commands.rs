use super::print::{print_messages, print_table};
use super::setup::Cli;
use greenbook::api::GreenbookApi;
use greenbook::config::GreenbookConfig;
use greenbook::error::Result;
use greenbook::model::{CustomerUpdate, NewCustomer};
use greenbook::store::fs::FileStore;

pub struct AppContext {
    pub api: GreenbookApi<FileStore>,
}

pub fn init_context(cli: &Cli) -> AppContext {
    let config = GreenbookConfig::resolve(cli.file.clone());
    tracing::debug!(data_file = %config.data_file().display(), "using customer list");

    AppContext {
        api: GreenbookApi::new(FileStore::new(config.data_file())),
    }
}

pub fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_customers()?;
    print_table(&result.listed_customers);
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_add(
    ctx: &mut AppContext,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let input = NewCustomer {
        name,
        phone,
        email,
        notes,
    };
    let result = ctx.api.add_customer(input)?;
    print_messages(&result.messages);
    print_table(&result.affected_customers);
    Ok(())
}

pub fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let update = CustomerUpdate {
        name,
        phone,
        email,
        notes,
    };
    let result = ctx.api.edit_customer(id, &update)?;
    print_messages(&result.messages);
    print_table(&result.affected_customers);
    Ok(())
}

pub fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_customer(id)?;
    print_messages(&result.messages);
    if !result.listed_customers.is_empty() {
        print_table(&result.listed_customers);
    }
    Ok(())
}
