use crate::model::Customer;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command.
///
/// `affected_customers` holds the records a mutation created or changed;
/// `listed_customers` holds a listing to show (the whole store for `list`,
/// the remaining records after a delete).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_customers: Vec<Customer>,
    pub listed_customers: Vec<Customer>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_customers(mut self, customers: Vec<Customer>) -> Self {
        self.affected_customers = customers;
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<Customer>) -> Self {
        self.listed_customers = customers;
        self
    }
}
