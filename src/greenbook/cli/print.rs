use colored::*;
use greenbook::api::{CmdMessage, MessageLevel};
use greenbook::model::Customer;
use greenbook::table::render_table;

pub fn print_table(customers: &[Customer]) {
    for line in render_table(customers) {
        println!("{}", line);
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}
