use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greenbook", bin_name = "greenbook", version)]
#[command(about = "Keep a tidy list of gardening customers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Customer list file (defaults to ./customers.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all customers
    #[command(alias = "ls")]
    List,

    /// Add a new customer
    Add {
        /// Customer name
        name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Notes or reminders
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit an existing customer
    Edit {
        /// Customer ID to edit
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a customer from the list
    #[command(alias = "rm")]
    Delete {
        /// Customer ID to delete
        id: u64,
    },
}
