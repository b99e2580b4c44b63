use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Personal contact manager for the console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Phonebook folder (default: ~/phonebook)
    #[arg(long, global = true, env = "PHONEBOOK_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts, optionally filtered by a query (e.g. org:rewe, #:0221)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Query words (joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Enter a new contact (basic fields, then details)
    #[command(alias = "n", display_order = 2)]
    New,

    /// Edit a contact
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Number of the contact in the list
        index: String,

        /// Edit the detail fields instead of the basic ones
        #[arg(long)]
        details: bool,

        /// Edit the notes
        #[arg(long)]
        notes: bool,
    },

    /// Show one or more contacts in full
    #[command(alias = "v", display_order = 4)]
    View {
        /// Numbers of the contacts (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more contacts
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Numbers of the contacts (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Print the file path of one or more contacts
    #[command(display_order = 6)]
    Path {
        /// Numbers of the contacts (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Write an email to a contact
    #[command(display_order = 7)]
    Mail {
        /// Number of the contact in the list
        index: String,

        /// Use the work address instead of the private one
        #[arg(long)]
        work: bool,
    },

    /// Call a contact
    #[command(display_order = 8)]
    Call {
        /// Number of the contact in the list
        index: String,

        /// Use the work numbers instead of the private ones
        #[arg(long)]
        work: bool,
    },

    /// Get or set configuration
    #[command(display_order = 9)]
    Config {
        /// Configuration key (page-size, file-ext, gender-tokens, street-suffixes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
