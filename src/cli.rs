//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vastu Desk - numerology reports, Vastu remedies and consultation booking
#[derive(Parser, Debug)]
#[command(name = "vastu", version)]
#[command(about = "Numerology reports, Vastu remedies and consultation booking", long_about = None)]
pub struct Args {
    /// Consultation service WebSocket URL (overrides the config file)
    #[arg(long, global = true, value_name = "WS_URL")]
    pub backend: Option<String>,

    /// Config file to load instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a single command and print NDJSON events instead of starting the TUI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a numerology report followed by Vastu remedies
    Report {
        #[arg(long)]
        name: String,
        /// DD/MM/YYYY, DD-MM-YYYY or YYYY-MM-DD
        #[arg(long)]
        birth_date: String,
    },

    /// List the slots that can still be booked
    Slots,

    /// Book a consultation slot
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        /// Time range label of the slot, e.g. "10:00 - 11:00"
        #[arg(long)]
        slot: String,
    },

    /// Service administration
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// Publish a new bookable slot
    AddSlot { time_range: String },
    /// List every booking
    Bookings,
    /// List every generated report
    Reports,
    /// List every generated remedy set
    Remedies,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_starts_tui() {
        let args = Args::try_parse_from(["vastu", "--backend", "wss://example.com/rpc"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.backend.as_deref(), Some("wss://example.com/rpc"));
    }

    #[test]
    fn test_report_subcommand() {
        let args =
            Args::try_parse_from(["vastu", "report", "--name", "Asha", "--birth-date", "12/05/1990"])
                .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Report {
                name: "Asha".to_string(),
                birth_date: "12/05/1990".to_string(),
            })
        );
    }

    #[test]
    fn test_admin_add_slot_with_global_backend() {
        let args = Args::try_parse_from([
            "vastu",
            "admin",
            "add-slot",
            "10:00 - 11:00",
            "--backend",
            "ws://localhost:9000",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Admin(AdminCommand::AddSlot {
                time_range: "10:00 - 11:00".to_string()
            }))
        );
        assert_eq!(args.backend.as_deref(), Some("ws://localhost:9000"));
    }

    #[test]
    fn test_book_requires_slot() {
        assert!(Args::try_parse_from(["vastu", "book", "--name", "Asha", "--phone", "123"]).is_err());
    }
}
