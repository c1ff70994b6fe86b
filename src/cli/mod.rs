pub mod ops;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "passbook")]
#[command(about = "Personal bank account book", long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Account data file (overrides the config)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Log level (overrides the config)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Open a new account
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long)]
        mobile: String,
        /// Father's / husband's name
        #[arg(long, default_value = "")]
        guardian: String,
        /// 4-digit PIN
        #[arg(long)]
        pin: String,
    },
    /// Deposit money
    Deposit {
        #[arg(long)]
        account: String,
        #[arg(long)]
        pin: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Withdraw money
    Withdraw {
        #[arg(long)]
        account: String,
        #[arg(long)]
        pin: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Show account details
    Details {
        #[arg(long)]
        account: String,
        #[arg(long)]
        pin: String,
    },
    /// Change profile fields; omitted fields are kept
    Update {
        #[arg(long)]
        account: String,
        /// Current PIN
        #[arg(long)]
        pin: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        guardian: Option<String>,
        #[arg(long)]
        new_pin: Option<String>,
    },
    /// Delete an account
    Delete {
        #[arg(long)]
        account: String,
        #[arg(long)]
        pin: String,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["passbook"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("passbook.toml"));
        assert!(cli.data_file.is_none());
    }

    #[test]
    fn test_parse_deposit() {
        let cli = Cli::try_parse_from([
            "passbook", "--data-file", "/tmp/x.json", "deposit", "--account", "AB12CD34EF", "--pin",
            "0123", "--amount", "500.25",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(
            cli.command,
            Some(Commands::Deposit {
                account: "AB12CD34EF".to_string(),
                pin: "0123".to_string(),
                amount: Decimal::new(50025, 2),
            })
        );
    }

    #[test]
    fn test_parse_update_keeps_omitted_fields_none() {
        let cli = Cli::try_parse_from([
            "passbook", "update", "--account", "A", "--pin", "1234", "--new-pin", "4321",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Update { name, new_pin, mobile, .. }) => {
                assert!(name.is_none());
                assert!(mobile.is_none());
                assert_eq!(new_pin.as_deref(), Some("4321"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bad_amount_rejected_by_parser() {
        assert!(Cli::try_parse_from([
            "passbook", "withdraw", "--account", "A", "--pin", "1234", "--amount", "lots",
        ])
        .is_err());
    }
}
