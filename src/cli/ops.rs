use std::io::Write;

use crate::account::{Account, AccountStore, AccountUpdate, NewAccount};
use crate::error::PassbookError;
use crate::storage::Storage;

use super::Commands;

/// Run one subcommand against the store and report the outcome to `out`
pub fn handle_command<S: Storage, W: Write>(
    store: &mut AccountStore<S>,
    cmd: Commands,
    out: &mut W,
) -> Result<(), PassbookError> {
    match cmd {
        Commands::Create { name, age, address, mobile, guardian, pin } => {
            let account = store.create_account(NewAccount {
                name,
                age,
                address,
                mobile_number: mobile,
                guardian_name: guardian,
                pin,
            })?;
            print_created(out, &account)?;
        }
        Commands::Deposit { account, pin, amount } => {
            let balance = store.deposit(&account, &pin, amount)?;
            writeln!(out, "Deposited {:.2} successfully.", amount)?;
            writeln!(out, "New Balance: {:.2}", balance)?;
        }
        Commands::Withdraw { account, pin, amount } => {
            let balance = store.withdraw(&account, &pin, amount)?;
            writeln!(out, "Withdrawn {:.2} successfully.", amount)?;
            writeln!(out, "New Balance: {:.2}", balance)?;
        }
        Commands::Details { account, pin } => {
            let details = store.get_details(&account, &pin)?;
            writeln!(out, "Account Details:")?;
            print_account(out, &details)?;
        }
        Commands::Update { account, pin, name, address, mobile, guardian, new_pin } => {
            let update = AccountUpdate {
                name,
                address,
                mobile_number: mobile,
                guardian_name: guardian,
                pin: new_pin,
            };
            let updated = store.update_details(&account, &pin, update)?;
            writeln!(out, "Details updated successfully.")?;
            print_account(out, &updated)?;
        }
        Commands::Delete { account, pin, yes } => {
            if !yes {
                return Err(PassbookError::Aborted(
                    "pass --yes to confirm account deletion".to_string(),
                ));
            }
            store.delete_account(&account, &pin)?;
            writeln!(out, "Account deleted successfully.")?;
        }
    }
    Ok(())
}

pub fn print_created<W: Write>(out: &mut W, account: &Account) -> std::io::Result<()> {
    writeln!(out, "Account created successfully!")?;
    writeln!(out, "Account Number: {}", account.account_number)?;
    writeln!(out, "Keep your PIN and Account Number safe.")
}

/// Two-column field/value table
pub fn print_account<W: Write>(out: &mut W, account: &Account) -> std::io::Result<()> {
    let rows = account.display_rows();
    let width = rows.iter().map(|(field, _)| field.len()).max().unwrap_or(0);
    for (field, value) in rows {
        writeln!(out, "  {:<width$}  {}", field, value, width = width)?;
    }
    Ok(())
}
