use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::account::{AccountStore, AccountUpdate, NewAccount};
use crate::cli::ops::{print_account, print_created};
use crate::error::PassbookError;
use crate::storage::Storage;

/// Numbered console menu. Runs until "Exit" or end of input.
///
/// Store failures are printed and the menu carries on; only console I/O
/// errors end the session.
pub fn run<S, R, W>(store: &mut AccountStore<S>, input: &mut R, out: &mut W) -> Result<(), PassbookError>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n=== Passbook ===")?;
    loop {
        writeln!(out, "\n1. Create Account")?;
        writeln!(out, "2. Deposit")?;
        writeln!(out, "3. Withdraw")?;
        writeln!(out, "4. View Details")?;
        writeln!(out, "5. Update Details")?;
        writeln!(out, "6. Delete Account")?;
        writeln!(out, "7. Exit")?;

        let Some(choice) = prompt(input, out, "Select: ")? else {
            return Ok(());
        };
        let result = match choice.trim() {
            "1" => create(store, input, out),
            "2" => transact(store, input, out, Transaction::Deposit),
            "3" => transact(store, input, out, Transaction::Withdraw),
            "4" => details(store, input, out),
            "5" => update(store, input, out),
            "6" => delete(store, input, out),
            "7" => return Ok(()),
            _ => {
                writeln!(out, "Invalid choice.")?;
                continue;
            }
        };
        match result {
            Ok(()) => {}
            Err(PassbookError::Io(e)) => return Err(PassbookError::Io(e)),
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
}

enum Transaction {
    Deposit,
    Withdraw,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> std::io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

// End of input in the middle of a form aborts that form.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String, PassbookError> {
    prompt(input, out, label)?.ok_or_else(|| PassbookError::Aborted("input closed".to_string()))
}

fn ask_credentials<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(String, String), PassbookError> {
    let account = ask(input, out, "Account Number: ")?.trim().to_string();
    let pin = ask(input, out, "PIN: ")?.trim().to_string();
    Ok((account, pin))
}

/// Blank answer means "keep"
fn ask_optional<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, PassbookError> {
    let answer = ask(input, out, label)?;
    Ok(if answer.trim().is_empty() { None } else { Some(answer) })
}

fn create<S: Storage, R: BufRead, W: Write>(
    store: &mut AccountStore<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), PassbookError> {
    let name = ask(input, out, "Full Name: ")?;
    let age = ask(input, out, "Age: ")?;
    let Ok(age) = age.trim().parse::<u32>() else {
        writeln!(out, "Age must be a whole number.")?;
        return Ok(());
    };
    let address = ask(input, out, "Address: ")?;
    let mobile_number = ask(input, out, "Mobile Number: ")?.trim().to_string();
    let guardian_name = ask(input, out, "Father's / Husband's Name: ")?;
    let pin = ask(input, out, "4-digit PIN: ")?.trim().to_string();

    let account = store.create_account(NewAccount {
        name,
        age,
        address,
        mobile_number,
        guardian_name,
        pin,
    })?;
    print_created(out, &account)?;
    Ok(())
}

fn transact<S: Storage, R: BufRead, W: Write>(
    store: &mut AccountStore<S>,
    input: &mut R,
    out: &mut W,
    kind: Transaction,
) -> Result<(), PassbookError> {
    let (account, pin) = ask_credentials(input, out)?;
    let amount = ask(input, out, "Amount: ")?;
    let Ok(amount) = amount.trim().parse::<Decimal>() else {
        writeln!(out, "Amount must be a number.")?;
        return Ok(());
    };

    let (verb, balance) = match kind {
        Transaction::Deposit => ("Deposited", store.deposit(&account, &pin, amount)?),
        Transaction::Withdraw => ("Withdrawn", store.withdraw(&account, &pin, amount)?),
    };
    writeln!(out, "{} {:.2} successfully.", verb, amount)?;
    writeln!(out, "New Balance: {:.2}", balance)?;
    Ok(())
}

fn details<S: Storage, R: BufRead, W: Write>(
    store: &AccountStore<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), PassbookError> {
    let (account, pin) = ask_credentials(input, out)?;
    let details = store.get_details(&account, &pin)?;
    writeln!(out, "Account Details:")?;
    print_account(out, &details)?;
    Ok(())
}

fn update<S: Storage, R: BufRead, W: Write>(
    store: &mut AccountStore<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), PassbookError> {
    let (account, pin) = ask_credentials(input, out)?;
    // Fail early so the user is not asked for fields of an account they can't reach.
    store.get_details(&account, &pin)?;

    let update = AccountUpdate {
        name: ask_optional(input, out, "New Name (blank to keep): ")?,
        address: ask_optional(input, out, "New Address (blank to keep): ")?,
        mobile_number: ask_optional(input, out, "New Mobile Number (blank to keep): ")?
            .map(|m| m.trim().to_string()),
        guardian_name: ask_optional(input, out, "New Father's / Husband's Name (blank to keep): ")?,
        pin: ask_optional(input, out, "New 4-digit PIN (blank to keep): ")?.map(|p| p.trim().to_string()),
    };
    let updated = store.update_details(&account, &pin, update)?;
    writeln!(out, "Details updated successfully.")?;
    print_account(out, &updated)?;
    Ok(())
}

fn delete<S: Storage, R: BufRead, W: Write>(
    store: &mut AccountStore<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), PassbookError> {
    let (account, pin) = ask_credentials(input, out)?;
    store.get_details(&account, &pin)?;

    let confirm = ask(input, out, "Press Y to delete the account, N to cancel: ")?;
    if !confirm.trim().eq_ignore_ascii_case("y") {
        writeln!(out, "Account deletion cancelled.")?;
        return Ok(());
    }
    store.delete_account(&account, &pin)?;
    writeln!(out, "Account deleted successfully.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::TempPath;
    use crate::storage::JsonFileStorage;
    use std::io::Cursor;

    fn session(store: &mut AccountStore<JsonFileStorage>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(store, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn account_number(text: &str) -> String {
        text.lines()
            .find_map(|l| l.split("Account Number: ").nth(1))
            .unwrap()
            .trim()
            .to_string()
    }

    const CREATE: &str = "1\nAsha\n25\n1 Main St\n9876543210\nR. Rao\n1234\n";

    #[test]
    fn test_create_deposit_withdraw() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));

        let text = session(&mut store, &format!("{CREATE}7\n"));
        assert!(text.contains("Account created successfully!"));
        let number = account_number(&text);
        assert_eq!(number.len(), 10);

        let text = session(&mut store, &format!("2\n {number} \n1234\n500\n3\n{number}\n1234\n600\n3\n{number}\n1234\n500\n"));
        assert!(text.contains("New Balance: 500.00"));
        assert!(text.contains("Error: Insufficient balance"));
        assert!(text.contains("New Balance: 0.00"));
    }

    #[test]
    fn test_validation_error_keeps_menu_running() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));

        let text = session(&mut store, "1\nKid\n12\nx\n9876543210\ny\n1234\n9\n7\n");
        assert!(text.contains("at least 18"));
        assert!(text.contains("Invalid choice."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_blank_keeps_fields() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));
        let number = account_number(&session(&mut store, CREATE));

        session(&mut store, &format!("5\n{number}\n1234\n\n2 Hill Rd\n\n\n4321\n"));

        let account = store.get_details(&number, "4321").unwrap();
        assert_eq!(account.name, "Asha");
        assert_eq!(account.address, "2 Hill Rd");
        assert_eq!(account.mobile_number, "9876543210");
    }

    #[test]
    fn test_update_wrong_pin_stops_early() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));
        let number = account_number(&session(&mut store, CREATE));

        let text = session(&mut store, &format!("5\n{number}\n9999\n7\n"));
        assert!(text.contains("No account found"));
        assert!(!text.contains("New Name"));
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));
        let number = account_number(&session(&mut store, CREATE));

        let text = session(&mut store, &format!("6\n{number}\n1234\nn\n"));
        assert!(text.contains("cancelled"));
        assert_eq!(store.len(), 1);

        let text = session(&mut store, &format!("6\n{number}\n1234\nY\n4\n{number}\n1234\n"));
        assert!(text.contains("Account deleted successfully."));
        assert!(text.contains("No account found"));
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let tmp = TempPath::new();
        let mut store = AccountStore::open(JsonFileStorage::new(&tmp.0));
        let number = account_number(&session(&mut store, CREATE));

        let text = session(&mut store, &format!("2\n{number}\n1234\nten\n2\n{number}\n1234\n20000\n"));
        assert!(text.contains("Amount must be a number."));
        assert!(text.contains("Amount should be > 0 and <= 10000"));
    }
}
