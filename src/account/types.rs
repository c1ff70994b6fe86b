//! Account record definitions for passbook

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Account identifier - system generated, 10 chars of A-Z / 0-9
pub type AccountNumber = String;

/// One bank account and its owner's profile.
///
/// The serde names are the keys the data file has always used, so files
/// written by earlier versions load unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Account {
    // Profile
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Mobile Number", deserialize_with = "digit_string")]
    pub mobile_number: String, // digit string, leading zeros kept
    #[serde(rename = "Father's / Husband's Name")]
    pub guardian_name: String,

    // Credentials
    #[serde(rename = "Pin", deserialize_with = "digit_string")]
    pub pin: String, // digit string, leading zeros kept
    #[serde(rename = "Account Number")]
    pub account_number: AccountNumber,

    // State
    #[serde(rename = "Balance", default, with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Accept a digit string, or a bare number as the console-only version wrote them
fn digit_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Digits {
        Text(String),
        Number(u64),
    }

    Ok(match Digits::deserialize(deserializer)? {
        Digits::Text(s) => s,
        Digits::Number(n) => n.to_string(),
    })
}

impl Account {
    /// Check a credential pair against this record
    pub fn matches(&self, account_number: &str, pin: &str) -> bool {
        self.account_number == account_number && self.pin == pin
    }

    /// Field/value rows for display. The pin is masked.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Age", self.age.to_string()),
            ("Address", self.address.clone()),
            ("Mobile Number", self.mobile_number.clone()),
            ("Father's / Husband's Name", self.guardian_name.clone()),
            ("Pin", "*".repeat(self.pin.len())),
            ("Account Number", self.account_number.clone()),
            ("Balance", format!("{:.2}", self.balance)),
        ]
    }
}

/// Input for account creation, as collected by a front-end
#[derive(Clone, Debug, Default)]
pub struct NewAccount {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub mobile_number: String,
    pub guardian_name: String,
    pub pin: String,
}

/// Profile fields to change. `None` leaves the stored value alone.
#[derive(Clone, Debug, Default)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub mobile_number: Option<String>,
    pub guardian_name: Option<String>,
    pub pin: Option<String>,
}
