//! Account system
//!
//! - `types`: the persisted account record and front-end input shapes
//! - `validation`: field and amount rules
//! - `number`: unique account number generation
//! - `store`: the account store that owns and persists every record

pub mod types;
pub mod validation;
pub mod number;
pub mod store;

pub use types::{Account, AccountNumber, AccountUpdate, NewAccount};
pub use validation::ValidationError;
pub use store::{AccountStore, AccountStoreError};
