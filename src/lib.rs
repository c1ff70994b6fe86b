pub mod account;
pub mod storage;
pub mod config;
pub mod error;
pub mod cli;
pub mod interactive;
