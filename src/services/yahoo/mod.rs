//! Yahoo Finance data and news provider.

pub mod messages;
pub mod provider;

pub use provider::YahooProvider;
