//! API endpoint implementations

pub mod account;
pub mod configuration;
pub mod trading;

pub use account::AccountEndpoints;
pub use configuration::ConfigurationEndpoints;
pub use trading::TradingEndpoints;
