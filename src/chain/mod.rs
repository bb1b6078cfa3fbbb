//! Canonical Safe contract addresses

mod config;

pub use config::ChainAddresses;
