//! Configuration types for the token dashboard.
//!
//! This crate provides:
//! - Network configurations (mainnet, testnet)
//! - ENS contract addresses for different chains

pub mod network;

pub use network::{NetworkConfig, NetworkType};
