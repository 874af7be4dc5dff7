//! Contract bindings for all external contracts.
//!
//! This crate consolidates the Solidity contract interfaces used across the
//! project:
//! - ENS contracts (registry, public resolver)
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod ens;
