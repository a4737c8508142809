//! Core data types
//!
//! Defines fundamental types:
//! - OptionType: Call/Put selector
//! - Greeks: vega/theta sensitivities
//! - PricingError: error taxonomy for pricing and solving

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
