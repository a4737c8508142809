//! # BSM Options - Black-Scholes European Option Pricing
//!
//! A small quantitative library for pricing European stock options under
//! the Black-Scholes-Merton model and recovering implied volatility from
//! observed market prices.
//!
//! ## Key Components
//!
//! - **Pricing**: closed-form call/put prices
//! - **Greeks**: vega (per 1% vol move) and theta (per calendar day)
//! - **Implied Volatility**: Brent's method on the fixed bracket
//!   [0.01, 5.0], result in percent
//!
//! Every function is pure and stateless; there is no shared mutable state,
//! so all of them are safe to call concurrently without synchronization.
//!
//! ## Usage
//!
//! ```rust
//! use bsm_options::prelude::*;
//!
//! // Price an ATM one-year call at 20% vol
//! let call = price_call(100.0, 100.0, 0.05, 1.0, 0.20)?;
//!
//! // Recover the implied vol from the observed premium (percent units)
//! let iv = implied_volatility_call(100.0, 100.0, 0.05, 1.0, call)?;
//! assert!((iv - 20.0).abs() < 0.01);
//!
//! // Vega and theta
//! let g = greeks(100.0, 100.0, 0.05, 1.0, 0.20, OptionType::Call)?;
//! assert!(g.vega > 0.0 && g.theta < 0.0);
//! # Ok::<(), bsm_options::PricingError>(())
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - American or exotic payoffs
//! - Dividend yields
//! - Multi-asset or stochastic-volatility models
//! - Any I/O, CLI, or market-data layer (callers pass parsed scalars)

pub mod core;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{Greeks, OptionType, PricingError, PricingResult};

    // Pricing and solving
    pub use crate::models::{
        d1, d2, greeks, implied_volatility_call, implied_volatility_put, norm_cdf, norm_pdf,
        price_call, price_put, VolObjective, VOL_BRACKET,
    };
}

// Re-export main types at crate root
pub use crate::core::{Greeks, OptionType, PricingError, PricingResult};
pub use crate::models::{
    greeks, implied_volatility_call, implied_volatility_put, price_call, price_put,
};
