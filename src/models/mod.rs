//! Pricing models
//!
//! - Black-Scholes: closed-form European pricing and Greeks
//! - Implied vol: Brent inversion of the Black-Scholes price

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::{d1, d2, greeks, norm_cdf, norm_pdf, price_call, price_put};
pub use implied_vol::{
    implied_volatility_call, implied_volatility_put, VolObjective, VOL_BRACKET,
};
