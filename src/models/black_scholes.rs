//! Black-Scholes Model
//!
//! Provides:
//! - European call/put pricing (closed form)
//! - Vega and theta
//!
//! The Greeks follow market conventions: vega is quoted per 1% vol move,
//! theta per calendar day.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{Greeks, OptionType, PricingError, PricingResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Assumes spot, strike, time and vol are strictly positive.
pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
    d1(spot, strike, rate, time, vol) - vol * time.sqrt()
}

/// Validate the common pricing inputs. Rate may be any finite real
/// (negative rates are legal).
fn check_inputs(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> PricingResult<()> {
    if !spot.is_finite() || !strike.is_finite() || !rate.is_finite() || !time.is_finite() || !vol.is_finite() {
        return Err(PricingError::invalid_input("Non-finite pricing input"));
    }
    if spot <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive spot"));
    }
    if strike <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive strike"));
    }
    if time <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive time to expiry"));
    }
    if vol < 0.0 {
        return Err(PricingError::invalid_input("Negative volatility"));
    }
    Ok(())
}

// Formula cores. Callers must have validated the domain (spot, strike,
// time, vol all strictly positive).

pub(crate) fn call_price_raw(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
    let d1 = d1(spot, strike, rate, time, vol);
    let d2 = d1 - vol * time.sqrt();
    spot * norm_cdf(d1) - strike * (-rate * time).exp() * norm_cdf(d2)
}

pub(crate) fn put_price_raw(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
    let d1 = d1(spot, strike, rate, time, vol);
    let d2 = d1 - vol * time.sqrt();
    strike * (-rate * time).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

/// Black-Scholes European call price
///
/// Fails with [`PricingError::InvalidInput`] on non-positive spot, strike
/// or time, or on zero/negative vol: the closed form is undefined there
/// and a silent NaN would otherwise leak into downstream arithmetic.
pub fn price_call(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> PricingResult<f64> {
    check_inputs(spot, strike, rate, time, vol)?;
    if vol == 0.0 {
        return Err(PricingError::invalid_input(
            "Zero volatility: price is undefined in the closed form",
        ));
    }
    Ok(call_price_raw(spot, strike, rate, time, vol))
}

/// Black-Scholes European put price
///
/// Same preconditions as [`price_call`]. Put-call parity
/// `call - put = S - K*exp(-r*T)` holds for all valid inputs.
pub fn price_put(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> PricingResult<f64> {
    check_inputs(spot, strike, rate, time, vol)?;
    if vol == 0.0 {
        return Err(PricingError::invalid_input(
            "Zero volatility: price is undefined in the closed form",
        ));
    }
    Ok(put_price_raw(spot, strike, rate, time, vol))
}

/// Black-Scholes vega and theta
///
/// Zero vol is the one documented NaN case: sensitivities are undefined
/// there and the result is `Greeks::undefined()`, not an error.
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    vol: f64,
    option_type: OptionType,
) -> PricingResult<Greeks> {
    check_inputs(spot, strike, rate, time, vol)?;
    if vol == 0.0 {
        return Ok(Greeks::undefined());
    }

    let d1 = d1(spot, strike, rate, time, vol);
    let d2 = d1 - vol * time.sqrt();
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();

    // Vega (same for call and put, per 1% vol move)
    let vega = spot * norm_pdf(d1) * sqrt_t / 100.0;

    // Theta (per day)
    let theta = match option_type {
        OptionType::Call => {
            -spot * norm_pdf(d1) * vol / (2.0 * sqrt_t) - rate * strike * df * norm_cdf(d2)
        }
        OptionType::Put => {
            -spot * norm_pdf(-d1) * vol / (2.0 * sqrt_t) + rate * strike * df * norm_cdf(-d2)
        }
    };
    let theta_per_day = theta / 365.0;

    Ok(Greeks::new(vega, theta_per_day))
}
