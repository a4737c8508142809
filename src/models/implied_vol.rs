//! Implied Volatility Solver
//!
//! Inverts the Black-Scholes price over volatility with Brent's method on
//! the fixed bracket [0.01, 5.0] (1%-500% annualized vol). The price is
//! strictly increasing in vol (vega > 0), so the objective has at most one
//! root and the bracketed search is well-posed whenever the endpoint values
//! straddle zero.
//!
//! A market price outside the attainable range (below intrinsic, or above
//! the vol=500% premium) leaves no sign change on the bracket and reports
//! `PricingError::NoSolution`. Failure is never encoded as a numeric 0.

use roots::{find_root_brent, SearchError, SimpleConvergency};

use super::black_scholes::{call_price_raw, put_price_raw};
use crate::core::{OptionType, PricingError, PricingResult};

/// Fixed search bracket for annualized vol
pub const VOL_BRACKET: (f64, f64) = (0.01, 5.0);

/// Root-finding objective: model price minus market price at a trial vol.
///
/// Bundles the quote parameters explicitly rather than capturing them in a
/// closure, so the objective can be constructed, inspected, and evaluated
/// on its own.
#[derive(Debug, Clone, Copy)]
pub struct VolObjective {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub time: f64,
    pub market_price: f64,
    pub option_type: OptionType,
}

impl VolObjective {
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        market_price: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            time,
            market_price,
            option_type,
        }
    }

    /// Signed pricing error at a trial vol. Negative below the implied
    /// vol, positive above it.
    pub fn evaluate(&self, vol: f64) -> f64 {
        let model_price = match self.option_type {
            OptionType::Call => call_price_raw(self.spot, self.strike, self.rate, self.time, vol),
            OptionType::Put => put_price_raw(self.spot, self.strike, self.rate, self.time, vol),
        };
        model_price - self.market_price
    }
}

/// Implied volatility of a European call, in percent (sigma 0.20 -> 20.0)
pub fn implied_volatility_call(
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    market_price: f64,
) -> PricingResult<f64> {
    solve(VolObjective::new(
        spot,
        strike,
        rate,
        time,
        market_price,
        OptionType::Call,
    ))
}

/// Implied volatility of a European put, in percent (sigma 0.20 -> 20.0)
pub fn implied_volatility_put(
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    market_price: f64,
) -> PricingResult<f64> {
    solve(VolObjective::new(
        spot,
        strike,
        rate,
        time,
        market_price,
        OptionType::Put,
    ))
}

fn solve(objective: VolObjective) -> PricingResult<f64> {
    let VolObjective {
        spot,
        strike,
        rate,
        time,
        market_price,
        ..
    } = objective;

    if !spot.is_finite() || !strike.is_finite() || !rate.is_finite() || !time.is_finite() {
        return Err(PricingError::invalid_input("Non-finite solver input"));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive spot or strike"));
    }
    if time <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive time to expiry"));
    }
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::invalid_input("Non-positive market price"));
    }

    let (lo, hi) = VOL_BRACKET;
    let mut convergency = SimpleConvergency {
        eps: 1e-12,
        max_iter: 100,
    };

    match find_root_brent(lo, hi, |vol| objective.evaluate(vol), &mut convergency) {
        Ok(vol) => Ok(vol * 100.0),
        Err(SearchError::NoBracketing) => {
            tracing::debug!(
                market_price,
                "no sign change on vol bracket [{lo}, {hi}], market price unattainable"
            );
            Err(PricingError::no_solution(
                "Market price outside the range attainable on the vol bracket",
            ))
        }
        Err(err) => Err(PricingError::no_solution(format!(
            "Root search failed: {err:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::black_scholes::{price_call, price_put};

    #[test]
    fn test_iv_round_trip_call() {
        let market_price = price_call(100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
        let iv = implied_volatility_call(100.0, 100.0, 0.05, 1.0, market_price).unwrap();

        // Percent units
        assert!((iv - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_iv_round_trip_put() {
        let market_price = price_put(100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
        let iv = implied_volatility_put(100.0, 100.0, 0.05, 1.0, market_price).unwrap();

        assert!((iv - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_iv_otm_put() {
        let market_price = price_put(100.0, 90.0, 0.05, 0.25, 0.30).unwrap();
        let iv = implied_volatility_put(100.0, 90.0, 0.05, 0.25, market_price).unwrap();

        assert!((iv - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_iv_high_vol() {
        // Near the top of the bracket
        let market_price = price_call(100.0, 100.0, 0.05, 1.0, 4.5).unwrap();
        let iv = implied_volatility_call(100.0, 100.0, 0.05, 1.0, market_price).unwrap();

        assert!((iv - 450.0).abs() < 0.1);
    }

    #[test]
    fn test_iv_unattainable_price() {
        // Above the vol=500% premium: no root on the bracket, and never
        // a numeric 0
        let result = implied_volatility_call(100.0, 100.0, 0.05, 1.0, 101.0);
        assert!(matches!(result, Err(PricingError::NoSolution(_))));
    }

    #[test]
    fn test_iv_below_intrinsic() {
        // Deep ITM call quoted below its discounted intrinsic value
        let result = implied_volatility_call(100.0, 50.0, 0.05, 1.0, 10.0);
        assert!(matches!(result, Err(PricingError::NoSolution(_))));
    }

    #[test]
    fn test_iv_invalid_inputs() {
        assert!(matches!(
            implied_volatility_call(0.0, 100.0, 0.05, 1.0, 10.0),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_volatility_put(100.0, 100.0, 0.05, -1.0, 10.0),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_volatility_call(100.0, 100.0, 0.05, 1.0, 0.0),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_volatility_call(100.0, 100.0, 0.05, 1.0, f64::NAN),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_objective_sign() {
        let market_price = price_call(100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
        let obj = VolObjective::new(100.0, 100.0, 0.05, 1.0, market_price, OptionType::Call);

        assert!(obj.evaluate(0.01) < 0.0);
        assert!(obj.evaluate(5.0) > 0.0);
        assert!(obj.evaluate(0.20).abs() < 1e-10);
    }
}
