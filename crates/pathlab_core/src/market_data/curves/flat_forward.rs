//! Flat forward yield curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::types::{Date, DayCountConvention};
use num_traits::Float;

/// Flat forward curve: one continuously-compounded rate for every maturity.
///
/// The curve is anchored to a reference date; its day count maps calendar
/// dates onto the year fractions the models work in.
///
/// # Example
///
/// ```
/// use pathlab_core::market_data::curves::{FlatForward, YieldCurve};
/// use pathlab_core::types::{Date, DayCountConvention};
///
/// let today = Date::from_ymd(2018, 11, 30).unwrap();
/// let curve = FlatForward::new(today, 0.01_f64, DayCountConvention::Actual360);
///
/// assert_eq!(curve.rate(), 0.01);
/// assert_eq!(curve.instantaneous_forward(3.0).unwrap(), 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForward<T: Float> {
    reference_date: Date,
    rate: T,
    day_count: DayCountConvention,
}

impl<T: Float> FlatForward<T> {
    /// Flat curve with the given continuously-compounded rate.
    #[inline]
    pub fn new(reference_date: Date, rate: T, day_count: DayCountConvention) -> Self {
        Self {
            reference_date,
            rate,
            day_count,
        }
    }

    /// The constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Reference (valuation) date.
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Day count used to measure time from the reference date.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Year fraction from the reference date to `date`.
    pub fn time_from_reference(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.reference_date, date)
    }
}

impl<T: Float> YieldCurve<T> for FlatForward<T> {
    /// `D(t) = exp(-r t)`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    fn instantaneous_forward(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }
}
