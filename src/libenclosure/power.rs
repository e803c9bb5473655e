// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Powers of an interval by an integer, a real or an interval.
//!
//! ```rust
//! use enclosure::Interval;
//! use num_traits::Pow;
//!
//! let a: Interval<f64> = Interval::new(-1.0, 1.0);
//! assert_eq!(a.pow(2), Ok(Interval::new(0.0, 1.0)));
//! assert_eq!(a.pow(3), Ok(Interval::new(-1.0, 1.0)));
//!
//! // Non-integer powers are only defined on the non-negative reals.
//! let b = a.pow(2.5).unwrap();
//! assert!(b.is_restricted());
//! assert_eq!(b.value(), Interval::new(0.0, 1.0));
//! ```

use crate::error::*;
use crate::interval::*;
use crate::ops::*;
use gcollections::ops::{Contains, Singleton};
use log::warn;
use num_integer::Integer;
use num_traits::Pow;

impl<B: Bound> Interval<B>
{
  // Even powers reach their minimum at the point nearest to zero and their maximum at the farthest one, odd powers are monotone.
  fn pow_natural(&self, n: usize) -> Interval<B> {
    if n.is_even() {
      Interval::new(num_traits::pow(self.mig(), n), num_traits::pow(self.mag(), n))
    }
    else {
      Interval::new(num_traits::pow(self.lb, n), num_traits::pow(self.ub, n))
    }
  }

  // Integral exponent `n >= 0` stored in the bound type, possibly too large for `usize`.
  fn pow_integral(&self, n: B) -> Interval<B> {
    match n.to_usize() {
      Some(n) => self.pow_natural(n),
      None => {
        let even = (n / B::two()).fract() == B::zero();
        if even {
          Interval::new(self.mig().powf(n), self.mag().powf(n))
        }
        else {
          Interval::new(self.lb.powf(n), self.ub.powf(n))
        }
      }
    }
  }

  pub fn powi(&self, n: i32) -> Result<Interval<B>, IntervalError> {
    let power = self.pow_natural(n.unsigned_abs() as usize);
    if n < 0 { power.reciprocal() }
    else { Ok(power) }
  }

  /// Power by a real exponent. Integral exponents are handled as in `powi`.
  ///
  /// For other exponents, an interval containing 0 is restricted to `[0, inf]` and the lower bound of the result is 0. It fails with `PowDomainError` if the interval lies below 0.
  pub fn powf(&self, exponent: B) -> Result<Enclosure<B>, IntervalError> {
    if exponent.is_nan() {
      return Err(IntervalError::InvalidOperand(format!("{} is not a valid exponent", exponent)));
    }
    if exponent.fract() == B::zero() {
      let power = self.pow_integral(exponent.abs());
      return
        if exponent < B::zero() { Ok(Enclosure::exact(power.reciprocal()?)) }
        else { Ok(Enclosure::exact(power)) };
    }
    if exponent < B::zero() {
      self.powf(-exponent)?.and_then(|power| power.reciprocal())
    }
    else if self.ub < B::zero() {
      Err(IntervalError::pow_domain(self))
    }
    else if self.contains(&B::zero()) {
      let restricted = self.intersection(Interval::non_negative())?;
      warn!("Interval {} contains 0, restricting ** to the intersection with its natural domain: {}.",
        self, restricted);
      let value = Interval::new(B::zero(), self.ub.powf(exponent));
      Ok(Enclosure::restricted(value, DomainRestriction {
        function: "pow",
        input: *self,
        restricted
      }))
    }
    else {
      Ok(Enclosure::exact(Interval::new(self.lb.powf(exponent), self.ub.powf(exponent))))
    }
  }

  /// Power by an interval exponent, computed as `exp(exponent * log(self))` unless the exponent is thin.
  pub fn pow_interval(&self, exponent: &Interval<B>) -> Result<Enclosure<B>, IntervalError> {
    if exponent.is_thin() {
      self.powf(exponent.lb)
    }
    else {
      Ok(self.log()?.map(|log| (*exponent * log).exp()))
    }
  }

  /// `base ** exponent` for a scalar base.
  pub fn scalar_pow(base: B, exponent: &Interval<B>) -> Result<Enclosure<B>, IntervalError> {
    Interval::singleton(base).pow_interval(exponent)
  }
}

impl<B: Bound> Pow<i32> for Interval<B>
{
  type Output = Result<Interval<B>, IntervalError>;

  fn pow(self, n: i32) -> Self::Output {
    self.powi(n)
  }
}

impl<B: Bound> Pow<Interval<B>> for Interval<B>
{
  type Output = Result<Enclosure<B>, IntervalError>;

  fn pow(self, exponent: Interval<B>) -> Self::Output {
    self.pow_interval(&exponent)
  }
}

macro_rules! real_pow_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Pow<$t> for Interval<$t>
    {
      type Output = Result<Enclosure<$t>, IntervalError>;

      fn pow(self, exponent: $t) -> Self::Output {
        self.powf(exponent)
      }
    }
  )*}
}

real_pow_impl!(f32, f64);
