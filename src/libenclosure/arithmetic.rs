// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Field operations on intervals.
//!
//! The right operand of every operator can be an interval or anything implementing [`ToInterval`](../interval/trait.ToInterval.html). Division by an interval whose interior contains zero is not defined and `/` therefore returns a `Result`.

use crate::error::IntervalError;
use crate::interval::*;
use crate::ops::*;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Position of an interval with respect to zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Sign {
  /// `lb >= 0`
  Positive,
  /// `ub <= 0` and `lb < 0`
  Negative,
  /// `lb < 0 < ub`
  Mixed
}

/// Product of two bounds where `0 * inf = 0`.
fn times<B: Bound>(x: B, y: B) -> B {
  if x == B::zero() || y == B::zero() { B::zero() }
  else { x * y }
}

impl<B: Bound> Interval<B>
{
  fn sign(&self) -> Sign {
    if self.lb >= B::zero() { Sign::Positive }
    else if self.ub <= B::zero() { Sign::Negative }
    else { Sign::Mixed }
  }

  /// Multiplication taking the minimum and maximum of the four products of bounds.
  /// It must always agree with `*`, which only computes the products it needs.
  pub fn mul_naive<R: ToInterval<B>>(&self, other: R) -> Interval<B> {
    let other = other.to_interval();
    let products = [
      times(self.lb, other.lb), times(self.lb, other.ub),
      times(self.ub, other.lb), times(self.ub, other.ub)
    ];
    let lb = products.iter().cloned().fold(B::infinity(), B::min);
    let ub = products.iter().cloned().fold(B::neg_infinity(), B::max);
    Interval::new(lb, ub)
  }

  /// `[1/ub, 1/lb]`. A bound equal to zero gives an infinite bound of the matching sign.
  pub fn reciprocal(&self) -> Result<Interval<B>, IntervalError> {
    if self.strictly_contains(&B::zero()) {
      return Err(IntervalError::division_by_zero(self));
    }
    let lb =
      if self.ub == B::zero() { B::neg_infinity() }
      else { B::one() / self.ub };
    let ub =
      if self.lb == B::zero() { B::infinity() }
      else { B::one() / self.lb };
    Ok(Interval::new(lb, ub))
  }
}

impl<B: Bound, R: ToInterval<B>> Add<R> for Interval<B>
{
  type Output = Interval<B>;

  fn add(self, other: R) -> Interval<B> {
    let other = other.to_interval();
    Interval::new(self.lb + other.lb, self.ub + other.ub)
  }
}

impl<B: Bound, R: ToInterval<B>> Sub<R> for Interval<B>
{
  type Output = Interval<B>;

  fn sub(self, other: R) -> Interval<B> {
    let other = other.to_interval();
    Interval::new(self.lb - other.ub, self.ub - other.lb)
  }
}

impl<B: Bound> Neg for Interval<B>
{
  type Output = Interval<B>;

  fn neg(self) -> Interval<B> {
    Interval::new(-self.ub, -self.lb)
  }
}

impl<B: Bound, R: ToInterval<B>> Mul<R> for Interval<B>
{
  type Output = Interval<B>;

  fn mul(self, other: R) -> Interval<B> {
    use self::Sign::*;
    let (a, b) = (self, other.to_interval());
    let (lb, ub) = match (a.sign(), b.sign()) {
      (Positive, Positive) => (times(a.lb, b.lb), times(a.ub, b.ub)),
      (Negative, Negative) => (times(a.ub, b.ub), times(a.lb, b.lb)),
      (Positive, Negative) => (times(a.ub, b.lb), times(a.lb, b.ub)),
      (Negative, Positive) => (times(a.lb, b.ub), times(a.ub, b.lb)),
      (Positive, Mixed) => (times(a.ub, b.lb), times(a.ub, b.ub)),
      (Negative, Mixed) => (times(a.lb, b.ub), times(a.lb, b.lb)),
      (Mixed, Positive) => (times(a.lb, b.ub), times(a.ub, b.ub)),
      (Mixed, Negative) => (times(a.ub, b.lb), times(a.lb, b.lb)),
      (Mixed, Mixed) => (
        times(a.ub, b.lb).min(times(a.lb, b.ub)),
        times(a.lb, b.lb).max(times(a.ub, b.ub))
      )
    };
    Interval::new(lb, ub)
  }
}

impl<B: Bound, R: ToInterval<B>> Div<R> for Interval<B>
{
  type Output = Result<Interval<B>, IntervalError>;

  fn div(self, other: R) -> Result<Interval<B>, IntervalError> {
    Ok(self * other.to_interval().reciprocal()?)
  }
}

scalar_lhs_arith_impl!(f32 => f32, f64 => f64, i32 => f64);

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;

  const inf: f64 = std::f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub)
  }

  #[test]
  fn add_sub_neg() {
    let a = i(1.0, 2.0);
    let b = i(3.0, 4.0);
    assert_eq!(a + b, i(4.0, 6.0));
    assert_eq!(a - b, i(-3.0, -1.0));
    assert_eq!(-a, i(-2.0, -1.0));
    assert_eq!(a + 4.5, i(5.5, 6.5));
    assert_eq!(4.5 + a, i(5.5, 6.5));
    assert_eq!(a - 1.0, i(0.0, 1.0));
    assert_eq!(1.0 - a, i(-1.0, 0.0));
    assert_eq!(a + (0.0, -1.0), i(0.0, 2.0));
  }

  #[test]
  fn mul_agrees_with_naive() {
    // One interval per sign class and per way of touching zero.
    let samples = vec![
      i(0.0, 0.0), i(1.0, 2.0), i(0.0, 3.0), i(-2.0, -1.0), i(-3.0, 0.0),
      i(-1.0, 1.0), i(-4.0, 2.0), i(-0.5, 7.0), i(2.5, 2.5), i(-inf, -1.0)
    ];
    for a in &samples {
      for b in &samples {
        let fast = *a * *b;
        let naive = a.mul_naive(*b);
        assert_eq!(fast, naive, "{} * {}: fast {} but naive {}.", a, b, fast, naive);
        assert_eq!(fast, *b * *a, "{} * {} is not commutative.", a, b);
      }
    }
  }

  #[test]
  fn mul_cases() {
    let cases = vec![
      (1, i(1.0, 2.0), i(3.0, 4.0), i(3.0, 8.0)),
      (2, i(-2.0, -1.0), i(-4.0, -3.0), i(3.0, 8.0)),
      (3, i(1.0, 2.0), i(-4.0, -3.0), i(-8.0, -3.0)),
      (4, i(-2.0, -1.0), i(3.0, 4.0), i(-8.0, -3.0)),
      (5, i(1.0, 2.0), i(-1.0, 3.0), i(-2.0, 6.0)),
      (6, i(-2.0, -1.0), i(-1.0, 3.0), i(-6.0, 2.0)),
      (7, i(-1.0, 3.0), i(1.0, 2.0), i(-2.0, 6.0)),
      (8, i(-1.0, 3.0), i(-2.0, -1.0), i(-6.0, 2.0)),
      (9, i(-1.0, 1.0), i(-1.0, 1.0), i(-1.0, 1.0)),
      (10, i(-2.0, 3.0), i(-5.0, 4.0), i(-15.0, 12.0)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a * b, expected, "test #{} of mul", id);
    }
    assert_eq!(i(1.0, 2.0) * 2.0, i(2.0, 4.0));
    assert_eq!(-2.0 * i(1.0, 2.0), i(-4.0, -2.0));
  }

  #[test]
  fn reciprocal() {
    assert_eq!(i(2.0, 4.0).reciprocal(), Ok(i(0.25, 0.5)));
    assert_eq!(i(-4.0, -2.0).reciprocal(), Ok(i(-0.5, -0.25)));
    assert_eq!(i(0.0, 2.0).reciprocal(), Ok(i(0.5, inf)));
    assert_eq!(i(-2.0, 0.0).reciprocal(), Ok(i(-inf, -0.5)));
    assert!(matches!(i(-1.0, 1.0).reciprocal(), Err(IntervalError::DivisionByZeroEnclosure(_))));
  }

  #[test]
  fn div() {
    assert_eq!(i(1.0, 2.0) / i(2.0, 4.0), Ok(i(0.25, 1.0)));
    assert_eq!(i(1.0, 2.0) / 2.0, Ok(i(0.5, 1.0)));
    assert_eq!(1.0 / i(2.0, 4.0), Ok(i(0.25, 0.5)));
    assert_eq!(i(1.0, 2.0) / i(0.0, 1.0), Ok(i(1.0, inf)));
    assert!(matches!(i(1.0, 2.0) / i(-1.0, 1.0), Err(IntervalError::DivisionByZeroEnclosure(_))));
    assert!(matches!(3.0 / i(-0.5, 2.0), Err(IntervalError::DivisionByZeroEnclosure(_))));
  }

  #[test]
  fn integer_operands() {
    let a = i(1.0, 2.0);
    assert_eq!(a + 2, i(3.0, 4.0));
    assert_eq!(2 + a, i(3.0, 4.0));
    assert_eq!(a - 1, i(0.0, 1.0));
    assert_eq!(3 - a, i(1.0, 2.0));
    assert_eq!(a * -2, i(-4.0, -2.0));
    assert_eq!(2 * a, i(2.0, 4.0));
    assert_eq!(a / 2, Ok(i(0.5, 1.0)));
    assert_eq!(1 / i(2.0, 4.0), Ok(i(0.25, 0.5)));
    assert!(matches!(1 / i(-1.0, 1.0), Err(IntervalError::DivisionByZeroEnclosure(_))));
    assert_eq!(a.mul_naive(3), i(3.0, 6.0));
  }
}
