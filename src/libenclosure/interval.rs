// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed and bounded real interval.
//!
//! An interval `[lb, ub]` always satisfies `lb <= ub`: bounds given in the wrong order are swapped at construction. Intervals are immutable `Copy` values, every operation builds a new interval.
//!
//! Scalars are coerced to thin intervals `[x, x]` through [`ToInterval`], so that binary operations accept an interval or a number as right operand.
//!
//! # Examples
//!
//! ```rust
//! use enclosure::*;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(2.0, -3.0);
//! assert_eq!(a, Interval::new(-3.0, 2.0));
//! assert_eq!(a.mag(), 3.0);
//! assert_eq!(a.mig(), 0.0);
//! assert!(a.contains(&0.0));
//! assert!(Interval::new(1.0, 2.0) <= Interval::new(1.5, 2.0));
//! ```

use crate::error::IntervalError;
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::{Bounded, Contains, Disjoint, Overlap, Singleton};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;
use trilean::SKleene;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval<B>
{
  pub(crate) lb: B,
  pub(crate) ub: B
}

impl<B: Bound> Interval<B>
{
  pub fn new(lb: B, ub: B) -> Interval<B> {
    if ub < lb {
      Interval { lb: ub, ub: lb }
    }
    else {
      Interval { lb, ub }
    }
  }

  /// Same as `new` but fails with `InvalidOperand` if one of the bounds is not a number.
  pub fn try_new(lb: B, ub: B) -> Result<Interval<B>, IntervalError> {
    if lb.is_nan() || ub.is_nan() {
      Err(IntervalError::InvalidOperand(format!("[{}, {}] has a NaN bound", lb, ub)))
    }
    else {
      Ok(Interval::new(lb, ub))
    }
  }

  pub fn is_thin(&self) -> bool {
    self.lb == self.ub
  }

  pub fn diam(&self) -> B {
    self.ub - self.lb
  }

  pub fn centre(&self) -> B {
    B::half() * (self.lb + self.ub)
  }

  /// Magnitude: the largest distance from a point of the interval to the origin.
  pub fn mag(&self) -> B {
    self.lb.abs().max(self.ub.abs())
  }

  /// Mignitude: the smallest distance from a point of the interval to the origin.
  pub fn mig(&self) -> B {
    if self.contains(&B::zero()) {
      B::zero()
    }
    else {
      self.lb.abs().min(self.ub.abs())
    }
  }

  /// Absolute value, this is the magnitude.
  pub fn abs(&self) -> B {
    self.mag()
  }

  pub fn strictly_contains(&self, value: &B) -> bool {
    self.lb < *value && *value < self.ub
  }

  /// Both bounds of `self` are strictly below the ones of `other`.
  pub fn strictly_less<R: ToInterval<B>>(&self, other: R) -> bool {
    let other = other.to_interval();
    self.lb < other.lb && self.ub < other.ub
  }

  /// Both bounds of `self` are strictly above the ones of `other`.
  pub fn strictly_greater<R: ToInterval<B>>(&self, other: R) -> bool {
    let other = other.to_interval();
    self.lb > other.lb && self.ub > other.ub
  }

  /// Is every point of `self` less than every point of `other`?
  /// `Unknown` when the answer depends on which points are picked.
  pub fn certainly_less<R: ToInterval<B>>(&self, other: R) -> SKleene {
    let other = other.to_interval();
    if self.ub < other.lb {
      SKleene::True
    }
    else if self.lb >= other.ub {
      SKleene::False
    }
    else {
      SKleene::Unknown
    }
  }

  /// `[0, +inf]`, the natural domain of `log` and real powers.
  pub(crate) fn non_negative() -> Interval<B> {
    Interval::new(B::zero(), B::infinity())
  }

  pub(crate) fn unit() -> Interval<B> {
    Interval::new(-B::one(), B::one())
  }
}

impl<B> Collection for Interval<B>
{
  type Item = B;
}

impl<B: Bound> Bounded for Interval<B>
{
  fn lower(&self) -> B {
    self.lb
  }

  fn upper(&self) -> B {
    self.ub
  }
}

impl<B: Bound> Singleton for Interval<B>
{
  fn singleton(x: B) -> Interval<B> {
    Interval::new(x, x)
  }
}

impl<B: Bound> Whole for Interval<B>
{
  fn whole() -> Interval<B> {
    Interval::new(B::neg_infinity(), B::infinity())
  }
}

impl<B: Bound> Contains for Interval<B>
{
  fn contains(&self, value: &B) -> bool {
    self.lb <= *value && *value <= self.ub
  }
}

impl<B: Bound> Disjoint for Interval<B>
{
  fn is_disjoint(&self, other: &Interval<B>) -> bool {
    self.ub < other.lb || other.ub < self.lb
  }
}

impl<B: Bound> Overlap for Interval<B>
{
  fn overlap(&self, other: &Interval<B>) -> bool {
    !self.is_disjoint(other)
  }
}

/// Kulisch-Moore partial order: `a <= b` iff `a.lb <= b.lb` and `a.ub <= b.ub`.
/// Overlapping intervals where one is not shifted from the other are incomparable.
///
/// `a < b` holds when `a <= b` and `a != b`, so `[1, 2] < [1, 3]` although the lower bounds are equal.
/// Use [`strictly_less`](struct.Interval.html#method.strictly_less) and [`strictly_greater`](struct.Interval.html#method.strictly_greater) when both bounds must differ.
impl<B: Bound> PartialOrd for Interval<B>
{
  fn partial_cmp(&self, other: &Interval<B>) -> Option<Ordering> {
    if self == other {
      Some(Ordering::Equal)
    }
    else if self.lb <= other.lb && self.ub <= other.ub {
      Some(Ordering::Less)
    }
    else if self.lb >= other.lb && self.ub >= other.ub {
      Some(Ordering::Greater)
    }
    else {
      None
    }
  }
}

pub trait ToInterval<B>
{
  fn to_interval(self) -> Interval<B>;
}

impl<B> ToInterval<B> for Interval<B>
{
  fn to_interval(self) -> Interval<B> { self }
}

impl<B: Bound> ToInterval<B> for (B, B)
{
  fn to_interval(self) -> Interval<B> {
    let (a, b) = self;
    Interval::new(a, b)
  }
}

scalar_to_interval_impl!(f32, f64);
int_to_interval_impl!(i32 => f64);

impl<B: Bound> FromStr for Interval<B>
{
  type Err = IntervalError;

  /// Parses `x`, `[x, y]` or `[x,y]`.
  fn from_str(s: &str) -> Result<Interval<B>, IntervalError> {
    let invalid = || IntervalError::InvalidOperand(format!("`{}` is not an interval", s));
    let parse_bound = |b: &str| B::from_str_radix(b.trim(), 10).map_err(|_| invalid());
    let s = s.trim();
    let (lb, ub) =
      if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        let mut bounds = inner.split(',');
        match (bounds.next(), bounds.next(), bounds.next()) {
          (Some(lb), Some(ub), None) => (parse_bound(lb)?, parse_bound(ub)?),
          _ => return Err(invalid())
        }
      }
      else {
        let x = parse_bound(s)?;
        (x, x)
      };
    Interval::try_new(lb, ub).map_err(|_| invalid())
  }
}

impl<B: Serialize> Serialize for Interval<B>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    (&self.lb, &self.ub).serialize(serializer)
  }
}

impl<'de, B> Deserialize<'de> for Interval<B> where
  B: Bound + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<B>, D::Error> where
    D: Deserializer<'de>
  {
    let (lb, ub) = <(B, B)>::deserialize(deserializer)?;
    Ok(Interval::new(lb, ub))
  }
}
