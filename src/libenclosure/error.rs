// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failures and non-fatal notices raised by interval operations.
//!
//! Errors abort a single operation and never alter the operands. A domain restriction is not an error: `log` and real powers proceed on the part of the interval inside their natural domain and attach a [`DomainRestriction`] to the returned [`Enclosure`].

use crate::interval::Interval;
use std::fmt::Display;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
  #[error("invalid operand: {0}")]
  InvalidOperand(String),

  #[error("interval {0} in denominator contains 0")]
  DivisionByZeroEnclosure(String),

  #[error("interval {0} < 0, log cannot be computed for negative numbers")]
  LogDomainError(String),

  #[error("interval {0} < 0, a non-integer power cannot be computed for negative numbers")]
  PowDomainError(String),

  #[error("intersection is empty: intervals {0} and {1} are disjoint")]
  EmptyIntersection(String, String),

  #[error("union yields no connected interval: intervals {0} and {1} are disjoint")]
  DisjointUnion(String, String),

  #[error("cannot compute a range over an empty partition")]
  EmptyPartition,

  #[error("internal invariant violated: {0}")]
  InternalInvariantViolation(String),
}

impl IntervalError {
  pub(crate) fn division_by_zero<B: Display>(denominator: &Interval<B>) -> Self {
    IntervalError::DivisionByZeroEnclosure(denominator.to_string())
  }

  pub(crate) fn log_domain<B: Display>(x: &Interval<B>) -> Self {
    IntervalError::LogDomainError(x.to_string())
  }

  pub(crate) fn pow_domain<B: Display>(x: &Interval<B>) -> Self {
    IntervalError::PowDomainError(x.to_string())
  }

  pub(crate) fn empty_intersection<B: Display>(a: &Interval<B>, b: &Interval<B>) -> Self {
    IntervalError::EmptyIntersection(a.to_string(), b.to_string())
  }

  pub(crate) fn disjoint_union<B: Display>(a: &Interval<B>, b: &Interval<B>) -> Self {
    IntervalError::DisjointUnion(a.to_string(), b.to_string())
  }
}

/// The input of a function was cut down to the part lying in its natural domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainRestriction<B>
{
  pub function: &'static str,
  pub input: Interval<B>,
  pub restricted: Interval<B>
}

/// An interval result, possibly computed over a restricted domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enclosure<B>
{
  value: Interval<B>,
  notice: Option<DomainRestriction<B>>
}

impl<B: Copy> Enclosure<B>
{
  pub fn exact(value: Interval<B>) -> Enclosure<B> {
    Enclosure { value, notice: None }
  }

  pub fn restricted(value: Interval<B>, notice: DomainRestriction<B>) -> Enclosure<B> {
    Enclosure { value, notice: Some(notice) }
  }

  pub fn value(&self) -> Interval<B> {
    self.value
  }

  pub fn notice(&self) -> Option<&DomainRestriction<B>> {
    self.notice.as_ref()
  }

  pub fn is_restricted(&self) -> bool {
    self.notice.is_some()
  }

  pub fn into_value(self) -> Interval<B> {
    self.value
  }

  /// Applies `f` to the enclosed value, the notice is kept.
  pub fn map<F>(self, f: F) -> Enclosure<B> where
    F: FnOnce(Interval<B>) -> Interval<B>
  {
    Enclosure { value: f(self.value), notice: self.notice }
  }

  pub fn and_then<F>(self, f: F) -> Result<Enclosure<B>, IntervalError> where
    F: FnOnce(Interval<B>) -> Result<Interval<B>, IntervalError>
  {
    Ok(Enclosure { value: f(self.value)?, notice: self.notice })
  }
}

impl<B: Copy> From<Enclosure<B>> for Interval<B>
{
  fn from(enclosure: Enclosure<B>) -> Interval<B> {
    enclosure.into_value()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_messages() {
    let a = Interval::new(-1.0, 1.0);
    let b = Interval::new(2.0, 3.0);
    assert_eq!(IntervalError::division_by_zero(&a).to_string(),
      "interval [-1, 1] in denominator contains 0");
    assert_eq!(IntervalError::empty_intersection(&a, &b).to_string(),
      "intersection is empty: intervals [-1, 1] and [2, 3] are disjoint");
    assert_eq!(IntervalError::disjoint_union(&a, &b).to_string(),
      "union yields no connected interval: intervals [-1, 1] and [2, 3] are disjoint");
  }

  #[test]
  fn enclosure_keeps_notice() {
    let input = Interval::new(-1.0, 4.0);
    let notice = DomainRestriction {
      function: "log",
      input,
      restricted: Interval::new(0.0, 4.0)
    };
    let e = Enclosure::restricted(Interval::new(0.0, 2.0), notice);
    let doubled = e.map(|x| x + x);
    assert!(doubled.is_restricted());
    assert_eq!(doubled.value(), Interval::new(0.0, 4.0));
    assert_eq!(doubled.notice(), Some(&notice));

    let exact = Enclosure::exact(input);
    assert!(!exact.is_restricted());
    assert_eq!(Interval::from(exact), input);
  }
}
