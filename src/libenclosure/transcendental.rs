// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exponential and natural logarithm.

use crate::error::*;
use crate::interval::*;
use crate::ops::*;
use gcollections::ops::Contains;
use log::warn;

impl<B: Bound> Interval<B>
{
  pub fn exp(&self) -> Interval<B> {
    Interval::new(self.lb.exp(), self.ub.exp())
  }

  /// Natural logarithm.
  ///
  /// An interval containing 0 is intersected with `[0, inf]` beforehand, the result then has `-inf` as lower bound and carries a `DomainRestriction`. It fails with `LogDomainError` if the interval lies below 0.
  pub fn log(&self) -> Result<Enclosure<B>, IntervalError> {
    if self.ub < B::zero() {
      Err(IntervalError::log_domain(self))
    }
    else if self.contains(&B::zero()) {
      let restricted = self.intersection(Interval::non_negative())?;
      warn!("Interval {} contains 0, restricting log to the intersection with its natural domain: {}.",
        self, restricted);
      let value = Interval::new(restricted.lb.ln(), restricted.ub.ln());
      Ok(Enclosure::restricted(value, DomainRestriction {
        function: "log",
        input: *self,
        restricted
      }))
    }
    else {
      Ok(Enclosure::exact(Interval::new(self.lb.ln(), self.ub.ln())))
    }
  }
}

pub fn exp<B: Bound>(x: &Interval<B>) -> Interval<B> {
  x.exp()
}

pub fn log<B: Bound>(x: &Interval<B>) -> Result<Enclosure<B>, IntervalError> {
  x.log()
}
