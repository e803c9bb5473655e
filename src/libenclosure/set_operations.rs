// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Intervals seen as sets of reals.
//!
//! The intersection and the union of two intervals are intervals only when they overlap, disjoint operands are reported with `EmptyIntersection` and `DisjointUnion`. The hull is always defined.

use crate::error::IntervalError;
use crate::interval::*;
use crate::ops::*;
use gcollections::ops::Disjoint;
use log::debug;

impl<B: Bound> Interval<B>
{
  pub fn intersection<R: ToInterval<B>>(&self, other: R) -> Result<Interval<B>, IntervalError> {
    let other = other.to_interval();
    if self.is_disjoint(&other) {
      debug!("Intersection is empty: intervals {} and {} are disjoint.", self, other);
      Err(IntervalError::empty_intersection(self, &other))
    }
    else {
      Ok(Interval::new(self.lb.max(other.lb), self.ub.min(other.ub)))
    }
  }

  /// Union of two overlapping intervals, this is their hull.
  pub fn union<R: ToInterval<B>>(&self, other: R) -> Result<Interval<B>, IntervalError> {
    let other = other.to_interval();
    if self.is_disjoint(&other) {
      debug!("Union yields no connected interval: intervals {} and {} are disjoint.", self, other);
      Err(IntervalError::disjoint_union(self, &other))
    }
    else {
      Ok(self.hull(&other))
    }
  }
}

impl<B: Bound> Hull for Interval<B>
{
  type Output = Interval<B>;

  fn hull(&self, other: &Interval<B>) -> Interval<B> {
    Interval::new(self.lb.min(other.lb), self.ub.max(other.ub))
  }
}

impl<B: Bound> Hull<B> for Interval<B>
{
  type Output = Interval<B>;

  fn hull(&self, value: &B) -> Interval<B> {
    Interval::new(self.lb.min(*value), self.ub.max(*value))
  }
}
