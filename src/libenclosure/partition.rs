// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subdivision of an interval and range enclosure of a function.
//!
//! Evaluating an interval extension of `f` over the pieces of a subdivision and taking the hull of the results usually gives a tighter enclosure of the range of `f` than a single evaluation over the whole interval.
//!
//! ```rust
//! use enclosure::*;
//!
//! let x = Interval::new(-1.0, 1.0);
//! // x * (1 - x) evaluated over the whole interval overestimates the range [-2, 0.25].
//! let f = |x: &Interval<f64>| Ok(*x * (1.0 - *x));
//! let coarse = range_enclosure(f, &x.split(1)?)?;
//! let fine = range_enclosure(f, &x.split(16)?)?;
//! assert!(fine.diam() < coarse.diam());
//! # Ok::<(), IntervalError>(())
//! ```

use crate::error::IntervalError;
use crate::interval::*;
use crate::ops::*;
use num_traits::NumCast;

impl<B: Bound> Interval<B>
{
  /// Splits the interval into `n` pieces of equal width, `n = 0` is treated as 1.
  ///
  /// An interval with an infinite bound has no finite width to divide and is returned as a single piece.
  pub fn split(&self, n: usize) -> Result<Vec<Interval<B>>, IntervalError> {
    let n = n.max(1);
    if n == 1 || !self.diam().is_finite() {
      return Ok(vec![*self]);
    }
    let count = <B as NumCast>::from(n).ok_or_else(||
      IntervalError::InvalidOperand(format!("{} pieces cannot be represented by the bounds of {}", n, self)))?;
    let step = self.diam() / count;
    let mut pieces = Vec::with_capacity(n);
    let mut lower = self.lb;
    for k in 1..=n {
      // The last edge is the upper bound itself so the pieces cover the interval exactly.
      let upper =
        if k == n { self.ub }
        else { self.lb + <B as NumCast>::from(k).unwrap_or(count) * step };
      pieces.push(Interval::new(lower, upper));
      lower = upper;
    }
    Ok(pieces)
  }
}

/// Hull of `f` evaluated over every piece.
pub fn range_enclosure<B, F>(mut f: F, pieces: &[Interval<B>]) -> Result<Interval<B>, IntervalError> where
  B: Bound,
  F: FnMut(&Interval<B>) -> Result<Interval<B>, IntervalError>
{
  let (first, rest) = pieces.split_first().ok_or(IntervalError::EmptyPartition)?;
  let mut range = f(first)?;
  for piece in rest {
    range = range.hull(&f(piece)?);
  }
  Ok(range)
}
