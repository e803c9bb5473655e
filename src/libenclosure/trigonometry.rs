// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sine and cosine of an interval.
//!
//! An interval at least as wide as a period, or too far from the origin to be reduced modulo `2π`, is mapped to `[-1, 1]`. Otherwise both bounds are reduced modulo `2π` and classified into the quadrant `floor(x / (π/2)) mod 4` they fall in. The pair of quadrants tells whether the function is monotone between the bounds or which extrema it goes through:
//!
//! | sine quadrants (lb, ub)          | enclosure                     |
//! |----------------------------------|-------------------------------|
//! | same quadrant, no wrap around    | `[f(lb), f(ub)]`              |
//! | same quadrant, wrap around       | `[-1, 1]`                     |
//! | same quadrant, wider than π/2    | `[-1, 1]`                     |
//! | (3,0) (1,2)                      | `[f(lb), f(ub)]`              |
//! | (0,1) (0,2) (3,1) (3,2)          | `[min(f(lb), f(ub)), 1]`      |
//! | (1,3) (1,0) (2,3) (2,0)          | `[-1, max(f(lb), f(ub))]`     |
//! | (0,3) (2,1)                      | `[-1, 1]`                     |
//!
//! Cosine is a sine shifted by a quarter of period, its quadrants are shifted by one before looking up the table.

use crate::error::IntervalError;
use crate::interval::*;
use crate::ops::*;
use log::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Periodic {
  Sin,
  Cos
}

impl Periodic
{
  fn eval<B: Bound>(self, x: B) -> B {
    match self {
      Periodic::Sin => x.sin(),
      Periodic::Cos => x.cos()
    }
  }

  fn phase(self) -> u8 {
    match self {
      Periodic::Sin => 0,
      Periodic::Cos => 1
    }
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape {
  Monotone,
  CrossesMaximum,
  CrossesMinimum,
  FullRange
}

// Quadrants are given in the frame of the sine.
fn shape_between(lb_quadrant: u8, ub_quadrant: u8) -> Option<Shape> {
  use self::Shape::*;
  match (lb_quadrant, ub_quadrant) {
    (3, 0) | (1, 2) => Some(Monotone),
    (0, 1) | (0, 2) | (3, 1) | (3, 2) => Some(CrossesMaximum),
    (1, 3) | (1, 0) | (2, 3) | (2, 0) => Some(CrossesMinimum),
    (0, 3) | (2, 1) => Some(FullRange),
    _ => None
  }
}

// Rounding can leave the floored remainder a hair outside `[0, 2π)`, both ends stand for the origin.
fn reduce<B: Bound>(x: B, two_pi: B) -> B {
  let reduced = x.floor_mod(two_pi);
  if reduced < B::zero() || reduced >= two_pi { B::zero() }
  else { reduced }
}

fn quadrant<B: Bound>(reduced: B, half_pi: B) -> Result<u8, IntervalError> {
  (reduced / half_pi).floor().to_u8()
    .map(|q| q % 4)
    .ok_or_else(|| IntervalError::InternalInvariantViolation(
      format!("{} reduced modulo 2π has no quadrant", reduced)))
}

impl<B: Bound> Interval<B>
{
  pub fn sin(&self) -> Result<Interval<B>, IntervalError> {
    self.periodic_enclosure(Periodic::Sin)
  }

  pub fn cos(&self) -> Result<Interval<B>, IntervalError> {
    self.periodic_enclosure(Periodic::Cos)
  }

  fn periodic_enclosure(&self, f: Periodic) -> Result<Interval<B>, IntervalError> {
    let two_pi = B::two() * B::PI();
    let half_pi = B::FRAC_PI_2();
    // Past `2π / ε` consecutive floats are more than a period apart and the reduction is meaningless.
    let reducible = two_pi / B::epsilon();
    if self.diam() >= two_pi || !(self.mag() < reducible) {
      return Ok(Interval::unit());
    }
    let lb_reduced = reduce(self.lb, two_pi);
    let ub_reduced = reduce(self.ub, two_pi);
    let lb_quadrant = quadrant(lb_reduced, half_pi)?;
    let ub_quadrant = quadrant(ub_reduced, half_pi)?;
    let f_lb = f.eval(self.lb);
    let f_ub = f.eval(self.ub);

    if lb_quadrant == ub_quadrant {
      // Wider than a quadrant, the interval went around the whole period.
      if lb_reduced <= ub_reduced && self.diam() < half_pi {
        Ok(Interval::new(f_lb, f_ub))
      }
      else {
        Ok(Interval::unit())
      }
    }
    else {
      let key = ((lb_quadrant + f.phase()) % 4, (ub_quadrant + f.phase()) % 4);
      let shape = shape_between(key.0, key.1).ok_or_else(||
        IntervalError::InternalInvariantViolation(
          format!("no {:?} case for the quadrants ({}, {}) of {}", f, lb_quadrant, ub_quadrant, self)))?;
      debug!("{:?} of {}: quadrants ({}, {}) give {:?}.", f, self, lb_quadrant, ub_quadrant, shape);
      Ok(match shape {
        Shape::Monotone => Interval::new(f_lb, f_ub),
        Shape::CrossesMaximum => Interval::new(f_lb.min(f_ub), B::one()),
        Shape::CrossesMinimum => Interval::new(-B::one(), f_lb.max(f_ub)),
        Shape::FullRange => Interval::unit()
      })
    }
  }
}

pub fn sin<B: Bound>(x: &Interval<B>) -> Result<Interval<B>, IntervalError> {
  x.sin()
}

pub fn cos<B: Bound>(x: &Interval<B>) -> Result<Interval<B>, IntervalError> {
  x.cos()
}

#[cfg(test)]
mod tests {
  use super::*;
  use gcollections::ops::Contains;
  use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
  use test_log::test;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub)
  }

  fn assert_close(id: &str, res: Interval<f64>, expected: Interval<f64>) {
    assert!((res.lb - expected.lb).abs() < 1e-12 && (res.ub - expected.ub).abs() < 1e-12,
      "{}: {} instead of {}.", id, res, expected);
  }

  #[test]
  fn full_period_collapse() {
    let exact_periods = vec![
      i(0.0, 7.0), i(-10.0, 10.0), i(1.0, 1.0 + 2.0 * PI + 1e-9), i(0.0, std::f64::INFINITY),
      i(0.0, 2.0 * PI), i(1.0, 1.0 + 2.0 * PI), i(-PI, PI), i(0.2, 0.1 + 2.0 * PI)
    ];
    for x in exact_periods {
      assert_eq!(x.sin(), Ok(i(-1.0, 1.0)));
      assert_eq!(x.cos(), Ok(i(-1.0, 1.0)));
    }
  }

  #[test]
  fn far_from_origin() {
    let cases = vec![
      i(3e22, 3e22), i(-3e22, -3e22), i(1e17, 1e17 + 16.0),
      i(std::f64::INFINITY, std::f64::INFINITY), i(std::f64::NEG_INFINITY, 0.0)
    ];
    for x in cases {
      assert_eq!(x.sin(), Ok(i(-1.0, 1.0)), "sin of {}", x);
      assert_eq!(x.cos(), Ok(i(-1.0, 1.0)), "cos of {}", x);
    }
    // Still reducible: a thin interval gives a tight enclosure.
    let x = i(1e6, 1e6);
    assert_close("sin of 1e6", x.sin().unwrap(), i(1e6f64.sin(), 1e6f64.sin()));
  }

  #[test]
  fn reduction_stays_in_one_period() {
    let two_pi = 2.0 * PI;
    for &x in &[-1e-17, -two_pi, two_pi, 4.0 * PI, -1e15 - 0.5, 1e15 + 0.25, 0.0] {
      let r = reduce(x, two_pi);
      assert!(r >= 0.0 && r < two_pi, "{} reduced to {}.", x, r);
      assert!(quadrant(r, FRAC_PI_2).is_ok());
    }
  }

  #[test]
  fn sin_cases() {
    let s = |x: f64| x.sin();
    let cases = vec![
      (1, i(0.1, FRAC_PI_4), i(s(0.1), s(FRAC_PI_4))),
      (2, i(FRAC_PI_2 + 0.1, PI - 0.1), i(s(PI - 0.1), s(FRAC_PI_2 + 0.1))),
      (3, i(-FRAC_PI_4, FRAC_PI_4), i(s(-FRAC_PI_4), s(FRAC_PI_4))),
      (4, i(3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4), i(s(5.0 * FRAC_PI_4), s(3.0 * FRAC_PI_4))),
      (5, i(FRAC_PI_4, 3.0 * FRAC_PI_4), i(s(FRAC_PI_4).min(s(3.0 * FRAC_PI_4)), 1.0)),
      (6, i(FRAC_PI_4, 5.0 * FRAC_PI_4), i(s(5.0 * FRAC_PI_4), 1.0)),
      (7, i(3.0 * FRAC_PI_4, 7.0 * FRAC_PI_4), i(-1.0, s(3.0 * FRAC_PI_4))),
      (8, i(5.0 * FRAC_PI_4, 9.0 * FRAC_PI_4), i(-1.0, s(9.0 * FRAC_PI_4))),
      (9, i(FRAC_PI_4, 7.0 * FRAC_PI_4), i(-1.0, 1.0)),
      (10, i(5.0 * FRAC_PI_4, 11.0 * FRAC_PI_4), i(-1.0, 1.0)),
      // Same quadrant after a wrap around.
      (11, i(0.1, 0.05 + 2.0 * PI), i(-1.0, 1.0)),
    ];
    for (id, x, expected) in cases {
      assert_close(&format!("test #{} of sin", id), sin(&x).unwrap(), expected);
    }
  }

  #[test]
  fn cos_cases() {
    let c = |x: f64| x.cos();
    let cases = vec![
      (1, i(0.1, FRAC_PI_4), i(c(FRAC_PI_4), c(0.1))),
      (2, i(FRAC_PI_4, 3.0 * FRAC_PI_4), i(c(3.0 * FRAC_PI_4), c(FRAC_PI_4))),
      (3, i(5.0 * FRAC_PI_4, 7.0 * FRAC_PI_4), i(c(5.0 * FRAC_PI_4), c(7.0 * FRAC_PI_4))),
      (4, i(-FRAC_PI_4, FRAC_PI_4), i(c(-FRAC_PI_4).min(c(FRAC_PI_4)), 1.0)),
      (5, i(FRAC_PI_4, 5.0 * FRAC_PI_4), i(-1.0, c(FRAC_PI_4))),
      (6, i(3.0 * FRAC_PI_4, 9.0 * FRAC_PI_4), i(-1.0, 1.0)),
      (7, i(7.0 * FRAC_PI_4, 13.0 * FRAC_PI_4), i(-1.0, 1.0)),
    ];
    for (id, x, expected) in cases {
      assert_close(&format!("test #{} of cos", id), cos(&x).unwrap(), expected);
    }
  }

  #[test]
  fn encloses_sampled_values() {
    let mut lb = -7.0;
    while lb < 7.0 {
      let mut width = 0.05;
      while width < 6.2 {
        let x = i(lb, lb + width);
        let sin_x = x.sin().unwrap();
        let cos_x = x.cos().unwrap();
        for k in 0..=100 {
          let p = lb + width * (k as f64) / 100.0;
          for (res, v) in vec![(sin_x, p.sin()), (cos_x, p.cos())] {
            let widened = i(res.lb - 1e-12, res.ub + 1e-12);
            assert!(widened.contains(&v), "{} does not contain f({}) = {} for x = {}.", res, p, v, x);
          }
        }
        width += 0.41;
      }
      lb += 0.37;
    }
  }

  #[test]
  fn shape_table_is_complete() {
    let mut enumerated = 0;
    for lb in 0..4 {
      for ub in 0..4 {
        match shape_between(lb, ub) {
          Some(_) => { assert_ne!(lb, ub); enumerated += 1; }
          None => assert_eq!(lb, ub)
        }
      }
    }
    assert_eq!(enumerated, 12);
  }
}
