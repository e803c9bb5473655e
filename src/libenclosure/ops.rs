// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Numbers usable as interval bounds.
///
/// The elementary functions (`exp`, `ln`, `sin`, `cos`, `floor`), the infinities and `π` are taken from `num-traits`, so a multi-precision float implementing `Float` and `FloatConst` can replace `f64` without changing the engine.
pub trait Bound : Float + FloatConst + Debug + Display
{
  fn two() -> Self {
    Self::one() + Self::one()
  }

  fn half() -> Self {
    Self::one() / Self::two()
  }

  /// Floored remainder of `self` by `modulus`, the result has the sign of `modulus`.
  fn floor_mod(self, modulus: Self) -> Self {
    self - modulus * (self / modulus).floor()
  }
}

macro_rules! bound_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Bound for $t {}
  )*}
}

bound_impl!(f32, f64);
