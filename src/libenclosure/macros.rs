// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Coercion of a primitive float into a thin interval, and comparisons between an interval and such a scalar.
macro_rules! scalar_to_interval_impl {
  ( $( $t: ty ),* ) =>
  {$(
    impl $crate::interval::ToInterval<$t> for $t
    {
      fn to_interval(self) -> $crate::interval::Interval<$t> {
        $crate::interval::Interval::new(self, self)
      }
    }

    impl PartialEq<$t> for $crate::interval::Interval<$t>
    {
      fn eq(&self, other: &$t) -> bool {
        self.lb == *other && self.ub == *other
      }
    }

    impl PartialEq<$crate::interval::Interval<$t>> for $t
    {
      fn eq(&self, other: &$crate::interval::Interval<$t>) -> bool {
        other == self
      }
    }

    impl PartialOrd<$t> for $crate::interval::Interval<$t>
    {
      fn partial_cmp(&self, other: &$t) -> Option<::std::cmp::Ordering> {
        let other = $crate::interval::Interval::new(*other, *other);
        self.partial_cmp(&other)
      }
    }

    impl PartialOrd<$crate::interval::Interval<$t>> for $t
    {
      fn partial_cmp(&self, other: &$crate::interval::Interval<$t>) -> Option<::std::cmp::Ordering> {
        other.partial_cmp(self).map(::std::cmp::Ordering::reverse)
      }
    }
  )*}
}

// Coercion of an integer into a thin interval over the float type `$b`.
macro_rules! int_to_interval_impl {
  ( $( $t: ty => $b: ty ),* ) =>
  {$(
    impl $crate::interval::ToInterval<$b> for $t
    {
      fn to_interval(self) -> $crate::interval::Interval<$b> {
        $crate::interval::Interval::new(self as $b, self as $b)
      }
    }
  )*}
}

// Arithmetic with a scalar of type `$t` as left operand of an `Interval<$b>`: `x + i`, `x - i`, `x * i` and `x / i`.
macro_rules! scalar_lhs_arith_impl {
  ( $( $t: ty => $b: ty ),* ) =>
  {$(
    impl ::std::ops::Add<$crate::interval::Interval<$b>> for $t
    {
      type Output = $crate::interval::Interval<$b>;

      fn add(self, other: $crate::interval::Interval<$b>) -> $crate::interval::Interval<$b> {
        other + self
      }
    }

    impl ::std::ops::Sub<$crate::interval::Interval<$b>> for $t
    {
      type Output = $crate::interval::Interval<$b>;

      fn sub(self, other: $crate::interval::Interval<$b>) -> $crate::interval::Interval<$b> {
        <$t as $crate::interval::ToInterval<$b>>::to_interval(self) - other
      }
    }

    impl ::std::ops::Mul<$crate::interval::Interval<$b>> for $t
    {
      type Output = $crate::interval::Interval<$b>;

      fn mul(self, other: $crate::interval::Interval<$b>) -> $crate::interval::Interval<$b> {
        other * self
      }
    }

    impl ::std::ops::Div<$crate::interval::Interval<$b>> for $t
    {
      type Output = Result<$crate::interval::Interval<$b>, $crate::error::IntervalError>;

      fn div(self, other: $crate::interval::Interval<$b>) -> Self::Output {
        <$t as $crate::interval::ToInterval<$b>>::to_interval(self) / other
      }
    }
  )*}
}
