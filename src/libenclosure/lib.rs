// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes a structure for interval arithmetic over real bounds. Every operation returns an *enclosure*: an interval containing the true result of the operation applied pointwise to its operands. Bounds are generic over any type implementing the floating point traits of `num-traits`, `f64` and `f32` being the usual choices.
//!
//! Besides the field operations, intervals support integer and real powers, `exp`, `log`, `sin` and `cos`, set operations (intersection, hull, union) and the componentwise partial order.
//!
//! # Examples
//!
//! ```rust
//! use enclosure::Interval;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(4.0, 3.0); // bounds are reordered.
//! assert_eq!(a + b, Interval::new(4.0, 6.0));
//! assert_eq!(a - b, Interval::new(-3.0, -1.0));
//! assert_eq!(Interval::new(-1.0, 1.0) * Interval::new(-1.0, 1.0), Interval::new(-1.0, 1.0));
//!
//! // The logarithm of an interval touching zero is restricted to the natural domain.
//! let l = Interval::new(-2.0, 5.0).log().unwrap();
//! assert!(l.is_restricted());
//! assert_eq!(l.value().upper(), 5f64.ln());
//! ```
//!
//! # Rounding
//!
//! Bounds are computed with the default rounding of the bound type (round-to-nearest for `f64`). The computed intervals enclose the result up to the last bit of precision but are not guaranteed to be outward rounded.
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * W. Tucker, *Validated Numerics: A Short Introduction to Rigorous Computations*, Princeton University Press, 2011.

#[macro_use]
mod macros;
pub mod ops;
pub mod error;
pub mod interval;
pub mod arithmetic;
pub mod power;
pub mod transcendental;
pub mod trigonometry;
pub mod set_operations;
pub mod partition;
pub mod display;

pub use crate::error::{DomainRestriction, Enclosure, IntervalError};
pub use crate::interval::{Interval, ToInterval};
pub use crate::ops::{Bound, Hull, Whole};
pub use crate::partition::range_enclosure;
pub use crate::transcendental::{exp, log};
pub use crate::trigonometry::{cos, sin};
