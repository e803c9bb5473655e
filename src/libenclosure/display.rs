// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Textual representations of intervals: plain (`Display`), HTML and LaTeX.

use crate::interval::Interval;
use std::fmt::{Display, Error, Formatter};

impl<B: Display> Display for Interval<B>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_fmt(format_args!("[{}, {}]", self.lb, self.ub))
  }
}

impl<B: Display> Interval<B>
{
  /// HTML rendering where infinite bounds are written with `&infin;`.
  pub fn to_html(&self) -> String {
    self.to_string().replace("inf", "&infin;")
  }

  pub fn to_latex(&self) -> String {
    format!("$[{}, {}]$", self.lb, self.ub)
  }
}
