// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

//! # Exact fixed-width fractions
//!
//! The `rugfrac` crate provides the [`Fraction`] type, an exact
//! rational number stored as a pair of [`i64`] values. A `Fraction`
//! is always in canonical form: the denominator is greater than zero
//! and the numerator and denominator have no common factors. Zero is
//! stored as 0/1.
//!
//! This crate is free software: you can redistribute it and/or modify
//! it under the terms of the GNU Lesser General Public License as
//! published by the Free Software Foundation, either version 3 of the
//! License, or (at your option) any later version.
//!
//! # Basic use
//!
//! ```rust
//! use rugfrac::Fraction;
//!
//! let half = Fraction::new(1, 2).unwrap();
//! let third = Fraction::new(1, 3).unwrap();
//! assert_eq!(half + third, (5, 6));
//! assert_eq!(half / third, (3, 2));
//! assert_eq!(Fraction::new(7, 2).unwrap() - 3, (1, 2));
//! ```
//!
//! Every operation has a fallible `checked_` form returning a
//! [`Result`]; the operators panic where the `checked_` form would
//! return an error.
//!
//! ```rust
//! use rugfrac::{Fraction, FractionError};
//!
//! fn chain(f1: &Fraction, f2: &Fraction, f3: &Fraction)
//!     -> Result<Fraction, FractionError>
//! {
//!     f1.checked_add(f2)?.checked_div(f3)?.checked_sub_int(5)
//! }
//!
//! let f1 = Fraction::new(1, 2)?;
//! let f2 = Fraction::new(1, 4)?;
//! let f3 = Fraction::new(3, 8)?;
//! assert_eq!(chain(&f1, &f2, &f3)?, (-3, 1));
//! let zero = Fraction::ZERO;
//! assert_eq!(chain(&f1, &f2, &zero), Err(FractionError::DivisionByZero));
//! # Ok::<(), FractionError>(())
//! ```
//!
//! # Equality policies
//!
//! The `==` operator on two fractions compares the canonical pairs
//! directly. The [`policy`] module also provides equality by
//! cross-multiplication, both as functions and as types that can be
//! used to key hash maps.
//!
//! ```rust
//! use rugfrac::policy::Equality;
//! use rugfrac::Fraction;
//!
//! let a = Fraction::new(3, -4).unwrap();
//! let b = Fraction::new(-6, 8).unwrap();
//! assert!(a.eq_structural(&b));
//! assert!(a.eq_cross(&b));
//! assert!(Equality::CrossMultiply.equal(&a, &b));
//! // raw pairs need not be normalized
//! assert_eq!(a, (6, -8));
//! ```
//!
//! # Optional features
//!
//!   * `serde`, enabled by default, implements [`Serialize`] and
//!     [`Deserialize`] using the "numerator/denominator" text form.
//!
//! [`Fraction`]: struct.Fraction.html
//! [`policy`]: policy/index.html
//! [`i64`]: https://doc.rust-lang.org/std/primitive.i64.html
//! [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
//! [`Serialize`]: https://docs.rs/serde/1/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/1/serde/trait.Deserialize.html

#![warn(missing_docs)]

#[macro_use]
mod macros;
mod cast;
mod error;
mod fraction;
mod reduce;

pub use crate::error::{FractionError, ParseFractionError};
pub use crate::fraction::policy;
pub use crate::fraction::Fraction;
pub use crate::reduce::{gcd, reduce};
