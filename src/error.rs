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

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// An error returned by a [`Fraction`] operation.
///
/// # Examples
///
/// ```rust
/// use rugfrac::{Fraction, FractionError};
/// assert_eq!(Fraction::new(5, 0), Err(FractionError::InvalidDenominator));
/// let half = Fraction::new(1, 2).unwrap();
/// assert_eq!(
///     half.checked_div(&Fraction::ZERO),
///     Err(FractionError::DivisionByZero)
/// );
/// match "1/2/3".parse::<Fraction>() {
///     Err(FractionError::MalformedFraction(e)) => println!("{}", e),
///     _ => unreachable!(),
/// }
/// ```
///
/// [`Fraction`]: struct.Fraction.html
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FractionError {
    /// The denominator supplied for construction was zero.
    #[error("denominator is zero")]
    InvalidDenominator,
    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A string could not be parsed as a fraction.
    #[error("malformed fraction: {0}")]
    MalformedFraction(#[from] ParseFractionError),
    /// The canonical result does not fit in the storage width.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

/**
An error which can be returned when parsing a [`Fraction`].

See the [`Fraction::parse`] method for details on what strings are
accepted.

# Examples

```rust
use rugfrac::{Fraction, FractionError, ParseFractionError};
// This string is not a fraction.
let s = "something completely different (_!_!_)";
let error: ParseFractionError = match Fraction::parse(s) {
    Err(FractionError::MalformedFraction(error)) => error,
    _ => unreachable!(),
};
println!("Parse error: {}", error);
```

[`Fraction::parse`]: struct.Fraction.html#method.parse
[`Fraction`]: struct.Fraction.html
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFractionError {
    pub(crate) kind: ParseErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseErrorKind {
    InvalidDigit,
    NumerNoDigits,
    DenomNoDigits,
    NoSlash,
    TooManySlashes,
    NumerOutOfRange,
    DenomOutOfRange,
}

impl ParseFractionError {
    fn message(&self) -> &'static str {
        use self::ParseErrorKind::*;
        match self.kind {
            InvalidDigit => "invalid digit found in string",
            NumerNoDigits => "string has no digits for numerator",
            DenomNoDigits => "string has no digits for denominator",
            NoSlash => "no / found in string",
            TooManySlashes => "more than one / found in string",
            NumerOutOfRange => "numerator out of range",
            DenomOutOfRange => "denominator out of range",
        }
    }
}

impl std::error::Error for ParseFractionError {}

impl Display for ParseFractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.message(), f)
    }
}
