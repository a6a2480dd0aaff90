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

use crate::cast::checked_cast;
use crate::FractionError;

/// Computes the greatest common divisor of `a` and `b` using the
/// Euclidean algorithm.
///
/// `gcd(0, b)` is `b`, and `gcd(0, 0)` is 0.
///
/// # Examples
///
/// ```rust
/// use rugfrac::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// assert_eq!(gcd(17, 5), 1);
/// ```
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Reduces a numerator and denominator to canonical form.
///
/// The returned denominator is greater than zero, the sign is carried
/// by the numerator, and the two have no common factors. Zero
/// reduces to 0/1.
///
/// # Errors
///
/// Returns [`InvalidDenominator`] if `denom` is zero, and
/// [`ArithmeticOverflow`] if the canonical numerator does not fit in
/// an [`i64`], which only happens for `reduce(i64::MIN, -1)` and
/// similar.
///
/// # Examples
///
/// ```rust
/// use rugfrac::{reduce, FractionError};
/// assert_eq!(reduce(12, -20), Ok((-3, 5)));
/// assert_eq!(reduce(0, -9), Ok((0, 1)));
/// assert_eq!(reduce(5, 0), Err(FractionError::InvalidDenominator));
/// assert_eq!(reduce(i64::MIN, -1), Err(FractionError::ArithmeticOverflow));
/// ```
///
/// [`InvalidDenominator`]: enum.FractionError.html#variant.InvalidDenominator
/// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
/// [`i64`]: https://doc.rust-lang.org/std/primitive.i64.html
pub fn reduce(numer: i64, denom: i64) -> Result<(i64, i64), FractionError> {
    reduce_wide(i128::from(numer), i128::from(denom))
}

// Intermediate results of i64 arithmetic always fit in i128, so the
// reduction happens at full width and only the result is narrowed.
pub(crate) fn reduce_wide(
    numer: i128,
    denom: i128,
) -> Result<(i64, i64), FractionError> {
    if denom == 0 {
        return Err(FractionError::InvalidDenominator);
    }
    let (numer, denom) = if denom < 0 {
        (
            numer.checked_neg().ok_or(FractionError::ArithmeticOverflow)?,
            denom.checked_neg().ok_or(FractionError::ArithmeticOverflow)?,
        )
    } else {
        (numer, denom)
    };
    // denom > 0, so g >= 1 and g <= denom <= i128::MAX
    let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
    narrow(numer / g, denom / g)
}

fn narrow(numer: i128, denom: i128) -> Result<(i64, i64), FractionError> {
    match (checked_cast(numer), checked_cast(denom)) {
        (Some(numer), Some(denom)) => Ok((numer, denom)),
        _ => Err(FractionError::ArithmeticOverflow),
    }
}
