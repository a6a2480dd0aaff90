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
use crate::reduce;
use crate::FractionError;

/**
An exact rational number with [`i64`] numerator and denominator.

A `Fraction` is always in canonical form, that is the denominator is
always greater than zero, and there are no common factors. Zero is
stored as 0/1. There is no way to construct a `Fraction` that is not
in canonical form, and no operation modifies a `Fraction` in place
except the compound assignment operators, which replace it with a
freshly reduced value.

# Examples

```rust
use rugfrac::Fraction;
let r = Fraction::new(-12, 15).unwrap();
assert_eq!(r, (-4, 5));
assert_eq!(r.to_f32(), -0.8);
// The numerator and denominator are stored in canonical form.
let (num, den) = r.into_numer_denom();
assert_eq!(num, -4);
assert_eq!(den, 5);
```

Arithmetic is exact. Intermediate values are computed at double
width, so an operation only fails if its reduced result does not fit
in an [`i64`].

```rust
use rugfrac::{Fraction, FractionError};
let big = Fraction::from_integer(i64::MAX);
let half_big = Fraction::new(i64::MAX, 2)?;
// the raw product is (i64::MAX * 2)/2, which reduces to i64::MAX/1
assert_eq!(half_big.checked_mul(&Fraction::from_integer(2))?, big);
assert_eq!(big.checked_add(&big), Err(FractionError::ArithmeticOverflow));
# Ok::<(), FractionError>(())
```

[`i64`]: https://doc.rust-lang.org/std/primitive.i64.html
*/
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// The fraction 0/1.
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    /// The fraction 1/1.
    pub const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// Creates a new [`Fraction`] from a numerator and denominator,
    /// reducing it to canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDenominator`] if `denom` is zero, and
    /// [`ArithmeticOverflow`] if the canonical form does not fit, as
    /// for `Fraction::new(i64::MIN, -1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::{Fraction, FractionError};
    /// let r = Fraction::new(3, -4).unwrap();
    /// assert_eq!(r.numer(), -3);
    /// assert_eq!(r.denom(), 4);
    /// assert_eq!(Fraction::new(5, 0), Err(FractionError::InvalidDenominator));
    /// ```
    ///
    /// [`Fraction`]: struct.Fraction.html
    /// [`InvalidDenominator`]: enum.FractionError.html#variant.InvalidDenominator
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    #[inline]
    pub fn new(numer: i64, denom: i64) -> Result<Self, FractionError> {
        let (numer, denom) = reduce::reduce(numer, denom)?;
        Ok(Fraction { numer, denom })
    }

    /// Creates a [`Fraction`] with the value `n`/1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let r = Fraction::from_integer(-7);
    /// assert_eq!(r, (-7, 1));
    /// assert_eq!(r.to_string(), "-7/1");
    /// ```
    ///
    /// [`Fraction`]: struct.Fraction.html
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Fraction { numer: n, denom: 1 }
    }

    // Builds the canonical result of an operation from its widened raw
    // pair.
    #[inline]
    pub(crate) fn from_wide(
        numer: i128,
        denom: i128,
    ) -> Result<Self, FractionError> {
        let (numer, denom) = reduce::reduce_wide(numer, denom)?;
        Ok(Fraction { numer, denom })
    }

    /// Returns the numerator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let r = Fraction::new(12, -20).unwrap();
    /// // r is canonicalized to -3/5
    /// assert_eq!(r.numer(), -3);
    /// ```
    #[inline]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    /// Returns the denominator, which is always positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let r = Fraction::new(12, -20).unwrap();
    /// // r is canonicalized to -3/5
    /// assert_eq!(r.denom(), 5);
    /// ```
    #[inline]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Converts into a numerator and denominator pair.
    #[inline]
    pub const fn into_numer_denom(self) -> (i64, i64) {
        (self.numer, self.denom)
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Returns `true` if the denominator is 1.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Converts to an [`i32`], truncating toward zero, if the
    /// truncated value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// assert_eq!(Fraction::new(7, 2).unwrap().to_i32(), Some(3));
    /// assert_eq!(Fraction::new(-7, 2).unwrap().to_i32(), Some(-3));
    /// let large = Fraction::from_integer(1 << 40);
    /// assert_eq!(large.to_i32(), None);
    /// ```
    ///
    /// [`i32`]: https://doc.rust-lang.org/std/primitive.i32.html
    #[inline]
    pub fn to_i32(&self) -> Option<i32> {
        checked_cast(self.to_i64())
    }

    /// Converts to an [`i32`], truncating toward zero and wrapping
    /// if the truncated value does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let large = Fraction::new(0x1_2345_6789 * 2 + 1, 2).unwrap();
    /// assert_eq!(large.to_i32_wrapping(), 0x2345_6789);
    /// ```
    ///
    /// [`i32`]: https://doc.rust-lang.org/std/primitive.i32.html
    #[inline]
    pub fn to_i32_wrapping(&self) -> i32 {
        self.to_i64() as i32
    }

    /// Converts to an [`i64`], truncating toward zero.
    ///
    /// Since the denominator is positive the result always fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// assert_eq!(Fraction::new(-23, 10).unwrap().to_i64(), -2);
    /// assert_eq!(Fraction::new(23, 10).unwrap().to_i64(), 2);
    /// assert_eq!(Fraction::from_integer(i64::MIN).to_i64(), i64::MIN);
    /// ```
    ///
    /// [`i64`]: https://doc.rust-lang.org/std/primitive.i64.html
    #[inline]
    pub fn to_i64(&self) -> i64 {
        self.numer / self.denom
    }

    /// Converts to an [`f32`] by dividing the numerator by the
    /// denominator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// assert_eq!(Fraction::new(-5, 4).unwrap().to_f32(), -1.25);
    /// ```
    ///
    /// [`f32`]: https://doc.rust-lang.org/std/primitive.f32.html
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numer as f32 / self.denom as f32
    }

    /// Converts to an [`f64`] by dividing the numerator by the
    /// denominator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// assert_eq!(Fraction::new(-145, 10).unwrap().to_f64(), -14.5);
    /// assert_eq!(Fraction::new(1, 3).unwrap().to_f64(), 1.0 / 3.0);
    /// ```
    ///
    /// [`f64`]: https://doc.rust-lang.org/std/primitive.f64.html
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Returns a string of the form "numerator/denominator".
    ///
    /// The slash and denominator are written even when the
    /// denominator is 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// assert_eq!(Fraction::new(10, -6).unwrap().to_text(), "-5/3");
    /// assert_eq!(Fraction::new(15, 5).unwrap().to_text(), "3/1");
    /// assert_eq!(Fraction::ZERO.to_text(), "0/1");
    /// ```
    #[inline]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}
