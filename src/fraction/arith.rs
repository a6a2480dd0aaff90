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

use crate::{Fraction, FractionError};
use std::borrow::Borrow;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl Fraction {
    /// Adds two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] if the reduced sum does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a.checked_add(&b), Ok(Fraction::new(5, 6).unwrap()));
    /// ```
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_add(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b, c, d) = wide(self, rhs);
        Fraction::from_wide(a * d + c * b, b * d)
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] if the reduced difference does
    /// not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a.checked_sub(&b), Ok(Fraction::new(1, 6).unwrap()));
    /// ```
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_sub(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b, c, d) = wide(self, rhs);
        Fraction::from_wide(a * d - c * b, b * d)
    }

    /// Subtracts the integer `n` from `self`.
    ///
    /// The result is identical to subtracting `n`/1.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] if the reduced difference does
    /// not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let r = Fraction::new(7, 2).unwrap();
    /// assert_eq!(r.checked_sub_int(3), Ok(Fraction::new(1, 2).unwrap()));
    /// assert_eq!(r.checked_sub_int(3), r.checked_sub(&Fraction::from_integer(3)));
    /// ```
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_sub_int(&self, n: i64) -> Result<Fraction, FractionError> {
        let numer = i128::from(self.numer());
        let denom = i128::from(self.denom());
        Fraction::from_wide(numer - i128::from(n) * denom, denom)
    }

    /// Multiplies two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] if the reduced product does not
    /// fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let a = Fraction::new(-2, 3).unwrap();
    /// let b = Fraction::new(9, 4).unwrap();
    /// assert_eq!(a.checked_mul(&b), Ok(Fraction::new(-3, 2).unwrap()));
    /// ```
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_mul(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b, c, d) = wide(self, rhs);
        Fraction::from_wide(a * c, b * d)
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `rhs` is zero, and
    /// [`ArithmeticOverflow`] if the reduced quotient does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::{Fraction, FractionError};
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a.checked_div(&b), Ok(Fraction::new(3, 2).unwrap()));
    /// let zero = Fraction::new(0, 5).unwrap();
    /// assert_eq!(a.checked_div(&zero), Err(FractionError::DivisionByZero));
    /// ```
    ///
    /// [`DivisionByZero`]: enum.FractionError.html#variant.DivisionByZero
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_div(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        if rhs.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let (a, b, c, d) = wide(self, rhs);
        Fraction::from_wide(a * d, b * c)
    }

    /// Negates the fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] if the numerator is
    /// [`i64::MIN`].
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    /// [`i64::MIN`]: https://doc.rust-lang.org/std/primitive.i64.html#associatedconstant.MIN
    pub fn checked_neg(&self) -> Result<Fraction, FractionError> {
        Fraction::from_wide(-i128::from(self.numer()), i128::from(self.denom()))
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `self` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let r = Fraction::new(-3, 4).unwrap();
    /// assert_eq!(r.checked_recip(), Ok(Fraction::new(-4, 3).unwrap()));
    /// ```
    ///
    /// [`DivisionByZero`]: enum.FractionError.html#variant.DivisionByZero
    pub fn checked_recip(&self) -> Result<Fraction, FractionError> {
        Fraction::ONE.checked_div(self)
    }

    /// Adds up all the fractions of an iterator, starting from zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticOverflow`] as soon as a partial sum does not
    /// fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::{Fraction, FractionError};
    /// let values = [
    ///     Fraction::new(1, 2)?,
    ///     Fraction::new(1, 3)?,
    ///     Fraction::new(1, 6)?,
    /// ];
    /// assert_eq!(Fraction::checked_sum(&values)?, 1);
    /// assert_eq!(Fraction::checked_sum(Vec::<Fraction>::new())?, 0);
    /// # Ok::<(), FractionError>(())
    /// ```
    ///
    /// [`ArithmeticOverflow`]: enum.FractionError.html#variant.ArithmeticOverflow
    pub fn checked_sum<I>(values: I) -> Result<Fraction, FractionError>
    where
        I: IntoIterator,
        I::Item: Borrow<Fraction>,
    {
        values
            .into_iter()
            .try_fold(Fraction::ZERO, |acc, x| acc.checked_add(x.borrow()))
    }

    /// Adds up numbers after converting each one to an [`f64`].
    ///
    /// Any value convertible to [`f64`] can be summed, so fractions can
    /// be mixed with other numbers by first converting to a common
    /// item type. The result is inexact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let values = [Fraction::new(1, 4).unwrap(), Fraction::new(-3, 2).unwrap()];
    /// assert_eq!(Fraction::sum_as_f64(values.iter().copied()), -1.25);
    /// assert_eq!(Fraction::sum_as_f64(vec![1_i32, 2, 3]), 6.0);
    /// ```
    ///
    /// [`f64`]: https://doc.rust-lang.org/std/primitive.f64.html
    pub fn sum_as_f64<I>(values: I) -> f64
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        values.into_iter().map(Into::into).sum()
    }
}

impl Sum for Fraction {
    #[inline]
    fn sum<I>(iter: I) -> Fraction
    where
        I: Iterator<Item = Fraction>,
    {
        unwrap_op(Fraction::checked_sum(iter))
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    #[inline]
    fn sum<I>(iter: I) -> Fraction
    where
        I: Iterator<Item = &'a Fraction>,
    {
        unwrap_op(Fraction::checked_sum(iter))
    }
}

#[inline]
fn wide(lhs: &Fraction, rhs: &Fraction) -> (i128, i128, i128, i128) {
    (
        i128::from(lhs.numer()),
        i128::from(lhs.denom()),
        i128::from(rhs.numer()),
        i128::from(rhs.denom()),
    )
}

pub(crate) fn unwrap_op(result: Result<Fraction, FractionError>) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

arith_unary! { Fraction; checked_neg; Neg neg }
arith_binary! { Fraction; checked_add; Add add; AddAssign add_assign }
arith_binary! { Fraction; checked_sub; Sub sub; SubAssign sub_assign }
arith_binary! { Fraction; checked_mul; Mul mul; MulAssign mul_assign }
arith_binary! { Fraction; checked_div; Div div; DivAssign div_assign }
arith_prim! { Fraction; checked_sub_int; Sub sub; SubAssign sub_assign; i64 }

#[cfg(test)]
mod tests {
    use crate::{Fraction, FractionError};
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn check_examples() {
        assert_eq!(frac(1, 2).checked_add(&frac(1, 3)), Ok(frac(5, 6)));
        assert_eq!(frac(1, 2).checked_div(&frac(1, 3)), Ok(frac(3, 2)));
        assert_eq!(frac(7, 2).checked_sub_int(3), Ok(frac(1, 2)));
        assert_eq!(frac(1, 2).checked_sub(&frac(3, 4)), Ok(frac(-1, 4)));
        assert_eq!(frac(-2, 3).checked_mul(&frac(-3, 2)), Ok(Fraction::ONE));
        assert_eq!(frac(5, 6).checked_sub(&frac(5, 6)), Ok(Fraction::ZERO));
    }

    #[test]
    fn check_ref_op() {
        let lhs = frac(-13, 27);
        let rhs = frac(15, 101);
        assert_eq!(-&lhs, -lhs);
        assert_eq!(&lhs + &rhs, lhs + rhs);
        assert_eq!(&lhs - &rhs, lhs - &rhs);
        assert_eq!(&lhs * &rhs, &lhs * rhs);
        assert_eq!(&lhs / &rhs, lhs / rhs);
        assert_eq!(&lhs - 4, lhs - 4);
        assert_eq!(lhs + rhs, (-908, 2727));
        assert_eq!(lhs * rhs, (-65, 909));
    }

    #[test]
    fn check_assign_ops() {
        let mut r = frac(1, 2);
        r += frac(1, 3);
        assert_eq!(r, (5, 6));
        r -= &frac(1, 6);
        assert_eq!(r, (2, 3));
        r *= frac(9, 4);
        assert_eq!(r, (3, 2));
        r /= &frac(3, 4);
        assert_eq!(r, (2, 1));
        r -= 5;
        assert_eq!(r, (-3, 1));
    }

    #[test]
    fn check_chain() {
        let (f1, f2, f3) = (frac(1, 2), frac(1, 4), frac(3, 8));
        assert_eq!((f1 + f2) / f3 - 5, (-3, 1));
    }

    #[test]
    fn check_errors() {
        assert_eq!(
            frac(1, 2).checked_div(&frac(0, 5)),
            Err(FractionError::DivisionByZero)
        );
        assert_eq!(Fraction::ZERO.checked_recip(), Err(FractionError::DivisionByZero));
        let max = Fraction::from_integer(i64::MAX);
        let min = Fraction::from_integer(i64::MIN);
        assert_eq!(max.checked_add(&Fraction::ONE), Err(FractionError::ArithmeticOverflow));
        assert_eq!(min.checked_sub(&Fraction::ONE), Err(FractionError::ArithmeticOverflow));
        assert_eq!(min.checked_sub_int(1), Err(FractionError::ArithmeticOverflow));
        assert_eq!(max.checked_mul(&max), Err(FractionError::ArithmeticOverflow));
        assert_eq!(min.checked_neg(), Err(FractionError::ArithmeticOverflow));
        let tiny = frac(1, i64::MAX);
        assert_eq!(tiny.checked_mul(&tiny), Err(FractionError::ArithmeticOverflow));
        // intermediate values may exceed i64 when the result fits
        assert_eq!(max.checked_sub(&max), Ok(Fraction::ZERO));
        assert_eq!(frac(i64::MAX, 2).checked_mul(&frac(2, 1)), Ok(max));
        assert_eq!(min.checked_div(&min), Ok(Fraction::ONE));
        assert_eq!(tiny.checked_div(&tiny), Ok(Fraction::ONE));
    }

    #[test]
    fn check_sum() {
        let values = [frac(1, 2), frac(1, 3), frac(1, 6), frac(-7, 4)];
        assert_eq!(Fraction::checked_sum(&values), Ok(frac(-3, 4)));
        assert_eq!(Fraction::checked_sum(values.iter().copied()), Ok(frac(-3, 4)));
        assert_eq!(values.iter().sum::<Fraction>(), (-3, 4));
        assert_eq!(values.iter().copied().sum::<Fraction>(), (-3, 4));
        let empty: [Fraction; 0] = [];
        assert_eq!(Fraction::checked_sum(&empty), Ok(Fraction::ZERO));
        assert_eq!(empty.iter().sum::<Fraction>(), Fraction::ZERO);

        let max = Fraction::from_integer(i64::MAX);
        assert_eq!(
            Fraction::checked_sum(&[max, Fraction::ONE, -Fraction::ONE]),
            Err(FractionError::ArithmeticOverflow)
        );
        assert_eq!(Fraction::checked_sum(&[max, -Fraction::ONE, Fraction::ONE]), Ok(max));

        let exact = [frac(1, 2), frac(1, 4), frac(-7, 4)];
        assert_eq!(Fraction::sum_as_f64(exact.iter().copied()), -1.0);
        assert_eq!(Fraction::sum_as_f64(Vec::<Fraction>::new()), 0.0);
        assert_eq!(Fraction::sum_as_f64(vec![0.5_f64, 1.0, 2.5]), 4.0);
        assert_eq!(Fraction::sum_as_f64(vec![3_i32, -1]), 2.0);
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn check_sum_panics() {
        let max = Fraction::from_integer(i64::MAX);
        let _: Fraction = vec![max, max].into_iter().sum();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn check_div_op_panics() {
        let _ = frac(1, 2) / Fraction::ZERO;
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn check_add_op_panics() {
        let _ = Fraction::from_integer(i64::MAX) + Fraction::ONE;
    }

    fn small() -> impl Strategy<Value = Fraction> {
        (-1_000_000_i64..1_000_000, 1_i64..1_000_000)
            .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn any_fraction() -> impl Strategy<Value = Fraction> {
        (any::<i64>(), any::<i64>())
            .prop_filter_map("valid", |(n, d)| Fraction::new(n, d).ok())
    }

    proptest! {
        #[test]
        fn add_zero_is_identity(x in any_fraction()) {
            prop_assert_eq!(x.checked_add(&Fraction::new(0, 1).unwrap()), Ok(x));
        }

        #[test]
        fn mul_one_is_identity(x in any_fraction()) {
            prop_assert_eq!(x.checked_mul(&Fraction::new(1, 1).unwrap()), Ok(x));
        }

        #[test]
        fn div_then_mul_is_inverse(x in small(), y in small()) {
            prop_assume!(!y.is_zero());
            let q = x.checked_div(&y).unwrap();
            let back = q.checked_mul(&y).unwrap();
            prop_assert!(back.eq_cross(&x));
        }

        #[test]
        fn sub_int_matches_sub(x in any_fraction(), n in any::<i64>()) {
            prop_assert_eq!(
                x.checked_sub_int(n),
                x.checked_sub(&Fraction::from_integer(n))
            );
        }

        #[test]
        fn add_is_commutative(x in any_fraction(), y in any_fraction()) {
            prop_assert_eq!(x.checked_add(&y), y.checked_add(&x));
        }

        #[test]
        fn sum_matches_repeated_add(values in prop::collection::vec(any_fraction(), 0..8)) {
            let mut expected = Ok(Fraction::ZERO);
            for x in &values {
                expected = expected.and_then(|acc: Fraction| acc.checked_add(x));
            }
            prop_assert_eq!(Fraction::checked_sum(&values), expected);
        }

        #[test]
        fn sub_undoes_add(x in small(), y in small()) {
            prop_assert_eq!((x + y) - y, x);
        }
    }
}
