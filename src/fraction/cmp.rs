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

use crate::Fraction;
use std::cmp::Ordering;

impl Fraction {
    // Compares with a raw numerator and denominator pair which need not
    // be normalized. Returns None if the denominator is zero.
    fn cmp_raw(&self, numer: i128, denom: i128) -> Option<Ordering> {
        let (numer, denom) = match denom.cmp(&0) {
            Ordering::Equal => return None,
            Ordering::Less => (-numer, -denom),
            Ordering::Greater => (numer, denom),
        };
        let lhs = i128::from(self.numer()) * denom;
        let rhs = numer * i128::from(self.denom());
        Some(lhs.cmp(&rhs))
    }
}

impl Ord for Fraction {
    #[inline]
    fn cmp(&self, other: &Fraction) -> Ordering {
        let lhs = i128::from(self.numer()) * i128::from(other.denom());
        let rhs = i128::from(other.numer()) * i128::from(self.denom());
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(<Fraction as Ord>::cmp(self, other))
    }
}

impl PartialEq<i64> for Fraction {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.denom() == 1 && self.numer() == *other
    }
}

impl PartialEq<Fraction> for i64 {
    #[inline]
    fn eq(&self, other: &Fraction) -> bool {
        <Fraction as PartialEq<i64>>::eq(other, self)
    }
}

impl PartialOrd<i64> for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.cmp_raw(i128::from(*other), 1)
    }
}

impl PartialOrd<Fraction> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        <Fraction as PartialOrd<i64>>::partial_cmp(other, self)
            .map(Ordering::reverse)
    }
}

// Raw pairs are compared by cross-multiplication, so they need not be
// in canonical form. A pair with a zero denominator is not a number
// and compares equal to nothing.
impl PartialEq<(i64, i64)> for Fraction {
    #[inline]
    fn eq(&self, other: &(i64, i64)) -> bool {
        self.cmp_raw(i128::from(other.0), i128::from(other.1))
            == Some(Ordering::Equal)
    }
}

impl PartialEq<Fraction> for (i64, i64) {
    #[inline]
    fn eq(&self, other: &Fraction) -> bool {
        <Fraction as PartialEq<(i64, i64)>>::eq(other, self)
    }
}

impl PartialOrd<(i64, i64)> for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &(i64, i64)) -> Option<Ordering> {
        self.cmp_raw(i128::from(other.0), i128::from(other.1))
    }
}

impl PartialOrd<Fraction> for (i64, i64) {
    #[inline]
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        <Fraction as PartialOrd<(i64, i64)>>::partial_cmp(other, self)
            .map(Ordering::reverse)
    }
}
