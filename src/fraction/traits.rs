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
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

impl Default for Fraction {
    #[inline]
    fn default() -> Fraction {
        Fraction::ZERO
    }
}

impl FromStr for Fraction {
    type Err = FractionError;
    #[inline]
    fn from_str(src: &str) -> Result<Fraction, FractionError> {
        Fraction::parse(src)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_pair(self, f)
    }
}

impl Debug for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_pair(self, f)
    }
}

// Width, fill and the `+` flag apply to the whole pair. Zero padding
// goes between the sign and the numerator, so `{:08}` on -11/15 gives
// "-0011/15", which still parses back to the same value.
fn fmt_pair(r: &Fraction, f: &mut Formatter<'_>) -> fmt::Result {
    let s = format!("{}/{}", r.numer().unsigned_abs(), r.denom());
    f.pad_integral(r.numer() >= 0, "", &s)
}

impl From<i64> for Fraction {
    #[inline]
    fn from(src: i64) -> Fraction {
        Fraction::from_integer(src)
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(src: i32) -> Fraction {
        Fraction::from_integer(i64::from(src))
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;
    #[inline]
    fn try_from(src: (i64, i64)) -> Result<Fraction, FractionError> {
        Fraction::new(src.0, src.1)
    }
}

impl From<Fraction> for (i64, i64) {
    #[inline]
    fn from(src: Fraction) -> (i64, i64) {
        src.into_numer_denom()
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(src: Fraction) -> f64 {
        src.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fraction, FractionError};
    use std::convert::TryFrom;

    #[test]
    fn check_formatting() {
        let r = Fraction::new(-11, 15).unwrap();
        assert_eq!(format!("{}", r), "-11/15");
        assert_eq!(format!("{:?}", r), "-11/15");
        assert_eq!(format!("{:8}", r), "  -11/15");
        assert_eq!(format!("{:<8}|", r), "-11/15  |");
        assert_eq!(format!("{:+}", Fraction::new(3, 4).unwrap()), "+3/4");
        let padded = format!("{:08}", r);
        assert_eq!(padded, "-0011/15");
        assert_eq!(padded.parse::<Fraction>(), Ok(r));
        assert_eq!(format!("{:+08}", Fraction::new(3, 4).unwrap()), "+00003/4");
        assert_eq!(Fraction::new(15, 5).unwrap().to_string(), "3/1");
        assert_eq!(Fraction::ZERO.to_string(), "0/1");
        assert_eq!(
            Fraction::from_integer(i64::MIN).to_string(),
            "-9223372036854775808/1"
        );
    }

    #[test]
    fn check_conversions() {
        assert_eq!(Fraction::from(-7_i64), (-7, 1));
        assert_eq!(Fraction::from(i32::MIN), (i64::from(i32::MIN), 1));
        assert_eq!(Fraction::try_from((6_i64, -4_i64)), Ok(Fraction::new(-3, 2).unwrap()));
        assert_eq!(
            Fraction::try_from((6_i64, 0_i64)),
            Err(FractionError::InvalidDenominator)
        );
        let pair: (i64, i64) = Fraction::new(10, 4).unwrap().into();
        assert_eq!(pair, (5, 2));
        assert_eq!(f64::from(Fraction::new(5, 2).unwrap()), 2.5);
        assert_eq!(Fraction::default(), 0);
    }
}
