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

use crate::error::{ParseErrorKind, ParseFractionError};
use crate::{Fraction, FractionError};

impl Fraction {
    /// Parses a string of the form "numerator/denominator".
    ///
    /// The numerator can start with a minus sign. Both parts must be
    /// non-empty sequences of decimal digits that fit in an [`i64`],
    /// separated by exactly one "`/`". No whitespace, plus sign or
    /// other characters are accepted. The result is reduced to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedFraction`] if the string does not have this
    /// form, and [`InvalidDenominator`] if the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::{Fraction, FractionError};
    ///
    /// let r = Fraction::parse("-12/16").unwrap();
    /// assert_eq!(r, (-3, 4));
    /// assert_eq!(Fraction::parse("7/1").unwrap(), 7);
    ///
    /// assert!(Fraction::parse("1/2/3").is_err());
    /// assert_eq!(Fraction::parse("1/0"), Err(FractionError::InvalidDenominator));
    /// ```
    ///
    /// [`i64`]: https://doc.rust-lang.org/std/primitive.i64.html
    /// [`MalformedFraction`]: enum.FractionError.html#variant.MalformedFraction
    /// [`InvalidDenominator`]: enum.FractionError.html#variant.InvalidDenominator
    pub fn parse(src: &str) -> Result<Fraction, FractionError> {
        let (numer, denom) = split(src.as_bytes())?;
        let numer = parse_part(numer, ParseErrorKind::NumerOutOfRange)?;
        let denom = parse_part(denom, ParseErrorKind::DenomOutOfRange)?;
        Fraction::new(numer, denom)
    }
}

// Checks the shape of the string and returns the numerator and
// denominator parts, the numerator including any minus sign.
fn split(bytes: &[u8]) -> Result<(&[u8], &[u8]), ParseFractionError> {
    use self::ParseErrorKind as Kind;
    use self::ParseFractionError as Error;

    let mut slash = None;
    let mut has_digits = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'/' => {
                if slash.is_some() {
                    return Err(Error {
                        kind: Kind::TooManySlashes,
                    });
                }
                if !has_digits {
                    return Err(Error {
                        kind: Kind::NumerNoDigits,
                    });
                }
                slash = Some(i);
                has_digits = false;
            }
            b'-' if i == 0 => {}
            b'0'..=b'9' => has_digits = true,
            _ => {
                return Err(Error {
                    kind: Kind::InvalidDigit,
                });
            }
        }
    }
    match slash {
        None if has_digits => Err(Error { kind: Kind::NoSlash }),
        None => Err(Error {
            kind: Kind::NumerNoDigits,
        }),
        Some(_) if !has_digits => Err(Error {
            kind: Kind::DenomNoDigits,
        }),
        Some(i) => Ok((&bytes[..i], &bytes[i + 1..])),
    }
}

fn parse_part(
    bytes: &[u8],
    out_of_range: ParseErrorKind,
) -> Result<i64, ParseFractionError> {
    let err = ParseFractionError { kind: out_of_range };
    // split only lets through '-' and ASCII digits
    let text = std::str::from_utf8(bytes).map_err(|_| err.clone())?;
    text.parse::<i64>().map_err(|_| err)
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseErrorKind, ParseFractionError};
    use crate::{Fraction, FractionError};
    use proptest::prelude::*;

    fn malformed(kind: ParseErrorKind) -> FractionError {
        FractionError::MalformedFraction(ParseFractionError { kind })
    }

    #[test]
    fn check_parse() {
        let good_strings = [
            ("0/1", 0, 1),
            ("-0/10", 0, 1),
            ("1/2", 1, 2),
            ("-3/4", -3, 4),
            ("7/1", 7, 1),
            ("-99/3", -33, 1),
            ("0012/0020", 3, 5),
            ("9223372036854775807/1", i64::MAX, 1),
            ("-9223372036854775808/1", i64::MIN, 1),
            ("-9223372036854775808/9223372036854775807", i64::MIN, i64::MAX),
        ];
        for &(s, n, d) in good_strings.iter() {
            match Fraction::parse(s) {
                Ok(r) => {
                    assert_eq!(r.numer(), n, "numerator mismatch for {}", s);
                    assert_eq!(r.denom(), d, "denominator mismatch for {}", s);
                }
                Err(e) => panic!("could not parse {}: {}", s, e),
            }
        }
    }

    #[test]
    fn check_parse_errors() {
        use crate::error::ParseErrorKind::*;
        let bad_strings = [
            ("", NumerNoDigits),
            ("-", NumerNoDigits),
            ("/2", NumerNoDigits),
            ("-/2", NumerNoDigits),
            ("2/", DenomNoDigits),
            ("12", NoSlash),
            ("-12", NoSlash),
            ("1/2/3", TooManySlashes),
            ("2/2/", TooManySlashes),
            ("a/b", InvalidDigit),
            ("1/b", InvalidDigit),
            ("+1/2", InvalidDigit),
            ("1/+2", InvalidDigit),
            ("1/-2", InvalidDigit),
            ("10/-0", InvalidDigit),
            ("--1/2", InvalidDigit),
            (" 1/2", InvalidDigit),
            ("1 /2", InvalidDigit),
            ("1/2 ", InvalidDigit),
            ("1.5/2", InvalidDigit),
            ("1½/2", InvalidDigit),
            ("9223372036854775808/1", NumerOutOfRange),
            ("-9223372036854775809/1", NumerOutOfRange),
            ("1/9223372036854775808", DenomOutOfRange),
        ];
        for &(s, kind) in bad_strings.iter() {
            assert_eq!(Fraction::parse(s), Err(malformed(kind)), "{}", s);
        }
        assert_eq!(Fraction::parse("5/0"), Err(FractionError::InvalidDenominator));
        assert_eq!(Fraction::parse("-0/000"), Err(FractionError::InvalidDenominator));
    }

    #[test]
    fn check_from_str() {
        assert_eq!("-13/7".parse::<Fraction>().unwrap(), (-13, 7));
        assert!("1/2/3".parse::<Fraction>().is_err());
    }

    fn any_fraction() -> impl Strategy<Value = Fraction> {
        (any::<i64>(), any::<i64>())
            .prop_filter_map("valid", |(n, d)| Fraction::new(n, d).ok())
    }

    proptest! {
        #[test]
        fn text_round_trip(x in any_fraction()) {
            prop_assert_eq!(Fraction::parse(&x.to_string()), Ok(x));
        }

        #[test]
        fn parse_matches_new(n in any::<i64>(), d in 1..i64::max_value()) {
            let s = format!("{}/{}", n, d);
            prop_assert_eq!(Fraction::parse(&s), Fraction::new(n, d));
        }
    }
}
