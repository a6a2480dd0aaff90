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
use serde::de::{Deserialize, Deserializer, Error as DeError, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Formatter};

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Fraction, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FractionVisitor)
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a fraction of the form \"numerator/denominator\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Fraction, E>
    where
        E: DeError,
    {
        Fraction::parse(v).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::Fraction;
    use serde_test::Token;

    enum Check<'a> {
        SerDe(&'a Fraction),
        De(&'a Fraction),
        DeError(&'a str),
    }

    fn json_assert_value(r: &Fraction, value: &str) {
        let encoded = serde_json::to_string(r).unwrap();
        assert_eq!(encoded, format!("\"{}\"", value));
        let decoded: Fraction = serde_json::from_str(&encoded).unwrap();
        assert_eq!(r, &decoded);
    }

    fn json_assert_de_value(r: &Fraction, value: &str) {
        let decoded: Fraction =
            serde_json::from_value(serde_json::Value::from(value)).unwrap();
        assert_eq!(r, &decoded);
    }

    fn try_bincode(r: &Fraction) {
        let encoded = bincode::serialize(r).unwrap();
        let decoded: Fraction = bincode::deserialize(&encoded).unwrap();
        assert_eq!(r, &decoded);
    }

    impl<'a> Check<'a> {
        fn check(self, value: &'static str) {
            let tokens = [Token::Str(value)];
            match self {
                Check::SerDe(r) => {
                    serde_test::assert_tokens(r, &tokens);
                    json_assert_value(r, value);
                    try_bincode(r);
                }
                Check::De(r) => {
                    serde_test::assert_de_tokens(r, &tokens);
                    json_assert_de_value(r, value);
                }
                Check::DeError(msg) => {
                    serde_test::assert_de_tokens_error::<Fraction>(
                        &tokens, msg,
                    );
                }
            }
        }
    }

    #[test]
    fn check() {
        Check::DeError("denominator is zero").check("1/0");
        Check::DeError("malformed fraction: invalid digit found in string")
            .check("1/-2");
        Check::DeError("malformed fraction: no / found in string")
            .check("12");

        let mut r = Fraction::ZERO;
        Check::SerDe(&r).check("0/1");
        Check::De(&r).check("0/5");
        Check::De(&r).check("-0/1");

        r = Fraction::new(11, -0xffff_ffff).unwrap();
        Check::SerDe(&r).check("-11/4294967295");
        Check::De(&r).check("-22/8589934590");

        r = Fraction::from_integer(i64::MIN);
        Check::SerDe(&r).check("-9223372036854775808/1");
    }
}
