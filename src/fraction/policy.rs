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

//! Equality policies for fractions.
//!
//! Two policies are provided:
//!
//!   * [`Structural`] compares the numerators and denominators
//!     directly. This is what `==` does for [`Fraction`], and it is
//!     exact because every `Fraction` is in canonical form.
//!   * [`CrossMultiply`] compares `a/b` and `c/d` by checking whether
//!     `a × d = c × b`. This does not depend on normalization. The
//!     products are computed at double width, so the comparison
//!     cannot overflow.
//!
//! On values of type [`Fraction`] the two policies always agree. Both
//! hash the canonical pair, so hashing is consistent with either
//! policy, and so is the total order of [`Fraction`].
//!
//! The [`Keyed`] wrapper selects a policy at the type level, and the
//! [`Equality`] enum selects one at run time.
//!
//! # Examples
//!
//! ```rust
//! use rugfrac::policy::{CrossMultiply, Keyed};
//! use rugfrac::Fraction;
//! use std::collections::HashSet;
//!
//! let mut set = HashSet::new();
//! set.insert(Keyed::<CrossMultiply>::new(Fraction::new(1, 2).unwrap()));
//! set.insert(Keyed::new(Fraction::new(2, 4).unwrap()));
//! set.insert(Keyed::new(Fraction::new(-1, -2).unwrap()));
//! assert_eq!(set.len(), 1);
//! ```
//!
//! [`CrossMultiply`]: struct.CrossMultiply.html
//! [`Equality`]: enum.Equality.html
//! [`Fraction`]: ../struct.Fraction.html
//! [`Keyed`]: struct.Keyed.html
//! [`Structural`]: struct.Structural.html

use crate::Fraction;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A rule deciding when two fractions are equal.
///
/// Implementations must hash equal values identically. They must also
/// agree with the total order of [`Fraction`]: `eq(a, b)` must be `true`
/// exactly when `a.cmp(&b)` is `Ordering::Equal`. [`Keyed`] orders by
/// value, so a policy coarser or finer than value equality would give
/// a [`BTreeMap`] key whose `Eq` and `Ord` disagree.
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
/// [`Fraction`]: ../struct.Fraction.html
/// [`Keyed`]: struct.Keyed.html
pub trait EqualityPolicy {
    /// Returns `true` if `lhs` and `rhs` are equal under this policy.
    fn eq(lhs: &Fraction, rhs: &Fraction) -> bool;

    /// Feeds `value` into `state` consistently with [`eq`].
    ///
    /// [`eq`]: #tymethod.eq
    fn hash<H: Hasher>(value: &Fraction, state: &mut H);
}

/// Equality of the canonical numerator and denominator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Structural;

/// Equality by cross-multiplication.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossMultiply;

impl EqualityPolicy for Structural {
    #[inline]
    fn eq(lhs: &Fraction, rhs: &Fraction) -> bool {
        lhs.numer() == rhs.numer() && lhs.denom() == rhs.denom()
    }

    #[inline]
    fn hash<H: Hasher>(value: &Fraction, state: &mut H) {
        value.numer().hash(state);
        value.denom().hash(state);
    }
}

impl EqualityPolicy for CrossMultiply {
    #[inline]
    fn eq(lhs: &Fraction, rhs: &Fraction) -> bool {
        i128::from(lhs.numer()) * i128::from(rhs.denom())
            == i128::from(rhs.numer()) * i128::from(lhs.denom())
    }

    // Cross-equal fractions have the same canonical pair.
    #[inline]
    fn hash<H: Hasher>(value: &Fraction, state: &mut H) {
        Structural::hash(value, state);
    }
}

impl Fraction {
    /// Checks equality by comparing the canonical numerator and
    /// denominator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let a = Fraction::new(3, -4).unwrap();
    /// let b = Fraction::new(-3, 4).unwrap();
    /// assert!(a.eq_structural(&b));
    /// ```
    #[inline]
    pub fn eq_structural(&self, other: &Fraction) -> bool {
        Structural::eq(self, other)
    }

    /// Checks equality by cross-multiplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rugfrac::Fraction;
    /// let a = Fraction::from_integer(i64::MAX);
    /// let b = Fraction::new(i64::MAX, 2).unwrap();
    /// assert!(!a.eq_cross(&b));
    /// assert!(a.eq_cross(&(b * Fraction::from_integer(2))));
    /// ```
    #[inline]
    pub fn eq_cross(&self, other: &Fraction) -> bool {
        CrossMultiply::eq(self, other)
    }
}

/// An equality policy selected at run time.
///
/// # Examples
///
/// ```rust
/// use rugfrac::policy::Equality;
/// use rugfrac::Fraction;
/// let a = Fraction::new(1, 3).unwrap();
/// let b = Fraction::new(2, 6).unwrap();
/// for &mode in [Equality::Structural, Equality::CrossMultiply].iter() {
///     assert!(mode.equal(&a, &b));
///     assert!(mode.not_equal(&a, &Fraction::ONE));
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equality {
    /// Compare the canonical pairs, see [`Structural`].
    ///
    /// [`Structural`]: struct.Structural.html
    Structural,
    /// Compare by cross-multiplication, see [`CrossMultiply`].
    ///
    /// [`CrossMultiply`]: struct.CrossMultiply.html
    CrossMultiply,
}

impl Default for Equality {
    #[inline]
    fn default() -> Equality {
        Equality::Structural
    }
}

impl Equality {
    /// Returns `true` if `lhs` and `rhs` are equal under this policy.
    #[inline]
    pub fn equal(self, lhs: &Fraction, rhs: &Fraction) -> bool {
        match self {
            Equality::Structural => Structural::eq(lhs, rhs),
            Equality::CrossMultiply => CrossMultiply::eq(lhs, rhs),
        }
    }

    /// Returns `true` if `lhs` and `rhs` are not equal under this
    /// policy.
    #[inline]
    pub fn not_equal(self, lhs: &Fraction, rhs: &Fraction) -> bool {
        !self.equal(lhs, rhs)
    }

    /// Feeds `value` into `state` consistently with [`equal`].
    ///
    /// [`equal`]: #method.equal
    #[inline]
    pub fn hash_into<H: Hasher>(self, value: &Fraction, state: &mut H) {
        match self {
            Equality::Structural => Structural::hash(value, state),
            Equality::CrossMultiply => CrossMultiply::hash(value, state),
        }
    }
}

/**
A [`Fraction`] compared and hashed under the policy `P`.

`Keyed` can be used as the key of a [`HashMap`] or [`BTreeMap`]. Its
[`Eq`] and [`Hash`] implementations use `P`, and its [`Ord`]
implementation uses the total order of [`Fraction`], which agrees with
both policies.

# Examples

```rust
use rugfrac::policy::{Keyed, Structural};
use rugfrac::Fraction;
use std::collections::BTreeMap;

let mut counts = BTreeMap::new();
for &(n, d) in [(1, 2), (3, 4), (2, 4), (-1, 3)].iter() {
    let key = Keyed::<Structural>::new(Fraction::new(n, d).unwrap());
    *counts.entry(key).or_insert(0) += 1;
}
let keys: Vec<String> = counts.keys().map(|k| k.to_string()).collect();
assert_eq!(keys, ["-1/3", "1/2", "3/4"]);
assert_eq!(counts[&Keyed::<Structural>::new(Fraction::new(1, 2).unwrap())], 2);
```

[`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
[`Eq`]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
[`Fraction`]: ../struct.Fraction.html
[`HashMap`]: https://doc.rust-lang.org/std/collections/struct.HashMap.html
[`Hash`]: https://doc.rust-lang.org/std/hash/trait.Hash.html
[`Ord`]: https://doc.rust-lang.org/std/cmp/trait.Ord.html
*/
pub struct Keyed<P> {
    value: Fraction,
    policy: PhantomData<P>,
}

impl<P> Keyed<P> {
    /// Wraps `value`.
    #[inline]
    pub fn new(value: Fraction) -> Self {
        Keyed {
            value,
            policy: PhantomData,
        }
    }

    /// Returns the wrapped fraction.
    #[inline]
    pub fn get(&self) -> &Fraction {
        &self.value
    }

    /// Unwraps the fraction.
    #[inline]
    pub fn into_inner(self) -> Fraction {
        self.value
    }
}

impl<P> Clone for Keyed<P> {
    #[inline]
    fn clone(&self) -> Self {
        Keyed::new(self.value)
    }
}

impl<P> Copy for Keyed<P> {}

impl<P> From<Fraction> for Keyed<P> {
    #[inline]
    fn from(value: Fraction) -> Self {
        Keyed::new(value)
    }
}

impl<P: EqualityPolicy> PartialEq for Keyed<P> {
    #[inline]
    fn eq(&self, other: &Keyed<P>) -> bool {
        P::eq(&self.value, &other.value)
    }
}

impl<P: EqualityPolicy> Eq for Keyed<P> {}

impl<P: EqualityPolicy> Hash for Keyed<P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        P::hash(&self.value, state);
    }
}

impl<P: EqualityPolicy> Ord for Keyed<P> {
    #[inline]
    fn cmp(&self, other: &Keyed<P>) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<P: EqualityPolicy> PartialOrd for Keyed<P> {
    #[inline]
    fn partial_cmp(&self, other: &Keyed<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Debug for Keyed<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

impl<P> Display for Keyed<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}
