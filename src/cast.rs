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

pub trait CheckedCast<Dst> {
    fn checked_cast(self) -> Option<Dst>;
}

macro_rules! narrowing {
    { $Src:ty => $($Dst:ty)* } => { $(
        impl CheckedCast<$Dst> for $Src {
            #[inline]
            fn checked_cast(self) -> Option<$Dst> {
                let dst = self as $Dst;
                if self == dst as $Src {
                    Some(dst)
                } else {
                    None
                }
            }
        }
    )* }
}

narrowing! { i128 => i32 i64 }
narrowing! { i64 => i32 }

#[inline]
pub fn checked_cast<Src, Dst>(src: Src) -> Option<Dst>
where
    Src: CheckedCast<Dst>,
{
    src.checked_cast()
}

#[cfg(test)]
mod tests {
    use crate::cast::checked_cast;

    #[test]
    fn check_narrowing() {
        assert_eq!(checked_cast::<i128, i64>(i64::MAX as i128), Some(i64::MAX));
        assert_eq!(checked_cast::<i128, i64>(i64::MIN as i128), Some(i64::MIN));
        assert_eq!(checked_cast::<i128, i64>(i64::MAX as i128 + 1), None);
        assert_eq!(checked_cast::<i128, i64>(i64::MIN as i128 - 1), None);
        assert_eq!(checked_cast::<i64, i32>(-5), Some(-5));
        assert_eq!(checked_cast::<i64, i32>(i32::MIN as i64), Some(i32::MIN));
        assert_eq!(checked_cast::<i64, i32>(i32::MAX as i64 + 1), None);
        assert_eq!(checked_cast::<i128, i32>(1 << 40), None);
    }
}
