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

// Generates the operator impls for every owned/borrowed operand
// combination on top of a fallible `checked_` method. The operators
// panic with the error message where the `checked_` method fails.
macro_rules! arith_binary {
    {
        $Frac:ty;
        $checked:ident;
        $Imp:ident $method:ident;
        $ImpAssign:ident $method_assign:ident
    } => {
        // x # y
        impl $Imp<$Frac> for $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: $Frac) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(&rhs))
            }
        }

        // x # &y
        impl<'a> $Imp<&'a $Frac> for $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: &'a $Frac) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(rhs))
            }
        }

        // &x # y
        impl<'a> $Imp<$Frac> for &'a $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: $Frac) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(&rhs))
            }
        }

        // &x # &y
        impl<'a, 'b> $Imp<&'a $Frac> for &'b $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: &'a $Frac) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(rhs))
            }
        }

        // x #= y
        impl $ImpAssign<$Frac> for $Frac {
            #[inline]
            fn $method_assign(&mut self, rhs: $Frac) {
                self.$method_assign(&rhs);
            }
        }

        // x #= &y
        impl<'a> $ImpAssign<&'a $Frac> for $Frac {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a $Frac) {
                *self = $crate::fraction::arith::unwrap_op(self.$checked(rhs));
            }
        }
    };
}

macro_rules! arith_prim {
    {
        $Frac:ty;
        $checked:ident;
        $Imp:ident $method:ident;
        $ImpAssign:ident $method_assign:ident;
        $T:ty
    } => {
        // x # t
        impl $Imp<$T> for $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: $T) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(rhs))
            }
        }

        // &x # t
        impl<'a> $Imp<$T> for &'a $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self, rhs: $T) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked(rhs))
            }
        }

        // x #= t
        impl $ImpAssign<$T> for $Frac {
            #[inline]
            fn $method_assign(&mut self, rhs: $T) {
                *self = $crate::fraction::arith::unwrap_op(self.$checked(rhs));
            }
        }
    };
}

macro_rules! arith_unary {
    { $Frac:ty; $checked:ident; $Imp:ident $method:ident } => {
        // #x
        impl $Imp for $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked())
            }
        }

        // #&x
        impl<'a> $Imp for &'a $Frac {
            type Output = $Frac;
            #[inline]
            fn $method(self) -> $Frac {
                $crate::fraction::arith::unwrap_op(self.$checked())
            }
        }
    };
}
