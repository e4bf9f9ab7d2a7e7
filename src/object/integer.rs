//! Integer implementation.

use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use num_bigint::{BigInt, ParseBigIntError};
use num_traits::ToPrimitive;

/// The integer variant represents all possible integer values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntVariant {
    /// Machine integers.
    Small(i64),

    /// Bignums.
    Big(Rc<BigInt>),
}

impl From<BigInt> for IntVariant {
    fn from(value: BigInt) -> Self {
        Self::Big(Rc::new(value))
    }
}

impl From<i64> for IntVariant {
    fn from(x: i64) -> Self {
        Self::Small(x)
    }
}

impl From<i32> for IntVariant {
    fn from(x: i32) -> Self {
        Self::Small(x as i64)
    }
}

impl FromStr for IntVariant {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        i64::from_str(s)
            .map(IntVariant::Small)
            .or_else(|_| BigInt::from_str(s).map(IntVariant::from))
    }
}

impl Display for IntVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small(r) => f.write_fmt(format_args!("{}", r)),
            Self::Big(r) => f.write_fmt(format_args!("{}", r)),
        }
    }
}

impl IntVariant {
    /// Sum of two integers. This implements the addition operator.
    pub fn add(&self, other: &IntVariant) -> IntVariant {
        self.operate(other, i64::checked_add, |x, y| x + y).normalize()
    }

    /// Product of two integers. This implements the multiplication operator.
    pub fn mul(&self, other: &IntVariant) -> IntVariant {
        self.operate(other, i64::checked_mul, |x, y| x * y).normalize()
    }

    /// Universal utility method for implementing operators.
    ///
    /// If both operands are machine integers, the `ixi` function is applied,
    /// which is allowed to fail (in case of overflow, say). If it fails, or
    /// if either operand is a bignum, both operands are converted to bignums
    /// and the `bxb` function is applied. This one may not fail.
    ///
    /// This method does not apply normalization to the result. That is the
    /// responsibility of the caller.
    fn operate<S, T>(
        &self,
        other: &IntVariant,
        ixi: impl Fn(i64, i64) -> Option<S>,
        bxb: impl Fn(&BigInt, &BigInt) -> T,
    ) -> IntVariant
    where
        IntVariant: From<S> + From<T>,
    {
        match (self, other) {
            (Self::Small(xx), Self::Small(yy)) => ixi(*xx, *yy)
                .map(IntVariant::from)
                .unwrap_or_else(|| IntVariant::from(bxb(&BigInt::from(*xx), &BigInt::from(*yy)))),
            (Self::Small(xx), Self::Big(yy)) => IntVariant::from(bxb(&BigInt::from(*xx), yy)),
            (Self::Big(xx), Self::Small(yy)) => IntVariant::from(bxb(xx, &BigInt::from(*yy))),
            (Self::Big(xx), Self::Big(yy)) => IntVariant::from(bxb(xx, yy)),
        }
    }

    /// Normalize self by converting bignums to machine integers when possible.
    /// Used as a postprocesssing step for most arithmetic operations.
    pub fn normalize(&self) -> IntVariant {
        if let Self::Big(x) = &self {
            x.to_i64().map(IntVariant::Small).unwrap_or_else(|| self.clone())
        } else {
            self.clone()
        }
    }

    /// User (not structural) equality does not differentiate between bignums
    /// and machine integers, even though it should be impossible to create
    /// two distinct representations of the same number, as all arithmetic
    /// uses [`IntVariant::normalize`] as a postprocessing step.
    pub fn user_eq(&self, other: &IntVariant) -> bool {
        match (self, other) {
            (Self::Small(x), Self::Small(y)) => x.eq(y),
            (Self::Small(x), Self::Big(y)) => y.as_ref().eq(&BigInt::from(*x)),
            (Self::Big(x), Self::Small(y)) => x.as_ref().eq(&BigInt::from(*y)),
            (Self::Big(x), Self::Big(y)) => x.eq(y),
        }
    }
}
