//! Zeroness: deciding whether a value counts as "empty".
//!
//! Scalars and text are zero when they equal their `Default`. Composite
//! values are zero when every element is. A `None` reference is zero without
//! looking any further. A non-null reference is a value in its own right and
//! stays non-zero, unless the pointee sets [`Zeroable::SELF_REPORTED`]: then
//! the pointee decides.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A type that can report whether it holds its zero value.
pub trait Zeroable {
    /// `true` when zeroness is the type's own notion rather than a comparison
    /// with its default. Only such types are consulted through a reference.
    const SELF_REPORTED: bool = false;

    fn is_zero(&self) -> bool;
}

/// Structural zero check: `value` equals `V::default()`.
pub fn is_structural_zero<V: Default + PartialEq>(value: &V) -> bool {
    *value == V::default()
}

macro_rules! zero_by_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    is_structural_zero(self)
                }
            }
        )*
    };
}

zero_by_default!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
    Duration,
);

// Only +0.0 is zero; -0.0 and NaN carry information.
impl Zeroable for f32 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl Zeroable for f64 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

// `str` is only ever seen behind a reference, so `""` reports itself.
impl Zeroable for str {
    const SELF_REPORTED: bool = true;

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zeroable, const N: usize> Zeroable for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(Zeroable::is_zero)
    }
}

impl<T> Zeroable for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Zeroable for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Zeroable for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zeroable for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zeroable for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zeroable> Zeroable for Option<T> {
    fn is_zero(&self) -> bool {
        match self {
            Some(value) => T::SELF_REPORTED && value.is_zero(),
            None => true,
        }
    }
}

impl<T: Zeroable + ?Sized> Zeroable for &T {
    const SELF_REPORTED: bool = T::SELF_REPORTED;

    fn is_zero(&self) -> bool {
        T::SELF_REPORTED && (**self).is_zero()
    }
}

impl<T: Zeroable + ?Sized> Zeroable for Box<T> {
    const SELF_REPORTED: bool = T::SELF_REPORTED;

    fn is_zero(&self) -> bool {
        T::SELF_REPORTED && (**self).is_zero()
    }
}

impl<T: Zeroable + ?Sized> Zeroable for Rc<T> {
    const SELF_REPORTED: bool = T::SELF_REPORTED;

    fn is_zero(&self) -> bool {
        T::SELF_REPORTED && (**self).is_zero()
    }
}

impl<T: Zeroable + ?Sized> Zeroable for Arc<T> {
    const SELF_REPORTED: bool = T::SELF_REPORTED;

    fn is_zero(&self) -> bool {
        T::SELF_REPORTED && (**self).is_zero()
    }
}

macro_rules! zero_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Zeroable),+> Zeroable for ($($name,)+) {
                #[allow(non_snake_case)]
                fn is_zero(&self) -> bool {
                    let ($($name,)+) = self;
                    true $(&& $name.is_zero())+
                }
            }
        )*
    };
}

zero_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

impl Zeroable for serde_json::Value {
    const SELF_REPORTED: bool = true;

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

/// Timestamps are zero at the Unix epoch (`DateTime::<Utc>::default()`),
/// whatever zone or offset the instant is viewed in.
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Zeroable for chrono::DateTime<Tz> {
    const SELF_REPORTED: bool = true;

    fn is_zero(&self) -> bool {
        self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
    }
}
