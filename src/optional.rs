//! The present-or-absent value wrapper.
//!
//! An [`Opt<V>`] stores its payload by value next to a discriminant. When the
//! discriminant says "absent" the payload is always `V::default()`, so equality,
//! hashing and serialization never observe a leftover value.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::render::{type_label, Render, Rendered};
use crate::zero::Zeroable;

/// A value of type `V`, or nothing.
#[derive(Clone, Copy)]
pub struct Opt<V> {
    value: V,
    present: bool,
}

/// Creates an absent [`Opt`].
pub fn none<V: Default>() -> Opt<V> {
    Opt::none()
}

/// Creates a present [`Opt`] holding `value`.
pub const fn some<V>(value: V) -> Opt<V> {
    Opt::some(value)
}

impl<V: Default> Opt<V> {
    /// Creates an absent option whose payload is `V::default()`.
    pub fn none() -> Self {
        Self {
            value: V::default(),
            present: false,
        }
    }

    /// Creates an option from a nullable reference.
    ///
    /// `None` becomes an absent option, otherwise the referenced value is
    /// cloned into a present one. Inverse of [`Opt::to_nullable`].
    pub fn from_nullable(value: Option<&V>) -> Self
    where
        V: Clone,
    {
        match value {
            Some(value) => Self::some(value.clone()),
            None => Self::none(),
        }
    }

    /// Creates an option that is absent when `value` is zero.
    ///
    /// Zeroness comes from the value's [`Zeroable`] impl, so types with their
    /// own notion of emptiness (timestamps, JSON values) decide for
    /// themselves and a `None` reference is always zero.
    pub fn from_zeroable(value: V) -> Self
    where
        V: Zeroable,
    {
        if value.is_zero() {
            Self::none()
        } else {
            Self::some(value)
        }
    }
}

impl<V> Opt<V> {
    /// Creates a present option holding `value`.
    pub const fn some(value: V) -> Self {
        Self {
            value,
            present: true,
        }
    }

    pub const fn is_present(&self) -> bool {
        self.present
    }

    pub const fn is_absent(&self) -> bool {
        !self.present
    }

    /// Same as [`Opt::is_absent`].
    pub const fn is_empty(&self) -> bool {
        !self.present
    }

    /// Reports whether the option is absent.
    ///
    /// A present option is never zero, even when it wraps `V::default()`.
    /// Use it with serde's conditional omission:
    ///
    /// ```
    /// use opt::Opt;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Patch {
    ///     #[serde(skip_serializing_if = "Opt::is_zero")]
    ///     enabled: Opt<bool>,
    /// }
    ///
    /// let empty = serde_json::to_string(&Patch { enabled: Opt::none() }).unwrap();
    /// assert_eq!(empty, "{}");
    /// ```
    pub const fn is_zero(&self) -> bool {
        !self.present
    }

    /// Returns the payload and whether it is present.
    ///
    /// The payload of an absent option is `V::default()`.
    pub fn unwrap(self) -> (V, bool) {
        (self.value, self.present)
    }

    /// Borrowing form of [`Opt::unwrap`].
    pub fn as_parts(&self) -> (&V, bool) {
        (&self.value, self.present)
    }

    /// Returns the payload, panicking when the option is absent.
    ///
    /// Only call this once presence has been established some other way.
    #[track_caller]
    pub fn must(self) -> V {
        let (value, present) = self.unwrap();
        if !present {
            panic!("called `Opt::must()` on an absent value");
        }
        value
    }

    /// Returns the payload if present, otherwise `default`.
    pub fn value_or(self, default: V) -> V {
        match self.unwrap() {
            (value, true) => value,
            (_, false) => default,
        }
    }

    /// Returns the payload if present, otherwise `V::default()`.
    pub fn value_or_zero(self) -> V {
        let (value, _) = self.unwrap();
        value
    }

    pub fn as_option(&self) -> Option<&V> {
        match self.as_parts() {
            (value, true) => Some(value),
            (_, false) => None,
        }
    }

    pub fn into_option(self) -> Option<V> {
        match self.unwrap() {
            (value, true) => Some(value),
            (_, false) => None,
        }
    }

    /// Returns a freshly allocated copy of the payload, or `None` when absent.
    ///
    /// The box never points into `self`. Inverse of [`Opt::from_nullable`].
    pub fn to_nullable(&self) -> Option<Box<V>>
    where
        V: Clone,
    {
        self.as_option().map(|value| Box::new(value.clone()))
    }
}

impl<V: Default> Default for Opt<V> {
    fn default() -> Self {
        Self::none()
    }
}

impl<V: Default> From<Option<V>> for Opt<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<V> From<Opt<V>> for Option<V> {
    fn from(value: Opt<V>) -> Self {
        value.into_option()
    }
}

impl<V: PartialEq> PartialEq for Opt<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.present, other.present) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<V: Eq> Eq for Opt<V> {}

impl<V: Hash> Hash for Opt<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.present.hash(state);
        if self.present {
            self.value.hash(state);
        }
    }
}

impl<V> Zeroable for Opt<V> {
    const SELF_REPORTED: bool = true;

    fn is_zero(&self) -> bool {
        Opt::is_zero(self)
    }
}

impl<V: Render> fmt::Display for Opt<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => write!(f, "Some[{}]({})", type_label::<V>(), Rendered(value)),
            None => write!(f, "None[{}]()", type_label::<V>()),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Opt<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => write!(f, "Some[{}]({:?})", type_label::<V>(), value),
            None => write!(f, "None[{}]()", type_label::<V>()),
        }
    }
}
