//! Display rendering for option payloads.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal rendered for a `None` reference inside a present option.
pub const NIL: &str = "<nil>";

static MODULE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z_][a-z0-9_]*::").expect("module path pattern is valid"));

/// Types that know how to render themselves inside `Some[T](...)`.
///
/// Most implementations forward to `Display`; `#[derive(Render)]` does the
/// same for your own types. Sequences render as `[a, b]` and tuples as
/// `(a, b)` when their elements render.
///
/// A payload type without `Render` gets no `Display` for its `Opt`; format it
/// with `{:?}` instead, which uses the same `Some[T](...)` frame around the
/// payload's `Debug` output.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapts a [`Render`] value to `Display`.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Name of `V` with module paths stripped, e.g. `Option<&DateTime<Utc>>`.
pub fn type_label<V: ?Sized>() -> String {
    MODULE_PATH
        .replace_all(std::any::type_name::<V>(), "")
        .into_owned()
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, std::net::IpAddr, serde_json::Value,
);

// Null references render as NIL before anything is dereferenced.
impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str(NIL),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ToOwned + ?Sized> Render for Cow<'_, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

fn render_list<'a, T: Render + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.render(f)?;
    }
    f.write_str("]")
}

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_list(f, self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_list(f, self)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_list(f, self)
    }
}

macro_rules! render_tuple {
    ($(($first:ident $(, $rest:ident)*)),* $(,)?) => {
        $(
            impl<$first: Render $(, $rest: Render)*> Render for ($first, $($rest,)*) {
                #[allow(non_snake_case)]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let ($first, $($rest,)*) = self;
                    f.write_str("(")?;
                    $first.render(f)?;
                    $(
                        f.write_str(", ")?;
                        $rest.render(f)?;
                    )*
                    f.write_str(")")
                }
            }
        )*
    };
}

render_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Render for chrono::DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
