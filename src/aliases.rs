//! Shorthand names for `Opt` over common payload types.

use crate::optional::Opt;

pub type Bool = Opt<bool>;
pub type Byte = Opt<u8>;
pub type Char = Opt<char>;
pub type Text = Opt<String>;

pub type I8 = Opt<i8>;
pub type I16 = Opt<i16>;
pub type I32 = Opt<i32>;
pub type I64 = Opt<i64>;
pub type I128 = Opt<i128>;
pub type Isize = Opt<isize>;

pub type U8 = Opt<u8>;
pub type U16 = Opt<u16>;
pub type U32 = Opt<u32>;
pub type U64 = Opt<u64>;
pub type U128 = Opt<u128>;
pub type Usize = Opt<usize>;

pub type F32 = Opt<f32>;
pub type F64 = Opt<f64>;

pub type Json = Opt<serde_json::Value>;

#[cfg(feature = "chrono")]
pub type Timestamp = Opt<chrono::DateTime<chrono::Utc>>;
