//! Nullable-column interop for sqlx.
//!
//! Column handling delegates to sqlx's own `Option<V>` convention: NULL is
//! absent and anything else is decoded as `V`.

use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::{Database, Type};

use crate::optional::Opt;
use crate::render::type_label;

impl<DB, V> Type<DB> for Opt<V>
where
    DB: Database,
    V: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <Option<V> as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <Option<V> as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB, V> Encode<'q, DB> for Opt<V>
where
    DB: Database,
    V: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.as_option() {
            Some(value) => <V as Encode<'q, DB>>::encode_by_ref(value, buf),
            None => Ok(IsNull::Yes),
        }
    }

    fn produces(&self) -> Option<DB::TypeInfo> {
        self.as_option()
            .and_then(|value| <V as Encode<'q, DB>>::produces(value))
    }

    fn size_hint(&self) -> usize {
        self.as_option()
            .map_or(0, |value| <V as Encode<'q, DB>>::size_hint(value))
    }
}

impl<'r, DB, V> Decode<'r, DB> for Opt<V>
where
    DB: Database,
    V: Decode<'r, DB> + Default,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        <Option<V> as Decode<'r, DB>>::decode(value)
            .map(Opt::from)
            .inspect_err(|err| log::debug!("Failed to decode {} column: {}", type_label::<V>(), err))
    }
}
