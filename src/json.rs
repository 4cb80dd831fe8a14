//! Structured-data interop: absent is `null`, present is the payload's own encoding.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::optional::Opt;
use crate::render::type_label;

impl<V: Serialize> Serialize for Opt<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, V> Deserialize<'de> for Opt<V>
where
    V: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(OptVisitor(PhantomData))
    }
}

struct OptVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OptVisitor<V>
where
    V: Deserialize<'de> + Default,
{
    type Value = Opt<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "null or a value of type {}", type_label::<V>())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Opt::none())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Opt::none())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        V::deserialize(deserializer)
            .map(Opt::some)
            .inspect_err(|err| log::debug!("Failed to decode {} payload: {}", type_label::<V>(), err))
    }
}
