//! Runtime values and records.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use solana_address::Address;

/// A single decoded or to-be-encoded field value.
///
/// Integers are widened to 128 bits. `Unsigned` and `Signed` compare
/// numerically, so `Unsigned(3) == Signed(3)`.
#[derive(Clone, Debug)]
pub enum Value {
	Unsigned(u128),
	Signed(i128),
	Bool(bool),
	Bytes(Vec<u8>),
	Struct(Record),
}

/// The runtime category of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
	Integer,
	Bool,
	Bytes,
	Struct,
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Integer => "integer",
			Self::Bool => "bool",
			Self::Bytes => "bytes",
			Self::Struct => "struct",
		})
	}
}

impl Value {
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Unsigned(_) | Self::Signed(_) => ValueKind::Integer,
			Self::Bool(_) => ValueKind::Bool,
			Self::Bytes(_) => ValueKind::Bytes,
			Self::Struct(_) => ValueKind::Struct,
		}
	}

	/// The value as an unsigned integer, if it is a non-negative integer.
	pub fn as_u128(&self) -> Option<u128> {
		match *self {
			Self::Unsigned(n) => Some(n),
			Self::Signed(n) => u128::try_from(n).ok(),
			_ => None,
		}
	}

	/// The value as a signed integer, if it fits in an `i128`.
	pub fn as_i128(&self) -> Option<i128> {
		match *self {
			Self::Signed(n) => Some(n),
			Self::Unsigned(n) => i128::try_from(n).ok(),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			Self::Bool(flag) => Some(flag),
			_ => None,
		}
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Self::Struct(record) => Some(record),
			_ => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Unsigned(a), Self::Unsigned(b)) => a == b,
			(Self::Signed(a), Self::Signed(b)) => a == b,
			(Self::Unsigned(a), Self::Signed(b)) | (Self::Signed(b), Self::Unsigned(a)) => {
				u128::try_from(*b).is_ok_and(|b| b == *a)
			}
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Bytes(a), Self::Bytes(b)) => a == b,
			(Self::Struct(a), Self::Struct(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for Value {}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unsigned(n) => write!(f, "{n}"),
			Self::Signed(n) => write!(f, "{n}"),
			Self::Bool(flag) => write!(f, "{flag}"),
			Self::Bytes(bytes) => write!(f, "0x{} ({} bytes)", hex::encode(bytes), bytes.len()),
			Self::Struct(record) => write!(f, "{record}"),
		}
	}
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(n: $ty) -> Self {
					Self::Unsigned(u128::from(n))
				}
			}
		)*
	};
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(n: $ty) -> Self {
					Self::Signed(i128::from(n))
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_from_signed!(i8, i16, i32, i64, i128);

impl From<bool> for Value {
	fn from(flag: bool) -> Self {
		Self::Bool(flag)
	}
}

impl From<Vec<u8>> for Value {
	fn from(bytes: Vec<u8>) -> Self {
		Self::Bytes(bytes)
	}
}

impl From<&[u8]> for Value {
	fn from(bytes: &[u8]) -> Self {
		Self::Bytes(bytes.to_vec())
	}
}

impl<const N: usize> From<[u8; N]> for Value {
	fn from(bytes: [u8; N]) -> Self {
		Self::Bytes(bytes.to_vec())
	}
}

impl From<Address> for Value {
	fn from(address: Address) -> Self {
		Self::Bytes(bytemuck::bytes_of(&address).to_vec())
	}
}

impl From<&Address> for Value {
	fn from(address: &Address) -> Self {
		Self::Bytes(bytemuck::bytes_of(address).to_vec())
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Self::Struct(record)
	}
}

/// A mapping from field name to [`Value`].
///
/// Iteration is in name order; wire order is defined by the codec, never by
/// the record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	#[must_use]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Insert a value, returning the previous value for that name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(name.into(), value.into())
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	pub fn remove(&mut self, name: &str) -> Option<Value> {
		self.0.remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.0.iter()
	}
}

impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (index, (name, value)) in self.0.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{name}: {value}")?;
		}
		f.write_str("}")
	}
}

impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

impl IntoIterator for Record {
	type IntoIter = btree_map::IntoIter<String, Value>;
	type Item = (String, Value);

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Record {
	type IntoIter = btree_map::Iter<'a, String, Value>;
	type Item = (&'a String, &'a Value);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use std::fmt;

	use serde::Deserialize;
	use serde::Deserializer;
	use serde::Serialize;
	use serde::Serializer;
	use serde::de;
	use serde::ser::SerializeMap;
	use serde::ser::SerializeSeq;

	use super::Record;
	use super::Value;

	impl Serialize for Value {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			match self {
				Self::Unsigned(n) => {
					match u64::try_from(*n) {
						Ok(n) => serializer.serialize_u64(n),
						Err(_) => serializer.serialize_u128(*n),
					}
				}
				Self::Signed(n) => {
					match i64::try_from(*n) {
						Ok(n) => serializer.serialize_i64(n),
						Err(_) => serializer.serialize_i128(*n),
					}
				}
				Self::Bool(flag) => serializer.serialize_bool(*flag),
				Self::Bytes(bytes) => {
					let mut seq = serializer.serialize_seq(Some(bytes.len()))?;
					for byte in bytes {
						seq.serialize_element(byte)?;
					}
					seq.end()
				}
				Self::Struct(record) => record.serialize(serializer),
			}
		}
	}

	impl Serialize for Record {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			let mut map = serializer.serialize_map(Some(self.len()))?;
			for (name, value) in self {
				map.serialize_entry(name, value)?;
			}
			map.end()
		}
	}

	struct ValueVisitor;

	impl<'de> de::Visitor<'de> for ValueVisitor {
		type Value = Value;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("an integer, a bool, a byte array or a record")
		}

		fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
			Ok(Value::Bool(v))
		}

		fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
			Ok(Value::Unsigned(u128::from(v)))
		}

		fn visit_u128<E: de::Error>(self, v: u128) -> Result<Value, E> {
			Ok(Value::Unsigned(v))
		}

		fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
			Ok(Value::Signed(i128::from(v)))
		}

		fn visit_i128<E: de::Error>(self, v: i128) -> Result<Value, E> {
			Ok(Value::Signed(v))
		}

		fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Value, E> {
			Ok(Value::Bytes(v.to_vec()))
		}

		fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Value, E> {
			Ok(Value::Bytes(v))
		}

		fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
			let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or_default());
			while let Some(byte) = seq.next_element::<u8>()? {
				bytes.push(byte);
			}
			Ok(Value::Bytes(bytes))
		}

		fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<Value, A::Error> {
			RecordVisitor.visit_map(map).map(Value::Struct)
		}
	}

	struct RecordVisitor;

	impl<'de> de::Visitor<'de> for RecordVisitor {
		type Value = Record;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a map of field names to values")
		}

		fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
			let mut record = Record::new();
			while let Some((name, value)) = map.next_entry::<String, Value>()? {
				if record.insert(name.clone(), value).is_some() {
					return Err(de::Error::custom(format!("duplicate field `{name}`")));
				}
			}
			Ok(record)
		}
	}

	impl<'de> Deserialize<'de> for Value {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_any(ValueVisitor)
		}
	}

	impl<'de> Deserialize<'de> for Record {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_map(RecordVisitor)
		}
	}
}
