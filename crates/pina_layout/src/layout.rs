//! The bridge between concrete Rust record types and their codecs.

use std::sync::Arc;

use bytemuck::Pod;
use solana_address::Address;

use crate::codec::StructCodec;
use crate::error::CodecError;
use crate::error::LayoutError;
use crate::kind::PrimitiveKind;
use crate::value::Record;
use crate::value::Value;

/// A Rust type with a fixed primitive wire representation.
pub trait WireType: Sized {
	const KIND: PrimitiveKind;

	fn to_value(&self) -> Value;

	/// Convert back from a [`Value`], returning `None` when the value has the
	/// wrong category or does not fit.
	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_wire_unsigned {
	($($ty:ty => $kind:ident),*) => {
		$(
			impl WireType for $ty {
				const KIND: PrimitiveKind = PrimitiveKind::$kind;

				fn to_value(&self) -> Value {
					Value::from(*self)
				}

				fn from_value(value: &Value) -> Option<Self> {
					value.as_u128().and_then(|n| <$ty>::try_from(n).ok())
				}
			}
		)*
	};
}

macro_rules! impl_wire_signed {
	($($ty:ty => $kind:ident),*) => {
		$(
			impl WireType for $ty {
				const KIND: PrimitiveKind = PrimitiveKind::$kind;

				fn to_value(&self) -> Value {
					Value::from(*self)
				}

				fn from_value(value: &Value) -> Option<Self> {
					value.as_i128().and_then(|n| <$ty>::try_from(n).ok())
				}
			}
		)*
	};
}

impl_wire_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128);
impl_wire_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128);

impl WireType for bool {
	const KIND: PrimitiveKind = PrimitiveKind::Bool;

	fn to_value(&self) -> Value {
		Value::Bool(*self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}
}

impl<const N: usize> WireType for [u8; N] {
	const KIND: PrimitiveKind = PrimitiveKind::FixedBytes(N);

	fn to_value(&self) -> Value {
		Value::from(*self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bytes()?.try_into().ok()
	}
}

impl WireType for Address {
	const KIND: PrimitiveKind = PrimitiveKind::PublicKey;

	fn to_value(&self) -> Value {
		Value::from(self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		let bytes = value.as_bytes()?;
		if bytes.len() != size_of::<Self>() {
			return None;
		}
		Some(bytemuck::pod_read_unaligned(bytes))
	}
}

/// A concrete record type with a static layout.
///
/// Generated record modules implement this for every instruction argument
/// struct and account type.
pub trait Layout: Sized {
	/// The shared codec for this type. Usually built with
	/// [`struct_codec!`](crate::struct_codec).
	fn codec() -> &'static Arc<StructCodec>;

	fn to_record(&self) -> Record;

	fn from_record(record: &Record) -> Result<Self, CodecError>;

	fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
		Self::codec().encode(&self.to_record())
	}

	/// Decode from `data` at `offset`, returning the value and the number of
	/// bytes consumed.
	fn from_bytes(data: &[u8], offset: usize) -> Result<(Self, usize), CodecError> {
		let (record, consumed) = Self::codec().decode(data, offset)?;
		Ok((Self::from_record(&record)?, consumed))
	}
}

impl Record {
	/// Extract a typed field, labelling failures with the codec name.
	pub fn field<T: WireType>(&self, codec: &StructCodec, name: &str) -> Result<T, CodecError> {
		let value = self.get(name).ok_or_else(|| {
			CodecError::MissingField {
				codec: codec.name().to_owned(),
				field: name.to_owned(),
			}
		})?;

		T::from_value(value).ok_or_else(|| {
			CodecError::TypeMismatch {
				codec: codec.name().to_owned(),
				field: name.to_owned(),
				expected: T::KIND.to_string(),
				found: value.kind(),
				actual: value.to_string(),
			}
		})
	}

	/// Extract a nested record and convert it with its own [`Layout`].
	pub fn nested<T: Layout>(&self, codec: &StructCodec, name: &str) -> Result<T, CodecError> {
		let value = self.get(name).ok_or_else(|| {
			CodecError::MissingField {
				codec: codec.name().to_owned(),
				field: name.to_owned(),
			}
		})?;
		let Some(inner) = value.as_record() else {
			return Err(CodecError::TypeMismatch {
				codec: codec.name().to_owned(),
				field: name.to_owned(),
				expected: format!("struct {}", T::codec().name()),
				found: value.kind(),
				actual: value.to_string(),
			});
		};

		T::from_record(inner).map_err(|error| error.nested_in(codec.name(), name))
	}
}

/// Verify that a `Pod` record type has exactly the size of its layout.
///
/// Generated types call this from their tests; a mismatch means the Rust
/// struct and the field list have drifted apart.
pub fn check_pod_layout<T: Layout + Pod>() -> Result<(), LayoutError> {
	let codec = T::codec();
	if size_of::<T>() == codec.fixed_size() {
		return Ok(());
	}

	Err(LayoutError::SizeMismatch {
		codec: codec.name().to_owned(),
		expected: codec.fixed_size(),
		actual: size_of::<T>(),
	})
}

/// Read a `Pod` record directly from `data` at `offset`, without going through
/// a [`Record`].
///
/// The bytes are copied, so `data` needs no particular alignment.
pub fn read_pod<T: Layout + Pod>(data: &[u8], offset: usize) -> Result<T, CodecError> {
	let codec = T::codec();
	let size = size_of::<T>();
	let available = data.len().saturating_sub(offset);
	if available < size {
		return Err(codec.buffer_too_short(offset, available));
	}

	Ok(bytemuck::pod_read_unaligned(&data[offset..offset + size]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ValueKind;

	#[test]
	fn native_kinds() {
		assert_eq!(u8::KIND, PrimitiveKind::U8);
		assert_eq!(i64::KIND, PrimitiveKind::I64);
		assert_eq!(bool::KIND, PrimitiveKind::Bool);
		assert_eq!(<[u8; 8]>::KIND, PrimitiveKind::FixedBytes(8));
		assert_eq!(Address::KIND, PrimitiveKind::PublicKey);
	}

	#[test]
	fn from_value_checks_range_and_length() {
		assert_eq!(u8::from_value(&Value::Unsigned(255)), Some(255));
		assert_eq!(u8::from_value(&Value::Unsigned(256)), None);
		assert_eq!(i8::from_value(&Value::Signed(-128)), Some(-128));
		assert_eq!(u16::from_value(&Value::Signed(-1)), None);
		assert_eq!(<[u8; 2]>::from_value(&Value::Bytes(vec![1, 2])), Some([1, 2]));
		assert_eq!(<[u8; 2]>::from_value(&Value::Bytes(vec![1])), None);
		assert_eq!(Address::from_value(&Value::Bytes(vec![1; 31])), None);

		let address: Address = bytemuck::cast([4u8; 32]);
		assert_eq!(Address::from_value(&address.to_value()), Some(address));
	}

	#[test]
	fn record_field_errors_name_the_codec() {
		let codec = StructCodec::new("Price", [crate::FieldDescriptor::of::<u64>("price")]).unwrap();
		let record = Record::new().with("price", true);

		assert_eq!(
			record.field::<u64>(&codec, "price"),
			Err(CodecError::TypeMismatch {
				codec: "Price".to_owned(),
				field: "price".to_owned(),
				expected: "u64".to_owned(),
				found: ValueKind::Bool,
				actual: "true".to_owned(),
			})
		);
		assert_eq!(
			record.field::<u64>(&codec, "amount"),
			Err(CodecError::MissingField {
				codec: "Price".to_owned(),
				field: "amount".to_owned(),
			})
		);
	}
}
