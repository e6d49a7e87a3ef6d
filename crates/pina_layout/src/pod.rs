//! Alignment-safe integer wrappers for `#[repr(C)]` record structs.
//!
//! Account and instruction data is a flat byte buffer with alignment 1.
//! Native integers wider than a byte would force padding into a
//! `bytemuck::Pod` struct, so these wrappers store little-endian byte arrays
//! instead. Each wrapper is also a [`WireType`], which lets generated layouts
//! derive their field kinds from the struct definition.

use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::kind::PrimitiveKind;
use crate::layout::WireType;
use crate::value::Value;

/// A `bool` stored as one byte. Any nonzero byte reads as `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodBool(pub u8);

impl PodBool {
	pub const fn from_bool(flag: bool) -> Self {
		Self(flag as u8)
	}

	pub const fn get(self) -> bool {
		self.0 != 0
	}
}

impl From<bool> for PodBool {
	fn from(flag: bool) -> Self {
		Self::from_bool(flag)
	}
}

impl From<PodBool> for bool {
	fn from(pod: PodBool) -> Self {
		pod.get()
	}
}

impl WireType for PodBool {
	const KIND: PrimitiveKind = PrimitiveKind::Bool;

	fn to_value(&self) -> Value {
		Value::Bool(self.get())
	}

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool().map(Self::from_bool)
	}
}

/// Declares a little-endian integer wrapper and wires it into the codec.
macro_rules! pod_int {
	($(#[$doc:meta])* $pod:ident, $int:ty, $kind:ident) => {
		$(#[$doc])*
		#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
		#[repr(transparent)]
		pub struct $pod(pub [u8; size_of::<$int>()]);

		impl $pod {
			pub const fn from_primitive(n: $int) -> Self {
				Self(n.to_le_bytes())
			}

			pub const fn get(self) -> $int {
				<$int>::from_le_bytes(self.0)
			}
		}

		impl From<$int> for $pod {
			fn from(n: $int) -> Self {
				Self::from_primitive(n)
			}
		}

		impl From<$pod> for $int {
			fn from(pod: $pod) -> Self {
				pod.get()
			}
		}

		impl WireType for $pod {
			const KIND: PrimitiveKind = PrimitiveKind::$kind;

			fn to_value(&self) -> Value {
				self.get().into()
			}

			fn from_value(value: &Value) -> Option<Self> {
				<$int as WireType>::from_value(value).map(Self::from_primitive)
			}
		}
	};
}

pod_int!(
	/// `u16` that can be used in `Pod`s.
	PodU16, u16, U16
);
pod_int!(
	/// `i16` that can be used in `Pod`s.
	PodI16, i16, I16
);
pod_int!(
	/// `u32` that can be used in `Pod`s.
	PodU32, u32, U32
);
pod_int!(
	/// `i32` that can be used in `Pod`s.
	PodI32, i32, I32
);
pod_int!(
	/// `u64` that can be used in `Pod`s.
	PodU64, u64, U64
);
pod_int!(
	/// `i64` that can be used in `Pod`s.
	PodI64, i64, I64
);
pod_int!(
	/// `u128` that can be used in `Pod`s.
	PodU128, u128, U128
);
pod_int!(
	/// `i128` that can be used in `Pod`s.
	PodI128, i128, I128
);

#[cfg(test)]
mod tests {
	use bytemuck::try_from_bytes;

	use super::*;

	#[test]
	fn pod_bool_reads_any_nonzero_as_true() {
		for byte in 0..=u8::MAX {
			let pod = *try_from_bytes::<PodBool>(&[byte]).unwrap();
			assert_eq!(byte != 0, bool::from(pod));
		}
	}

	#[test]
	fn pod_ints_are_little_endian() {
		assert_eq!(PodU16::from_primitive(0x0102).0, [0x02, 0x01]);
		assert_eq!(PodI32::from_primitive(-1).0, [0xff; 4]);
		assert_eq!(
			u64::from(*try_from_bytes::<PodU64>(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap()),
			1
		);
		assert_eq!(
			i128::from(*try_from_bytes::<PodI128>(&[0xff; 16]).unwrap()),
			-1
		);
	}

	#[test]
	fn pods_have_alignment_one() {
		assert_eq!(align_of::<PodU16>(), 1);
		assert_eq!(align_of::<PodU64>(), 1);
		assert_eq!(align_of::<PodI128>(), 1);
	}

	#[test]
	fn wire_kinds_match_widths() {
		assert_eq!(PodU16::KIND.width(), size_of::<PodU16>());
		assert_eq!(PodI64::KIND.width(), size_of::<PodI64>());
		assert_eq!(PodU128::KIND.width(), size_of::<PodU128>());
		assert_eq!(PodBool::KIND.width(), size_of::<PodBool>());
	}

	#[test]
	fn values_convert_through_the_native_integer() {
		assert_eq!(PodU32::from_primitive(7).to_value(), Value::Unsigned(7));
		assert_eq!(PodI16::from_primitive(-7).to_value(), Value::Signed(-7));
		assert_eq!(
			PodU16::from_value(&Value::Unsigned(65_535)),
			Some(PodU16::from_primitive(u16::MAX))
		);
		assert_eq!(PodU16::from_value(&Value::Unsigned(65_536)), None);
		assert_eq!(PodU16::from_value(&Value::Bool(true)), None);
	}
}
