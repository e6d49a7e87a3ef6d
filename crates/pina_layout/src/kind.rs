//! The primitive codec table.
//!
//! Every [`PrimitiveKind`] has a fixed width that never depends on the value
//! being encoded. Integers are little-endian (two's complement for signed
//! kinds), booleans take a single byte and byte arrays are copied verbatim.

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::error::PrimitiveError;
use crate::options::BoolDecoding;
use crate::value::Value;

/// Width of a Solana public key in bytes.
pub const PUBLIC_KEY_BYTES: usize = 32;

/// A fixed-width primitive wire type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
	U8,
	U16,
	U32,
	U64,
	U128,
	I8,
	I16,
	I32,
	I64,
	I128,
	Bool,
	/// A raw byte array of exactly `N` bytes.
	FixedBytes(usize),
	/// A 32 byte public key.
	PublicKey,
}

impl PrimitiveKind {
	/// Every integer kind, in declaration order.
	pub const INTEGERS: [Self; 10] = [
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U64,
		Self::U128,
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::I128,
	];

	/// The encoded width in bytes.
	pub const fn width(self) -> usize {
		match self {
			Self::U8 | Self::I8 | Self::Bool => 1,
			Self::U16 | Self::I16 => 2,
			Self::U32 | Self::I32 => 4,
			Self::U64 | Self::I64 => 8,
			Self::U128 | Self::I128 => 16,
			Self::FixedBytes(len) => len,
			Self::PublicKey => PUBLIC_KEY_BYTES,
		}
	}

	pub const fn is_integer(self) -> bool {
		self.is_unsigned() || self.is_signed()
	}

	pub const fn is_unsigned(self) -> bool {
		matches!(
			self,
			Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128
		)
	}

	pub const fn is_signed(self) -> bool {
		matches!(
			self,
			Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128
		)
	}

	/// Bit width for integer kinds.
	const fn bits(self) -> u32 {
		(self.width() * 8) as u32
	}

	/// Write `value` into `buffer` at `offset` and return the number of bytes
	/// written.
	///
	/// Nothing is written unless the value fits the kind and the buffer has
	/// room for the whole encoding.
	pub fn write(
		self,
		value: &Value,
		buffer: &mut [u8],
		offset: usize,
	) -> Result<usize, PrimitiveError> {
		let width = self.width();
		let encoded = self.encode_value(value)?;
		let slot = slot_mut(self, buffer, offset)?;
		slot.copy_from_slice(&encoded[..width]);

		Ok(width)
	}

	/// Read a value from `buffer` at `offset`, decoding booleans permissively.
	pub fn read(self, buffer: &[u8], offset: usize) -> Result<(Value, usize), PrimitiveError> {
		self.read_with(buffer, offset, BoolDecoding::Permissive)
	}

	/// Read a value from `buffer` at `offset` with an explicit boolean policy.
	pub fn read_with(
		self,
		buffer: &[u8],
		offset: usize,
		bool_decoding: BoolDecoding,
	) -> Result<(Value, usize), PrimitiveError> {
		let slot = slot(self, buffer, offset)?;
		let value = match self {
			Self::U8 => Value::Unsigned(u128::from(slot[0])),
			Self::U16 => Value::Unsigned(u128::from(u16::from_le_bytes(le_array(slot)))),
			Self::U32 => Value::Unsigned(u128::from(u32::from_le_bytes(le_array(slot)))),
			Self::U64 => Value::Unsigned(u128::from(u64::from_le_bytes(le_array(slot)))),
			Self::U128 => Value::Unsigned(u128::from_le_bytes(le_array(slot))),
			Self::I8 => Value::Signed(i128::from(slot[0] as i8)),
			Self::I16 => Value::Signed(i128::from(i16::from_le_bytes(le_array(slot)))),
			Self::I32 => Value::Signed(i128::from(i32::from_le_bytes(le_array(slot)))),
			Self::I64 => Value::Signed(i128::from(i64::from_le_bytes(le_array(slot)))),
			Self::I128 => Value::Signed(i128::from_le_bytes(le_array(slot))),
			Self::Bool => {
				match (slot[0], bool_decoding) {
					(0, _) => Value::Bool(false),
					(1, _) | (_, BoolDecoding::Permissive) => Value::Bool(true),
					(byte, BoolDecoding::Strict) => return Err(PrimitiveError::InvalidBool { byte }),
				}
			}
			Self::FixedBytes(_) | Self::PublicKey => Value::Bytes(slot.to_vec()),
		};

		Ok((value, self.width()))
	}

	/// Produce the encoding of `value` without touching any caller buffer.
	///
	/// Integers are staged in a 16 byte scratch array; only the first
	/// `width()` bytes are meaningful.
	fn encode_value(self, value: &Value) -> Result<Vec<u8>, PrimitiveError> {
		match (self, value) {
			(Self::Bool, Value::Bool(flag)) => Ok(vec![u8::from(*flag)]),
			(Self::FixedBytes(_) | Self::PublicKey, Value::Bytes(bytes)) => {
				if bytes.len() == self.width() {
					Ok(bytes.clone())
				} else {
					Err(PrimitiveError::Length {
						kind: self,
						expected: self.width(),
						actual: bytes.len(),
					})
				}
			}
			(kind, Value::Unsigned(_) | Value::Signed(_)) if kind.is_integer() => {
				let raw = self.check_range(value)?;
				Ok(raw.to_le_bytes().to_vec())
			}
			_ => {
				Err(PrimitiveError::TypeMismatch {
					kind: self,
					found: value.kind(),
					actual: value.to_string(),
				})
			}
		}
	}

	/// Validate that an integer value fits this kind and return its two's
	/// complement bit pattern widened to 128 bits.
	fn check_range(self, value: &Value) -> Result<u128, PrimitiveError> {
		let out_of_range = || {
			PrimitiveError::Range {
				kind: self,
				value: value.to_string(),
			}
		};
		let bits = self.bits();

		if self.is_unsigned() {
			let n = match *value {
				Value::Unsigned(n) => n,
				Value::Signed(n) => u128::try_from(n).map_err(|_| out_of_range())?,
				_ => return Err(out_of_range()),
			};
			if bits < 128 && n >> bits != 0 {
				return Err(out_of_range());
			}
			return Ok(n);
		}

		let n = match *value {
			Value::Signed(n) => n,
			Value::Unsigned(n) => i128::try_from(n).map_err(|_| out_of_range())?,
			_ => return Err(out_of_range()),
		};
		if bits < 128 {
			let min = -(1i128 << (bits - 1));
			let max = (1i128 << (bits - 1)) - 1;
			if n < min || n > max {
				return Err(out_of_range());
			}
		}

		Ok(n as u128)
	}
}

fn slot(kind: PrimitiveKind, buffer: &[u8], offset: usize) -> Result<&[u8], PrimitiveError> {
	let width = kind.width();
	let available = buffer.len().saturating_sub(offset);
	if available < width {
		return Err(PrimitiveError::BufferTooShort {
			kind,
			offset,
			needed: width,
			available,
		});
	}

	Ok(&buffer[offset..offset + width])
}

fn slot_mut(
	kind: PrimitiveKind,
	buffer: &mut [u8],
	offset: usize,
) -> Result<&mut [u8], PrimitiveError> {
	let width = kind.width();
	let available = buffer.len().saturating_sub(offset);
	if available < width {
		return Err(PrimitiveError::BufferTooShort {
			kind,
			offset,
			needed: width,
			available,
		});
	}

	Ok(&mut buffer[offset..offset + width])
}

/// Copy a slot into a fixed array. `slot` always has the exact width of the
/// target integer.
fn le_array<const N: usize>(slot: &[u8]) -> [u8; N] {
	let mut bytes = [0u8; N];
	bytes.copy_from_slice(slot);
	bytes
}

impl fmt::Display for PrimitiveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::U8 => f.write_str("u8"),
			Self::U16 => f.write_str("u16"),
			Self::U32 => f.write_str("u32"),
			Self::U64 => f.write_str("u64"),
			Self::U128 => f.write_str("u128"),
			Self::I8 => f.write_str("i8"),
			Self::I16 => f.write_str("i16"),
			Self::I32 => f.write_str("i32"),
			Self::I64 => f.write_str("i64"),
			Self::I128 => f.write_str("i128"),
			Self::Bool => f.write_str("bool"),
			Self::FixedBytes(len) => write!(f, "[u8; {len}]"),
			Self::PublicKey => f.write_str("publicKey"),
		}
	}
}

impl FromStr for PrimitiveKind {
	type Err = LayoutError;

	/// Parse a type name as it appears in generated structs, e.g. `u8`,
	/// `PodU64`, `Address` or `[u8; 32]`.
	fn from_str(ty: &str) -> Result<Self, Self::Err> {
		let kind = match ty.trim() {
			"u8" => Self::U8,
			"u16" | "PodU16" => Self::U16,
			"u32" | "PodU32" => Self::U32,
			"u64" | "PodU64" => Self::U64,
			"u128" | "PodU128" => Self::U128,
			"i8" => Self::I8,
			"i16" | "PodI16" => Self::I16,
			"i32" | "PodI32" => Self::I32,
			"i64" | "PodI64" => Self::I64,
			"i128" | "PodI128" => Self::I128,
			"bool" | "PodBool" => Self::Bool,
			"publicKey" | "Address" | "Pubkey" => Self::PublicKey,
			other => {
				parse_byte_array(other)
					.map(Self::FixedBytes)
					.ok_or_else(|| LayoutError::UnknownType(other.to_owned()))?
			}
		};

		Ok(kind)
	}
}

/// Try to parse `[u8; N]` and return `N`.
fn parse_byte_array(ty: &str) -> Option<usize> {
	let inner = ty.strip_prefix('[')?.strip_suffix(']')?;
	let (elem, size) = inner.split_once(';')?;
	if elem.trim() != "u8" {
		return None;
	}
	size.trim().parse().ok()
}
