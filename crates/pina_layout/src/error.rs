use thiserror::Error;

use crate::kind::PrimitiveKind;
use crate::value::ValueKind;

/// Errors from a single primitive read or write.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrimitiveError {
	#[error("value {value} does not fit in `{kind}`")]
	Range { kind: PrimitiveKind, value: String },
	#[error("`{kind}` expects {expected} bytes, got {actual}")]
	Length {
		kind: PrimitiveKind,
		expected: usize,
		actual: usize,
	},
	#[error("expected a `{kind}` value, got {found} {actual}")]
	TypeMismatch {
		kind: PrimitiveKind,
		found: ValueKind,
		actual: String,
	},
	#[error("`{kind}` needs {needed} bytes at offset {offset}, only {available} available")]
	BufferTooShort {
		kind: PrimitiveKind,
		offset: usize,
		needed: usize,
		available: usize,
	},
	#[error("invalid bool byte {byte:#04x}")]
	InvalidBool { byte: u8 },
}

/// Errors from encoding or decoding a whole struct.
///
/// Every variant names the struct (`codec`) and the offending field. Fields
/// inside nested structs are reported as a dotted path, e.g.
/// `rewardRules.payoutNumeral`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
	#[error("`{codec}.{field}`: value {value} does not fit in `{kind}`")]
	Range {
		codec: String,
		field: String,
		kind: PrimitiveKind,
		value: String,
	},
	#[error("`{codec}.{field}`: `{kind}` expects {expected} bytes, got {actual}")]
	Length {
		codec: String,
		field: String,
		kind: PrimitiveKind,
		expected: usize,
		actual: usize,
	},
	#[error("`{codec}.{field}`: missing field")]
	MissingField { codec: String, field: String },
	#[error("`{codec}.{field}`: expected `{expected}`, got {found} {actual}")]
	TypeMismatch {
		codec: String,
		field: String,
		expected: String,
		found: ValueKind,
		actual: String,
	},
	#[error("`{codec}.{field}`: field is not part of the layout")]
	UnexpectedField { codec: String, field: String },
	#[error(
		"`{codec}.{field}`: buffer too short, need {needed} bytes at offset {offset}, only \
		 {available} available"
	)]
	BufferTooShort {
		codec: String,
		field: String,
		offset: usize,
		needed: usize,
		available: usize,
	},
	#[error("`{codec}.{field}`: invalid bool byte {byte:#04x}")]
	InvalidBool {
		codec: String,
		field: String,
		byte: u8,
	},
}

impl CodecError {
	/// Attach struct and field names to a primitive failure.
	pub(crate) fn from_primitive(error: PrimitiveError, codec: &str, field: &str) -> Self {
		let codec = codec.to_owned();
		let field = field.to_owned();
		match error {
			PrimitiveError::Range { kind, value } => {
				Self::Range {
					codec,
					field,
					kind,
					value,
				}
			}
			PrimitiveError::Length {
				kind,
				expected,
				actual,
			} => {
				Self::Length {
					codec,
					field,
					kind,
					expected,
					actual,
				}
			}
			PrimitiveError::TypeMismatch {
				kind,
				found,
				actual,
			} => {
				Self::TypeMismatch {
					codec,
					field,
					expected: kind.to_string(),
					found,
					actual,
				}
			}
			PrimitiveError::BufferTooShort {
				offset,
				needed,
				available,
				..
			} => {
				Self::BufferTooShort {
					codec,
					field,
					offset,
					needed,
					available,
				}
			}
			PrimitiveError::InvalidBool { byte } => Self::InvalidBool { codec, field, byte },
		}
	}

	/// Re-label an error raised by a nested struct so that it names the outer
	/// struct and the full field path.
	#[must_use]
	pub(crate) fn nested_in(mut self, outer_codec: &str, outer_field: &str) -> Self {
		let (codec, field) = self.location_mut();
		*codec = outer_codec.to_owned();
		*field = format!("{outer_field}.{field}");
		self
	}

	/// The diagnostic name of the struct that failed.
	pub fn codec(&self) -> &str {
		match self {
			Self::Range { codec, .. }
			| Self::Length { codec, .. }
			| Self::MissingField { codec, .. }
			| Self::TypeMismatch { codec, .. }
			| Self::UnexpectedField { codec, .. }
			| Self::BufferTooShort { codec, .. }
			| Self::InvalidBool { codec, .. } => codec,
		}
	}

	/// The offending field, as a dotted path for nested fields.
	pub fn field(&self) -> &str {
		match self {
			Self::Range { field, .. }
			| Self::Length { field, .. }
			| Self::MissingField { field, .. }
			| Self::TypeMismatch { field, .. }
			| Self::UnexpectedField { field, .. }
			| Self::BufferTooShort { field, .. }
			| Self::InvalidBool { field, .. } => field,
		}
	}

	fn location_mut(&mut self) -> (&mut String, &mut String) {
		match self {
			Self::Range { codec, field, .. }
			| Self::Length { codec, field, .. }
			| Self::MissingField { codec, field }
			| Self::TypeMismatch { codec, field, .. }
			| Self::UnexpectedField { codec, field }
			| Self::BufferTooShort { codec, field, .. }
			| Self::InvalidBool { codec, field, .. } => (codec, field),
		}
	}
}

/// Errors from building a layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
	#[error("`{codec}`: field names must not be empty")]
	EmptyFieldName { codec: String },
	#[error("`{codec}`: duplicate field `{field}`")]
	DuplicateField { codec: String, field: String },
	#[error("`{codec}.{field}`: fields must be at least one byte wide")]
	ZeroWidthField { codec: String, field: String },
	#[error("`{codec}.{field}`: layout size overflows `usize`")]
	SizeOverflow { codec: String, field: String },
	#[error("unknown type `{0}`")]
	UnknownType(String),
	#[error("`{codec}`: layout is {expected} bytes but the Rust type is {actual} bytes")]
	SizeMismatch {
		codec: String,
		expected: usize,
		actual: usize,
	},
}
