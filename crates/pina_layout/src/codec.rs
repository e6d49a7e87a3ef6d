//! Struct codecs: an ordered field list composed into a fixed-size record
//! layout.

use std::collections::HashSet;
use std::fmt;

use crate::error::CodecError;
use crate::error::LayoutError;
use crate::field::FieldDescriptor;
use crate::field::FieldKind;
use crate::options::CodecOptions;
use crate::value::Record;
use crate::value::Value;

/// A fixed-width, little-endian record layout.
///
/// Fields are laid out back to back in declaration order with no padding,
/// tags or length prefixes. The total size is computed once when the codec is
/// built.
///
/// ```
/// use pina_layout::FieldDescriptor;
/// use pina_layout::PrimitiveKind;
/// use pina_layout::Record;
/// use pina_layout::StructCodec;
///
/// let codec = StructCodec::new("UpdateListingParams", [FieldDescriptor::primitive(
/// 	"newPrice",
/// 	PrimitiveKind::U64,
/// )])?;
///
/// let record = Record::new().with("newPrice", 500u64);
/// let bytes = codec.encode(&record)?;
/// assert_eq!(bytes, 500u64.to_le_bytes());
///
/// let (decoded, consumed) = codec.decode(&bytes, 0)?;
/// assert_eq!(decoded, record);
/// assert_eq!(consumed, 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct StructCodec {
	name: String,
	fields: Box<[FieldDescriptor]>,
	offsets: Box<[usize]>,
	fixed_size: usize,
}

impl StructCodec {
	/// Build a codec from a diagnostic name and an ordered field list.
	pub fn new<I>(name: impl Into<String>, fields: I) -> Result<Self, LayoutError>
	where
		I: IntoIterator<Item = FieldDescriptor>,
	{
		let name = name.into();
		let fields: Box<[FieldDescriptor]> = fields.into_iter().collect();
		let mut seen = HashSet::with_capacity(fields.len());
		let mut offsets = Vec::with_capacity(fields.len());
		let mut fixed_size = 0usize;

		for field in &fields {
			if field.name().is_empty() {
				return Err(LayoutError::EmptyFieldName { codec: name });
			}
			if !seen.insert(field.name()) {
				return Err(LayoutError::DuplicateField {
					field: field.name().to_owned(),
					codec: name,
				});
			}
			if field.width() == 0 {
				return Err(LayoutError::ZeroWidthField {
					field: field.name().to_owned(),
					codec: name,
				});
			}

			offsets.push(fixed_size);
			let Some(size) = fixed_size.checked_add(field.width()) else {
				return Err(LayoutError::SizeOverflow {
					field: field.name().to_owned(),
					codec: name,
				});
			};
			fixed_size = size;
		}

		Ok(Self {
			name,
			fields,
			offsets: offsets.into_boxed_slice(),
			fixed_size,
		})
	}

	/// The diagnostic name used in errors and layout tables.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.name() == name)
	}

	/// Byte offset of a field from the start of the record.
	pub fn offset_of(&self, name: &str) -> Option<usize> {
		self.fields
			.iter()
			.position(|field| field.name() == name)
			.map(|index| self.offsets[index])
	}

	/// The encoded size of every record of this layout.
	pub const fn fixed_size(&self) -> usize {
		self.fixed_size
	}

	/// Encode `record` into a freshly allocated buffer of exactly
	/// [`fixed_size`](Self::fixed_size) bytes.
	pub fn encode(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
		self.encode_with(record, &CodecOptions::default())
	}

	pub fn encode_with(&self, record: &Record, options: &CodecOptions) -> Result<Vec<u8>, CodecError> {
		let mut buffer = vec![0u8; self.fixed_size];
		if let Err(error) = self.encode_fields(record, &mut buffer, options) {
			log!(debug, "failed to encode `{}`: {}", self.name, error);
			return Err(error);
		}
		log!(trace, "encoded `{}` into {} bytes", self.name, buffer.len());

		Ok(buffer)
	}

	/// Encode `record` into `buffer` at `offset`, returning the number of bytes
	/// written.
	///
	/// The record is encoded into a scratch buffer first, so `buffer` is only
	/// modified when the whole record encodes and fits.
	pub fn encode_into(
		&self,
		record: &Record,
		buffer: &mut [u8],
		offset: usize,
	) -> Result<usize, CodecError> {
		let encoded = self.encode(record)?;
		let available = buffer.len().saturating_sub(offset);
		if available < self.fixed_size {
			return Err(self.buffer_too_short(offset, available));
		}
		buffer[offset..offset + self.fixed_size].copy_from_slice(&encoded);

		Ok(self.fixed_size)
	}

	/// Decode one record from `buffer` at `offset`, returning it with the
	/// number of bytes consumed.
	pub fn decode(&self, buffer: &[u8], offset: usize) -> Result<(Record, usize), CodecError> {
		self.decode_with(buffer, offset, &CodecOptions::default())
	}

	pub fn decode_with(
		&self,
		buffer: &[u8],
		offset: usize,
		options: &CodecOptions,
	) -> Result<(Record, usize), CodecError> {
		let available = buffer.len().saturating_sub(offset);
		if available < self.fixed_size {
			let error = self.buffer_too_short(offset, available);
			log!(debug, "failed to decode `{}`: {}", self.name, error);
			return Err(error);
		}

		let data = &buffer[offset..offset + self.fixed_size];
		let record = self.decode_fields(data, options).inspect_err(|error| {
			log!(debug, "failed to decode `{}`: {}", self.name, error);
		})?;
		log!(trace, "decoded `{}` from offset {}", self.name, offset);

		Ok((record, self.fixed_size))
	}

	/// A printable table of field offsets, widths and kinds.
	pub fn describe(&self) -> LayoutTable<'_> {
		LayoutTable { codec: self }
	}

	/// `buffer` is exactly `fixed_size` bytes long.
	fn encode_fields(
		&self,
		record: &Record,
		buffer: &mut [u8],
		options: &CodecOptions,
	) -> Result<(), CodecError> {
		for (field, &offset) in self.fields.iter().zip(self.offsets.iter()) {
			let Some(value) = record.get(field.name()) else {
				return Err(CodecError::MissingField {
					codec: self.name.clone(),
					field: field.name().to_owned(),
				});
			};

			match field.kind() {
				FieldKind::Primitive(kind) => {
					kind.write(value, buffer, offset)
						.map_err(|error| CodecError::from_primitive(error, &self.name, field.name()))?;
				}
				FieldKind::Struct(nested) => {
					let Value::Struct(inner) = value else {
						return Err(CodecError::TypeMismatch {
							codec: self.name.clone(),
							field: field.name().to_owned(),
							expected: field.kind().to_string(),
							found: value.kind(),
							actual: value.to_string(),
						});
					};
					let slot = &mut buffer[offset..offset + nested.fixed_size];
					nested
						.encode_fields(inner, slot, options)
						.map_err(|error| error.nested_in(&self.name, field.name()))?;
				}
			}
		}

		if options.deny_unknown_fields
			&& let Some(unknown) = record.names().find(|name| self.field(name).is_none())
		{
			return Err(CodecError::UnexpectedField {
				codec: self.name.clone(),
				field: unknown.to_owned(),
			});
		}

		Ok(())
	}

	/// `data` is exactly `fixed_size` bytes long.
	fn decode_fields(&self, data: &[u8], options: &CodecOptions) -> Result<Record, CodecError> {
		let mut record = Record::new();

		for (field, &offset) in self.fields.iter().zip(self.offsets.iter()) {
			let value = match field.kind() {
				FieldKind::Primitive(kind) => {
					kind.read_with(data, offset, options.bool_decoding)
						.map_err(|error| CodecError::from_primitive(error, &self.name, field.name()))?
						.0
				}
				FieldKind::Struct(nested) => {
					let slot = &data[offset..offset + nested.fixed_size];
					let inner = nested
						.decode_fields(slot, options)
						.map_err(|error| error.nested_in(&self.name, field.name()))?;
					Value::Struct(inner)
				}
			};
			record.insert(field.name(), value);
		}

		Ok(record)
	}

	/// Name the first field that does not fit in `available` bytes.
	pub(crate) fn buffer_too_short(&self, offset: usize, available: usize) -> CodecError {
		let field = self
			.fields
			.iter()
			.zip(self.offsets.iter())
			.find(|(field, start)| *start + field.width() > available)
			.map(|(field, _)| field.name().to_owned())
			.unwrap_or_default();

		CodecError::BufferTooShort {
			codec: self.name.clone(),
			field,
			offset,
			needed: self.fixed_size,
			available,
		}
	}
}

/// Display adapter returned by [`StructCodec::describe`].
pub struct LayoutTable<'a> {
	codec: &'a StructCodec,
}

impl fmt::Display for LayoutTable<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let codec = self.codec;
		writeln!(f, "{} ({} bytes)", codec.name, codec.fixed_size)?;
		write!(f, "offset  width  field")?;
		for (field, offset) in codec.fields.iter().zip(codec.offsets.iter()) {
			write!(
				f,
				"\n{offset:>6} {:>6}  {}: {}",
				field.width(),
				field.name(),
				field.kind()
			)?;
		}
		Ok(())
	}
}
