use typed_builder::TypedBuilder;

/// How a bool byte is interpreted on decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoolDecoding {
	/// `0` is false, any other byte is true.
	#[default]
	Permissive,
	/// Only `0` and `1` are accepted.
	Strict,
}

/// Runtime options for [`StructCodec`](crate::StructCodec) operations.
///
/// ```
/// use pina_layout::BoolDecoding;
/// use pina_layout::CodecOptions;
///
/// let options = CodecOptions::builder()
/// 	.bool_decoding(BoolDecoding::Strict)
/// 	.build();
/// assert!(options.deny_unknown_fields);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct CodecOptions {
	#[builder(default)]
	pub bool_decoding: BoolDecoding,
	/// Reject records that carry fields the layout does not declare.
	#[builder(default = true)]
	pub deny_unknown_fields: bool,
}

impl Default for CodecOptions {
	fn default() -> Self {
		Self::builder().build()
	}
}
