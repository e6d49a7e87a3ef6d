//! Fixed-width little-endian struct codecs for Solana account and instruction
//! data.
//!
//! A [`StructCodec`] is an ordered list of [`FieldDescriptor`]s. Each field is
//! a [`PrimitiveKind`] (or a nested codec) with a width known up front, so the
//! size of every record is fixed and the wire layout is simply the fields
//! back to back:
//!
//! ```
//! use pina_layout::PrimitiveKind;
//! use pina_layout::Record;
//! use pina_layout::struct_codec;
//!
//! let codec = struct_codec!("AcceptOfferParams", [
//! 	("escrowPaymentBump", PrimitiveKind::U8),
//! 	("freeTradeStateBump", PrimitiveKind::U8),
//! 	("sellerTradeStateBump", PrimitiveKind::U8),
//! 	("programAsSignerBump", PrimitiveKind::U8),
//! ]);
//!
//! let record = Record::new()
//! 	.with("escrowPaymentBump", 1u8)
//! 	.with("freeTradeStateBump", 2u8)
//! 	.with("sellerTradeStateBump", 3u8)
//! 	.with("programAsSignerBump", 4u8);
//!
//! assert_eq!(codec.fixed_size(), 4);
//! assert_eq!(codec.encode(&record)?, [1, 2, 3, 4]);
//! assert_eq!(codec.decode(&[1, 2, 3, 4], 0)?, (record, 4));
//! # Ok::<(), pina_layout::CodecError>(())
//! ```

#[cfg(feature = "logs")]
macro_rules! log {
	($level:ident, $($arg:tt)+) => {
		::log::$level!(target: "pina_layout", $($arg)+)
	};
}

#[cfg(not(feature = "logs"))]
macro_rules! log {
	($level:ident, $($arg:tt)+) => {
		if false {
			let _ = format_args!($($arg)+);
		}
	};
}

mod codec;
mod error;
mod field;
mod kind;
mod layout;
mod options;
mod pod;
mod value;

pub use bytemuck;
pub use solana_address::Address;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::field::*;
pub use crate::kind::*;
pub use crate::layout::*;
pub use crate::options::*;
pub use crate::pod::*;
pub use crate::value::*;

/// Declare a lazily built, shared [`StructCodec`] and evaluate to a
/// `&'static Arc<StructCodec>`.
///
/// Each entry is a field name and anything convertible into a
/// [`FieldKind`]: a [`PrimitiveKind`] or the `Arc` of a nested codec.
///
/// Generated layouts are fixed at compile time, so an invalid field list (an
/// empty or duplicate name, a zero-width array) panics on first use.
#[macro_export]
macro_rules! struct_codec {
	($name:expr, [$(($field:expr, $kind:expr)),* $(,)?]) => {{
		static CODEC: ::std::sync::LazyLock<::std::sync::Arc<$crate::StructCodec>> =
			::std::sync::LazyLock::new(|| {
				let fields = [$($crate::FieldDescriptor::new($field, $kind)),*];
				match $crate::StructCodec::new($name, fields) {
					Ok(codec) => ::std::sync::Arc::new(codec),
					Err(error) => panic!("invalid layout: {error}"),
				}
			});
		&*CODEC
	}};
}
