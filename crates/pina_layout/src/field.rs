use std::fmt;
use std::sync::Arc;

use crate::codec::StructCodec;
use crate::kind::PrimitiveKind;
use crate::layout::Layout;
use crate::layout::WireType;

/// What a field holds on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Primitive(PrimitiveKind),
	/// An inline nested struct. The nested codec is shared, never copied.
	Struct(Arc<StructCodec>),
}

impl FieldKind {
	pub fn width(&self) -> usize {
		match self {
			Self::Primitive(kind) => kind.width(),
			Self::Struct(codec) => codec.fixed_size(),
		}
	}
}

impl From<PrimitiveKind> for FieldKind {
	fn from(kind: PrimitiveKind) -> Self {
		Self::Primitive(kind)
	}
}

impl From<Arc<StructCodec>> for FieldKind {
	fn from(codec: Arc<StructCodec>) -> Self {
		Self::Struct(codec)
	}
}

impl From<StructCodec> for FieldKind {
	fn from(codec: StructCodec) -> Self {
		Self::Struct(Arc::new(codec))
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive(kind) => write!(f, "{kind}"),
			Self::Struct(codec) => write!(f, "struct {}", codec.name()),
		}
	}
}

/// A named field in a struct layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
	name: String,
	kind: FieldKind,
}

impl FieldDescriptor {
	pub fn new(name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
		Self {
			name: name.into(),
			kind: kind.into(),
		}
	}

	pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
		Self::new(name, kind)
	}

	pub fn nested(name: impl Into<String>, codec: Arc<StructCodec>) -> Self {
		Self::new(name, codec)
	}

	/// A field whose kind is derived from a Rust type.
	///
	/// ```
	/// use pina_layout::FieldDescriptor;
	/// use pina_layout::PodU64;
	/// use pina_layout::PrimitiveKind;
	///
	/// let price = FieldDescriptor::of::<PodU64>("price");
	/// assert_eq!(price.width(), 8);
	/// assert_eq!(
	/// 	price,
	/// 	FieldDescriptor::primitive("price", PrimitiveKind::U64)
	/// );
	/// ```
	pub fn of<T: WireType>(name: impl Into<String>) -> Self {
		Self::new(name, T::KIND)
	}

	/// A nested field holding another generated record type.
	pub fn layout<T: Layout>(name: impl Into<String>) -> Self {
		Self::nested(name, T::codec().clone())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> &FieldKind {
		&self.kind
	}

	pub fn width(&self) -> usize {
		self.kind.width()
	}
}
