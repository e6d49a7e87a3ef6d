//! Typed layouts for the reward center program's accounts and instruction
//! arguments.
//!
//! Every type is a `#[repr(C)]` [`bytemuck::Pod`] struct that also implements
//! [`pina_layout::Layout`], so it can be read zero-copy from account data or
//! encoded field by field through its [`pina_layout::StructCodec`].

mod generated;

pub use generated::*;
