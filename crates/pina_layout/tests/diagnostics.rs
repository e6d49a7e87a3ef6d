use std::sync::Arc;

use pina_layout::CodecError;
use pina_layout::FieldDescriptor;
use pina_layout::PrimitiveKind;
use pina_layout::Record;
use pina_layout::StructCodec;

fn buy_listing_params() -> StructCodec {
	StructCodec::new("BuyListingParams", [
		FieldDescriptor::primitive("escrowPaymentBump", PrimitiveKind::U8),
		FieldDescriptor::primitive("freeTradeStateBump", PrimitiveKind::U8),
		FieldDescriptor::primitive("sellerTradeStateBump", PrimitiveKind::U8),
		FieldDescriptor::primitive("programAsSignerBump", PrimitiveKind::U8),
	])
	.unwrap()
}

fn listing() -> StructCodec {
	StructCodec::new("Listing", [
		FieldDescriptor::primitive("discriminator", PrimitiveKind::FixedBytes(8)),
		FieldDescriptor::primitive("seller", PrimitiveKind::PublicKey),
		FieldDescriptor::primitive("price", PrimitiveKind::U64),
		FieldDescriptor::primitive("createdAt", PrimitiveKind::I64),
		FieldDescriptor::primitive("isActive", PrimitiveKind::Bool),
	])
	.unwrap()
}

#[test]
fn bump_layout_table() {
	insta::assert_snapshot!(buy_listing_params().describe().to_string(), @r"
BuyListingParams (4 bytes)
offset  width  field
     0      1  escrowPaymentBump: u8
     1      1  freeTradeStateBump: u8
     2      1  sellerTradeStateBump: u8
     3      1  programAsSignerBump: u8
");
}

#[test]
fn mixed_layout_table() {
	insta::assert_snapshot!(listing().describe().to_string(), @r"
Listing (57 bytes)
offset  width  field
     0      8  discriminator: [u8; 8]
     8     32  seller: publicKey
    40      8  price: u64
    48      8  createdAt: i64
    56      1  isActive: bool
");
}

#[test]
fn nested_layout_table() {
	let rules = Arc::new(
		StructCodec::new("RewardRules", [
			FieldDescriptor::primitive("sellerRewardPayoutBasisPoints", PrimitiveKind::U16),
			FieldDescriptor::primitive("mathematicalOperand", PrimitiveKind::U8),
			FieldDescriptor::primitive("payoutNumeral", PrimitiveKind::U16),
		])
		.unwrap(),
	);
	let params = StructCodec::new("EditRewardCenterParams", [FieldDescriptor::nested(
		"rewardRules",
		rules,
	)])
	.unwrap();

	insta::assert_snapshot!(params.describe().to_string(), @r"
EditRewardCenterParams (5 bytes)
offset  width  field
     0      5  rewardRules: struct RewardRules
");
}

#[test]
fn range_error_message() {
	let record = Record::new()
		.with("escrowPaymentBump", 256u16)
		.with("freeTradeStateBump", 2u8)
		.with("sellerTradeStateBump", 3u8)
		.with("programAsSignerBump", 4u8);
	let error = buy_listing_params().encode(&record).unwrap_err();

	assert!(matches!(error, CodecError::Range { .. }));
	insta::assert_snapshot!(error.to_string(), @"`BuyListingParams.escrowPaymentBump`: value 256 does not fit in `u8`");
}

#[test]
fn missing_field_message() {
	let record = Record::new()
		.with("escrowPaymentBump", 1u8)
		.with("freeTradeStateBump", 2u8)
		.with("sellerTradeStateBump", 3u8);
	let error = buy_listing_params().encode(&record).unwrap_err();

	insta::assert_snapshot!(error.to_string(), @"`BuyListingParams.programAsSignerBump`: missing field");
}

#[test]
fn short_buffer_message() {
	let error = buy_listing_params().decode(&[1, 2, 3], 0).unwrap_err();

	insta::assert_snapshot!(error.to_string(), @"`BuyListingParams.programAsSignerBump`: buffer too short, need 4 bytes at offset 0, only 3 available");
}

#[test]
fn length_error_message() {
	let record = Record::new()
		.with("discriminator", [0u8; 8])
		.with("seller", vec![1u8; 20])
		.with("price", 1u64)
		.with("createdAt", -1i64)
		.with("isActive", true);
	let error = listing().encode(&record).unwrap_err();

	insta::assert_snapshot!(error.to_string(), @"`Listing.seller`: `publicKey` expects 32 bytes, got 20");
}

#[test]
fn type_mismatch_message() {
	let record = Record::new()
		.with("discriminator", [0u8; 8])
		.with("seller", [1u8; 32])
		.with("price", 1u64)
		.with("createdAt", -1i64)
		.with("isActive", 1u8);
	let error = listing().encode(&record).unwrap_err();

	insta::assert_snapshot!(error.to_string(), @"`Listing.isActive`: expected `bool`, got integer 1");
}
