use pina_layout::Address;
use pina_layout::CodecError;
use pina_layout::Layout;
use pina_layout::PodBool;
use pina_layout::PodI64;
use pina_layout::PodU64;
use pina_layout::Record;
use pina_layout::Value;
use pina_layout::check_pod_layout;
use pina_layout::read_pod;
use proptest::prelude::*;
use reward_center_client::*;

fn address(byte: u8) -> Address {
	bytemuck::cast([byte; 32])
}

fn listing() -> Listing {
	Listing {
		discriminator: LISTING_DISCRIMINATOR,
		reward_center: address(1),
		seller: address(2),
		metadata: address(3),
		price: PodU64::from_primitive(1_500_000_000),
		token_size: PodU64::from_primitive(1),
		bump: 254,
		created_at: PodI64::from_primitive(1_700_000_000),
		is_canceled: PodBool::from_bool(false),
	}
}

#[test]
fn pod_sizes_match_layouts() {
	check_pod_layout::<AcceptOfferParams>().unwrap();
	check_pod_layout::<BuyListingParams>().unwrap();
	check_pod_layout::<CloseOfferParams>().unwrap();
	check_pod_layout::<CreateListingParams>().unwrap();
	check_pod_layout::<CreateOfferParams>().unwrap();
	check_pod_layout::<CreateRewardCenterParams>().unwrap();
	check_pod_layout::<EditRewardCenterParams>().unwrap();
	check_pod_layout::<RewardRules>().unwrap();
	check_pod_layout::<UpdateListingParams>().unwrap();
	check_pod_layout::<WithdrawRewardCenterFundsParams>().unwrap();
	check_pod_layout::<Listing>().unwrap();
	check_pod_layout::<Offer>().unwrap();
}

#[test]
fn buy_listing_bumps_encode_in_order() {
	let params = BuyListingParams {
		escrow_payment_bump: 1,
		free_trade_state_bump: 2,
		seller_trade_state_bump: 3,
		program_as_signer_bump: 4,
	};

	let bytes = params.to_bytes().unwrap();
	assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
	assert_eq!(bytes, bytemuck::bytes_of(&params));
	assert_eq!(BuyListingParams::from_bytes(&bytes, 0).unwrap(), (params, 4));
}

#[test]
fn accept_offer_rejects_overflowing_bumps() {
	let record = AcceptOfferParams::default()
		.to_record()
		.with("escrowPaymentBump", 256u16);

	assert!(matches!(
		AcceptOfferParams::codec().encode(&record),
		Err(CodecError::Range { field, .. }) if field == "escrowPaymentBump"
	));
}

#[test]
fn short_instruction_data_is_rejected() {
	assert!(matches!(
		BuyListingParams::from_bytes(&[1, 2, 3], 0),
		Err(CodecError::BufferTooShort { needed: 4, available: 3, .. })
	));
	assert!(read_pod::<BuyListingParams>(&[1, 2, 3], 0).is_err());
}

#[test]
fn u64_params_are_little_endian() {
	let params = CreateListingParams {
		price: 1_000_000_000u64.into(),
		token_size: 1u64.into(),
	};
	let bytes = params.to_bytes().unwrap();

	assert_eq!(&bytes[..8], &1_000_000_000u64.to_le_bytes());
	assert_eq!(&bytes[8..], &1u64.to_le_bytes());
	assert_eq!(bytes, bytemuck::bytes_of(&params));

	let update = UpdateListingParams {
		new_price: 7u64.into(),
	};
	assert_eq!(update.to_bytes().unwrap(), 7u64.to_le_bytes());
}

#[test]
fn default_reward_center_rules() {
	let params = CreateRewardCenterParams::default();
	let rules = params.reward_rules;

	assert_eq!(rules.mathematical_operand(), Some(PayoutOperation::Divide));
	assert_eq!(u16::from(rules.payout_numeral), 5);
	assert_eq!(u16::from(rules.seller_reward_payout_basis_points), 1000);
	assert_eq!(params.to_bytes().unwrap(), [0xe8, 0x03, 0x01, 0x05, 0x00]);
}

#[test]
fn unknown_operands_are_preserved_but_not_decoded() {
	let (rules, _) = RewardRules::from_bytes(&[0, 0, 9, 0, 0], 0).unwrap();
	assert_eq!(rules.mathematical_operand, 9);
	assert_eq!(rules.mathematical_operand(), None);
}

#[test]
fn nested_record_errors_carry_the_path() {
	let record = Record::new().with(
		"rewardRules",
		Record::new()
			.with("sellerRewardPayoutBasisPoints", 70_000u32)
			.with("mathematicalOperand", 0u8)
			.with("payoutNumeral", 2u16),
	);

	let error = EditRewardCenterParams::codec().encode(&record).unwrap_err();
	assert_eq!(error.codec(), "EditRewardCenterParams");
	assert_eq!(error.field(), "rewardRules.sellerRewardPayoutBasisPoints");

	let error = EditRewardCenterParams::from_record(&record).unwrap_err();
	assert_eq!(error.field(), "rewardRules.sellerRewardPayoutBasisPoints");
}

#[test]
fn reward_center_config_loads_from_json() {
	let config = r#"{
		"rewardRules": {
			"sellerRewardPayoutBasisPoints": 1000,
			"mathematicalOperand": 0,
			"payoutNumeral": 2
		}
	}"#;
	let record: Record = serde_json::from_str(config).unwrap();
	let params = CreateRewardCenterParams::from_record(&record).unwrap();

	assert_eq!(
		params.reward_rules,
		RewardRules::new(1000, PayoutOperation::Multiple, 2)
	);
	assert_eq!(params.to_bytes().unwrap(), bytemuck::bytes_of(&params));
}

#[test]
fn listing_roundtrips_through_both_paths() {
	let listing = listing();
	let bytes = listing.to_bytes().unwrap();

	assert_eq!(bytes.len(), Listing::LEN);
	assert!(Listing::matches_discriminator(&bytes));
	assert!(!Offer::matches_discriminator(&bytes));
	assert_eq!(bytes, bytemuck::bytes_of(&listing));
	assert_eq!(read_pod::<Listing>(&bytes, 0).unwrap(), listing);
	assert_eq!(Listing::from_bytes(&bytes, 0).unwrap(), (listing, Listing::LEN));
}

#[test]
fn listing_record_exposes_addresses_as_bytes() {
	let record = listing().to_record();
	assert_eq!(record.get("seller"), Some(&Value::Bytes(vec![2; 32])));
	assert_eq!(record.get("isCanceled"), Some(&Value::Bool(false)));
	assert_eq!(Listing::codec().offset_of("price"), Some(8 + 3 * 32));
}

#[test]
fn offer_reads_at_an_offset() {
	let offer = Offer {
		discriminator: OFFER_DISCRIMINATOR,
		reward_center: address(7),
		buyer: address(8),
		metadata: address(9),
		price: PodU64::from_primitive(42),
		token_size: PodU64::from_primitive(3),
		bump: 200,
		created_at: PodI64::from_primitive(-1),
	};

	let mut data = vec![0u8; 3];
	data.extend_from_slice(bytemuck::bytes_of(&offer));

	assert_eq!(read_pod::<Offer>(&data, 3).unwrap(), offer);
	assert_eq!(Offer::from_bytes(&data, 3).unwrap(), (offer, Offer::LEN));
}

proptest! {
	#[test]
	fn codec_and_pod_reads_agree(bytes in prop::collection::vec(any::<u8>(), Listing::LEN)) {
		let via_codec = Listing::from_bytes(&bytes, 0)
			.unwrap_or_else(|e| panic!("codec decode failed: {e}"))
			.0;
		let via_pod = read_pod::<Listing>(&bytes, 0)
			.unwrap_or_else(|e| panic!("pod read failed: {e}"));

		// The codec path normalizes `isCanceled` to 0 or 1; the pod path keeps the raw byte.
		prop_assert_eq!(via_codec.to_bytes().unwrap_or_default(), via_pod.to_bytes().unwrap_or_default());
		prop_assert_eq!(via_codec.is_canceled.get(), via_pod.is_canceled.get());
		prop_assert_eq!(via_codec.price, via_pod.price);
		prop_assert_eq!(via_codec.seller, via_pod.seller);
	}

	#[test]
	fn bump_params_roundtrip(bumps: [u8; 4]) {
		let params = AcceptOfferParams {
			escrow_payment_bump: bumps[0],
			free_trade_state_bump: bumps[1],
			seller_trade_state_bump: bumps[2],
			program_as_signer_bump: bumps[3],
		};
		let bytes = params.to_bytes().unwrap_or_default();

		prop_assert_eq!(&bytes[..], &bumps[..]);
		prop_assert_eq!(AcceptOfferParams::from_bytes(&bytes, 0).ok(), Some((params, 4)));
	}
}
