use pina_layout::FieldDescriptor;
use pina_layout::PrimitiveKind;
use pina_layout::Record;
use pina_layout::StructCodec;
use pina_layout::Value;
use serde_json::json;

fn withdraw_params() -> StructCodec {
	StructCodec::new("WithdrawParams", [
		FieldDescriptor::primitive("withdrawalAmount", PrimitiveKind::U64),
		FieldDescriptor::primitive("delta", PrimitiveKind::I32),
		FieldDescriptor::primitive("closeAccount", PrimitiveKind::Bool),
		FieldDescriptor::primitive("memo", PrimitiveKind::FixedBytes(4)),
	])
	.unwrap()
}

#[test]
fn records_load_from_json() {
	let record: Record = serde_json::from_value(json!({
		"withdrawalAmount": 1_000_000_u64,
		"delta": -5,
		"closeAccount": false,
		"memo": [1, 2, 3, 4],
	}))
	.unwrap();

	assert_eq!(record.get("delta"), Some(&Value::Signed(-5)));
	assert_eq!(record.get("memo"), Some(&Value::Bytes(vec![1, 2, 3, 4])));

	let bytes = withdraw_params().encode(&record).unwrap();
	assert_eq!(bytes.len(), 17);
	assert_eq!(&bytes[..8], &1_000_000_u64.to_le_bytes());
	assert_eq!(&bytes[8..12], &(-5i32).to_le_bytes());
	assert_eq!(bytes[12], 0);
	assert_eq!(&bytes[13..], &[1, 2, 3, 4]);
}

#[test]
fn decoded_records_serialize_to_json() {
	let codec = withdraw_params();
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&42u64.to_le_bytes());
	bytes.extend_from_slice(&(-1i32).to_le_bytes());
	bytes.extend_from_slice(&[1, 9, 8, 7, 6]);

	let (record, _) = codec.decode(&bytes, 0).unwrap();
	assert_eq!(
		serde_json::to_value(&record).unwrap(),
		json!({
			"closeAccount": true,
			"delta": -1,
			"memo": [9, 8, 7, 6],
			"withdrawalAmount": 42,
		})
	);
}

#[test]
fn json_roundtrip_keeps_nested_records() {
	let record = Record::new()
		.with("big", u128::from(u64::MAX))
		.with("rules", Record::new().with("numeral", 5u16));

	let text = serde_json::to_string(&record).unwrap();
	let back: Record = serde_json::from_str(&text).unwrap();
	assert_eq!(back, record);
}

#[test]
fn duplicate_keys_are_rejected() {
	let result = serde_json::from_str::<Record>(r#"{"a": 1, "a": 2}"#);
	assert!(result.is_err());
}
