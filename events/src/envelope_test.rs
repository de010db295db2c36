use super::*;

const CONTRACT: &str = "0xf7b036b6eb1dfadd1255f3aba0398b146e16f34aa510ee07b58439d0e80be211";

#[test]
fn directives_cover_all_four_tags_in_order() {
    let directives = subscription_directives("0xabc");
    assert_eq!(
        directives,
        vec![
            "type,add,0xabc::chat_room::JoinedChatRoom",
            "type,add,0xabc::chat_room::SentMessage",
            "type,add,0xabc::chat_room::SentReaction",
            "type,add,0xabc::chat_room::LeftChatRoom",
        ]
    );
}

#[test]
fn qualified_tag_round_trips_through_from_qualified() {
    for tag in EventTag::ALL {
        let qualified = tag.qualified(CONTRACT);
        assert_eq!(EventTag::from_qualified(&qualified, CONTRACT), Some(tag));
    }
}

#[test]
fn from_qualified_normalizes_contract_spelling() {
    assert_eq!(
        EventTag::from_qualified("0x0ABC::chat_room::SentMessage", "0xabc"),
        Some(EventTag::SentMessage)
    );
}

#[test]
fn from_qualified_rejects_other_contracts_modules_and_names() {
    assert_eq!(EventTag::from_qualified("0xdef::chat_room::SentMessage", "0xabc"), None);
    assert_eq!(EventTag::from_qualified("0xabc::coin::SentMessage", "0xabc"), None);
    assert_eq!(EventTag::from_qualified("0xabc::chat_room::Deposit", "0xabc"), None);
    assert_eq!(EventTag::from_qualified("SentMessage", "0xabc"), None);
}

#[test]
fn parse_event_reads_full_indexer_envelope() {
    let text = r#"{
        "sequence_number": "7",
        "creation_number": 2,
        "account_address": "0x1",
        "transaction_version": "123456",
        "transaction_block_height": 99,
        "type_": "0xabc::chat_room::SentMessage",
        "data": {"message": "hi"},
        "event_index": 0,
        "indexed_type": "0xabc::chat_room::SentMessage"
    }"#;
    let event = parse_event(text).expect("event should parse");
    assert_eq!(event.sequence_number, Some(7));
    assert_eq!(event.creation_number, Some(2));
    assert_eq!(event.transaction_version, Some(123_456));
    assert_eq!(event.transaction_block_height, Some(99));
    assert_eq!(event.event_index, Some(0));
    assert_eq!(event.type_, "0xabc::chat_room::SentMessage");
    assert_eq!(event.data["message"], "hi");
}

#[test]
fn parse_event_accepts_minimal_envelope() {
    let event = parse_event(r#"{"type_":"x","data":{}}"#).expect("minimal event should parse");
    assert_eq!(event.type_, "x");
    assert_eq!(event.sequence_number, None);
    assert_eq!(event.account_address, None);
}

#[test]
fn parse_event_rejects_non_json_and_missing_tag() {
    assert!(matches!(parse_event("not json"), Err(EventError::InvalidJson(_))));
    assert!(matches!(parse_event(r#"{"data":{}}"#), Err(EventError::InvalidJson(_))));
}

#[test]
fn value_as_u64_accepts_numbers_and_decimal_strings() {
    assert_eq!(value_as_u64(&serde_json::json!(3)), Some(3));
    assert_eq!(value_as_u64(&serde_json::json!("18446744073709551615")), Some(u64::MAX));
    assert_eq!(value_as_u64(&serde_json::json!("-1")), None);
    assert_eq!(value_as_u64(&serde_json::json!(1.5)), None);
    assert_eq!(value_as_u64(&serde_json::json!(null)), None);
}
