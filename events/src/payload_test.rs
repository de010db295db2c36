use serde_json::json;

use super::*;

fn config() -> ChatConfig {
    ChatConfig {
        contract_addr: "0xabc".to_owned(),
        room_addr: "0xroom".to_owned(),
        ..ChatConfig::default()
    }
}

#[test]
fn join_payload_passes_room_then_username() {
    let payload = ChatAction::Join { username: "alice".to_owned() }.payload(&config());
    assert_eq!(payload.function, "0xabc::chat_room::join_chat_room");
    assert_eq!(payload.arguments, vec![json!("0xroom"), json!("alice")]);
    assert!(payload.type_arguments.is_empty());
}

#[test]
fn leave_payload_passes_only_room() {
    let payload = ChatAction::Leave.payload(&config());
    assert_eq!(payload.function, "0xabc::chat_room::leave_chat_room");
    assert_eq!(payload.arguments, vec![json!("0xroom")]);
}

#[test]
fn send_payload_passes_text_verbatim() {
    let payload = ChatAction::Send { text: "  hi there ".to_owned() }.payload(&config());
    assert_eq!(payload.function, "0xabc::chat_room::send_chat");
    assert_eq!(payload.arguments, vec![json!("0xroom"), json!("  hi there ")]);
}

#[test]
fn react_payload_encodes_index_as_decimal_string() {
    let payload = ChatAction::React { message_index: 18_446_744_073_709_551_615 }.payload(&config());
    assert_eq!(payload.function, "0xabc::chat_room::react_to_message");
    assert_eq!(payload.arguments, vec![json!("0xroom"), json!("18446744073709551615")]);
}

#[test]
fn payload_serializes_in_node_json_shape() {
    let payload = ChatAction::Leave.payload(&config());
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "entry_function_payload",
            "function": "0xabc::chat_room::leave_chat_room",
            "type_arguments": [],
            "arguments": ["0xroom"]
        })
    );
}

#[test]
fn labels_are_short_action_names() {
    assert_eq!(ChatAction::Join { username: String::new() }.label(), "join");
    assert_eq!(ChatAction::Leave.label(), "leave");
    assert_eq!(ChatAction::Send { text: String::new() }.label(), "send");
    assert_eq!(ChatAction::React { message_index: 0 }.label(), "react");
}
