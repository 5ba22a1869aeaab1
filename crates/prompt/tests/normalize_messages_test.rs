//! Unit tests for `prompt::normalize_messages`.
//!
//! Verifies bare-text wrapping, verbatim pass-through of structured entries, and the serialized
//! payload shape. External interactions: none (pure function tests).

use prompt::{normalize_messages, ChatMessage, Message, ROLE_USER};
use serde_json::json;

/// **Test: Bare strings keep length and order; every entry is role "user" with the original content.**
#[test]
fn bare_strings_become_user_messages() {
    let inputs = ["first", "second", "", "fourth with spaces  "];
    let out = normalize_messages(inputs);
    assert_eq!(out.len(), inputs.len());
    for (msg, input) in out.iter().zip(inputs) {
        assert_eq!(msg.role.as_deref(), Some(ROLE_USER));
        assert_eq!(msg.content.as_deref(), Some(input));
        assert!(msg.extra.is_empty());
    }
}

/// **Test: Structured entries come out field-for-field identical, including unknown roles and extra fields.**
#[test]
fn structured_entries_pass_through() {
    let mut with_name = ChatMessage::new("tool", "42");
    with_name
        .extra
        .insert("name".to_string(), json!("calculator"));
    let entries = vec![
        ChatMessage::system("Be terse"),
        ChatMessage::assistant("ok"),
        ChatMessage::new("narrator", "once upon a time"),
        with_name,
    ];
    let out = normalize_messages(entries.clone());
    assert_eq!(out, entries);
}

/// **Test: A pair missing role or content is not repaired or rejected locally.**
#[test]
fn incomplete_pair_is_not_validated() {
    let missing_role = ChatMessage {
        content: Some("no role here".to_string()),
        ..Default::default()
    };
    let out = normalize_messages(vec![Message::Pair(missing_role.clone())]);
    assert_eq!(out, vec![missing_role]);
    assert!(!out[0].is_complete());
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([{"content": "no role here"}])
    );
}

/// **Test: ["Hello"] serializes to [{"role":"user","content":"Hello"}].**
#[test]
fn hello_payload_shape() {
    let out = normalize_messages(["Hello"]);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([{"role": "user", "content": "Hello"}])
    );
}

/// **Test: Mixed input keeps the system entry and converts the bare question.**
#[test]
fn mixed_system_and_text() {
    let messages = vec![
        Message::from(ChatMessage::system("Be terse")),
        Message::from("What is 2+2?"),
    ];
    let out = normalize_messages(messages);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            {"role": "system", "content": "Be terse"},
            {"role": "user", "content": "What is 2+2?"}
        ])
    );
}

/// **Test: A JSON array of strings and objects parses into the matching variants.**
#[test]
fn messages_deserialize_untagged() {
    let parsed: Vec<Message> = serde_json::from_value(json!([
        "Hi",
        {"role": "system", "content": "Be terse"},
        {"content": "orphan"}
    ]))
    .expect("parse messages");

    assert_eq!(parsed[0], Message::Text("Hi".to_string()));
    assert_eq!(parsed[1], Message::Pair(ChatMessage::system("Be terse")));
    match &parsed[2] {
        Message::Pair(m) => {
            assert_eq!(m.role, None);
            assert_eq!(m.content.as_deref(), Some("orphan"));
        }
        other => panic!("expected pair, got {:?}", other),
    }
}

/// **Test: Explicit nulls and non-string role/content survive parse and re-serialization unchanged.**
///
/// **Expected:** The entry is incomplete locally but identical on the wire.
#[test]
fn non_string_fields_round_trip_verbatim() {
    let input = json!([
        {"content": "x", "role": null},
        {"role": 5, "content": "y"},
        {"role": "user", "content": null, "name": "bob"}
    ]);
    let parsed: Vec<Message> = serde_json::from_value(input.clone()).expect("parse messages");
    let out = normalize_messages(parsed);

    assert!(out.iter().all(|m| !m.is_complete()));
    assert_eq!(out[0].content.as_deref(), Some("x"));
    assert_eq!(out[2].role.as_deref(), Some("user"));
    assert_eq!(serde_json::to_value(&out).unwrap(), input);
}

/// **Test: Empty input gives an empty message list.**
#[test]
fn empty_input() {
    let out = normalize_messages(Vec::<Message>::new());
    assert!(out.is_empty());
}
