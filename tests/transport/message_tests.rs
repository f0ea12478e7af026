//! Wire message tests.

use signbridge_foundation::ClipId;
use signbridge_transport::{Action, PlaySequence};

#[test]
fn message_has_exact_wire_shape() {
    let message = PlaySequence::new(vec![ClipId::new("today.bvh"), ClipId::new("you.bvh")]);
    let value: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"type": "play_sequence", "clips": ["today.bvh", "you.bvh"]})
    );
}

#[test]
fn frame_is_one_line() {
    let frame = PlaySequence::new(vec![ClipId::new("i.bvh")]).to_frame().unwrap();
    let text = String::from_utf8(frame).unwrap();

    assert!(text.ends_with('\n'));
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn decodes_consumer_side() {
    let message =
        PlaySequence::from_json(r#"{"type":"play_sequence","clips":["no.bvh"]}"#).unwrap();
    assert_eq!(message.action, Action::PlaySequence);
    assert_eq!(message.clips, vec!["no.bvh"]);
}

#[test]
fn rejects_unknown_action() {
    let err = PlaySequence::from_json(r#"{"type":"stop","clips":[]}"#).unwrap_err();
    assert!(matches!(
        err.kind,
        signbridge_foundation::ErrorKind::Serialization(_)
    ));
}

#[test]
fn empty_message() {
    assert!(PlaySequence::new(Vec::new()).is_empty());
}
