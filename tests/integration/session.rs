//! Session behavior over an in-process consumer.

use signbridge_clips::{ClipMap, ClipResolver};
use signbridge_gloss::GlossParser;
use signbridge_runtime::{DeliveryStatus, Session, SkipReason};
use signbridge_transport::{ChannelTransport, PlaySequence};
use tokio::sync::mpsc::Receiver;

fn session(map: ClipMap) -> (Session<ChannelTransport>, Receiver<PlaySequence>) {
    let (transport, receiver) = ChannelTransport::new(16);
    let session = Session::new(GlossParser::standard(), ClipResolver::new(map), transport).unwrap();
    (session, receiver)
}

#[test]
fn one_message_per_sentence() {
    let (mut session, mut receiver) = session(ClipMap::standard());

    for text in ["Hello", "I never eat", "Where is the school?"] {
        assert!(session.submit(text).is_sent());
    }

    assert_eq!(receiver.try_recv().unwrap().clips, vec!["hello.bvh"]);
    assert_eq!(
        receiver.try_recv().unwrap().clips,
        vec!["i.bvh", "eat.bvh", "no.bvh"]
    );
    assert_eq!(
        receiver.try_recv().unwrap().clips,
        vec!["school.bvh", "where.bvh"]
    );
    assert!(receiver.try_recv().is_err());
}

#[test]
fn sentence_without_clips_sends_nothing() {
    let (mut session, mut receiver) = session(ClipMap::from_glosses(["SCHOOL"], "bvh"));

    let delivery = session.submit("I eat");
    assert_eq!(delivery.resolution.unresolved, vec!["I", "EAT"]);
    assert!(matches!(
        delivery.status,
        DeliveryStatus::Skipped(SkipReason::NothingToPlay)
    ));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn translate_never_sends() {
    let (session, mut receiver) = session(ClipMap::standard());

    let (translation, resolution) = session.translate("You love school today");
    assert_eq!(translation.gloss, vec!["TODAY", "SCHOOL", "YOU", "LOVE"]);
    assert_eq!(resolution.clips.len(), 4);
    assert!(receiver.try_recv().is_err());
}

#[test]
fn explain_matches_translate() {
    let (session, _receiver) = session(ClipMap::standard());
    let text = "Yesterday I didn't go to school";

    assert_eq!(session.explain(text).gloss, session.translate(text).0.gloss);
}
