//! Clip map tests.

use signbridge_clips::ClipMap;
use signbridge_gloss::Lexicon;

#[test]
fn standard_map_covers_every_emitted_gloss() {
    let lexicon = Lexicon::standard();
    let map = ClipMap::standard();

    for gloss in lexicon.emitted_glosses() {
        assert!(map.contains(gloss.as_str()), "{gloss} has no clip");
    }
    assert_eq!(map.len(), lexicon.emitted_glosses().len());
}

#[test]
fn standard_map_has_no_stop_words_or_synonyms() {
    let map = ClipMap::standard();
    assert!(!map.contains("THE"));
    assert!(!map.contains("NEVER"));
    assert!(!map.contains("WENT"));
    assert!(map.contains("NO"));
    assert!(map.contains("GO"));
}

#[test]
fn generated_names_are_lowercase_with_extension() {
    let map = ClipMap::from_glosses(["Thank", "HELLO"], "fbx");
    assert_eq!(map.get("THANK").map(|c| c.as_str()), Some("thank.fbx"));
    assert_eq!(map.get("HELLO").map(|c| c.as_str()), Some("hello.fbx"));
}

#[test]
fn merge_replaces_duplicates() {
    let mut map = ClipMap::from_glosses(["HELLO", "GOODBYE"], "bvh");
    map.merge(ClipMap::new().with("hello", "wave_v2.bvh"));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("HELLO").map(|c| c.as_str()), Some("wave_v2.bvh"));
    assert_eq!(map.get("GOODBYE").map(|c| c.as_str()), Some("goodbye.bvh"));
}

#[test]
fn map_loads_from_json_with_upper_cased_keys() {
    let map: ClipMap =
        serde_json::from_str(r#"{"love": "love_take2.bvh", "SCHOOL": "school.bvh"}"#).unwrap();

    assert_eq!(map.get("LOVE").map(|c| c.as_str()), Some("love_take2.bvh"));
    assert!(map.contains("SCHOOL"));
}

#[test]
fn map_serializes_as_flat_object() {
    let map = ClipMap::new().with("I", "i.bvh");
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"I":"i.bvh"}"#);
}

#[test]
fn map_rejects_non_object_json() {
    let result: Result<ClipMap, _> = serde_json::from_str(r#"["love.bvh"]"#);
    assert!(result.is_err());
}
