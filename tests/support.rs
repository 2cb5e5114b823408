use mediacodecs::{MimeAllowList, TypeSupport, browser_supports_codec, muxer_supports_codec};
use std::cell::RefCell;

#[test]
fn muxer_accepts_avc_and_aac() {
    assert!(muxer_supports_codec("avc1.4d400d,mp4a.40.2"));
    assert!(muxer_supports_codec("AVC1.4D400D, MP4A.40.2"));
    assert!(muxer_supports_codec("mp4a.40.5"));
    assert!(muxer_supports_codec("avc01.4d400d"));
}

#[test]
fn muxer_rejects_everything_else() {
    assert!(!muxer_supports_codec("vp09.00.10.08"));
    assert!(!muxer_supports_codec("av01.0.05M.08"));
    assert!(!muxer_supports_codec("hvc1.1.6.L93.90"));
    assert!(!muxer_supports_codec("avc3.4d400d"));
    assert!(!muxer_supports_codec("avc1.4d400d,opus"));
}

#[test]
fn muxer_rejects_empty_tokens() {
    assert!(!muxer_supports_codec(""));
    assert!(!muxer_supports_codec("avc1.4d400d,"));
}

#[test]
fn no_platform_means_unsupported() {
    assert!(!browser_supports_codec("avc1.4d400d,mp4a.40.2", None));
    assert!(!browser_supports_codec("", None));
}

#[test]
fn platform_sees_the_resolved_mime() {
    let seen = RefCell::new(Vec::new());
    let probe = |mime: &str| {
        seen.borrow_mut().push(mime.to_string());
        mime.starts_with("video/mp4")
    };

    assert!(browser_supports_codec("avc1.4d400d,mp4a.40.2", Some(&probe)));
    assert!(!browser_supports_codec("vp8,vorbis", Some(&probe)));
    assert_eq!(
        *seen.borrow(),
        vec![
            "video/mp4;codecs=\"avc1.4d400d,mp4a.40.2\"".to_string(),
            "video/webm;codecs=\"vp8,vorbis\"".to_string(),
        ]
    );
}

#[test]
fn unresolvable_codecs_never_reach_the_platform() {
    let called = RefCell::new(false);
    let probe = |_: &str| {
        *called.borrow_mut() = true;
        true
    };
    assert!(!browser_supports_codec("", Some(&probe)));
    assert!(!*called.borrow());
}

#[test]
#[should_panic(expected = "platform exploded")]
fn platform_panics_propagate() {
    let probe = |_: &str| -> bool { panic!("platform exploded") };
    browser_supports_codec("mp4a.40.2", Some(&probe));
}

#[test]
fn allow_list_matches_exact_mime() {
    let list = MimeAllowList::new().with_type("audio/mp4;codecs=\"mp4a.40.2\"");
    assert_eq!(list.len(), 1);
    assert!(list.is_type_supported("audio/mp4;codecs=\"mp4a.40.2\""));
    assert!(browser_supports_codec("mp4a.40.2", Some(&list)));
    assert!(!browser_supports_codec("mp4a.40.5", Some(&list)));
}

#[test]
fn allow_list_deserializes_from_json_array() {
    let list: MimeAllowList =
        serde_json::from_str(r#"["video/webm;codecs=\"vp8,vorbis\""]"#).unwrap();
    assert!(browser_supports_codec("vp8,vorbis", Some(&list)));
    assert!(!MimeAllowList::default().is_type_supported("video/mp4"));
    assert!(MimeAllowList::default().is_empty());
}
