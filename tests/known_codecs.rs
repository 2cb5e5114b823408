use mediacodecs::{KnownCodec, MediaCategory, parse_codecs};

#[test]
fn known_codec_from_parsed_tag() {
    let info = parse_codecs("AVC1.4D400D,mp4a.40.2");
    let video = KnownCodec::from(info.video.unwrap().typ.as_str());
    assert_eq!(video, KnownCodec::Avc);
    assert_eq!(video.full_name(), "H.264 / AVC");

    let audio = KnownCodec::from(info.audio.unwrap().typ.as_str());
    assert_eq!(audio, KnownCodec::Aac);
}

#[test]
fn known_codec_classifies_category() {
    assert_eq!(KnownCodec::from("vp09").category(), Some(MediaCategory::Video));
    assert_eq!(KnownCodec::from("ec-3").category(), Some(MediaCategory::Audio));
    assert_eq!(KnownCodec::from("stpp.ttml.im1t").category(), Some(MediaCategory::Text));
    assert_eq!(KnownCodec::from("foo"), KnownCodec::Unknown);
    assert_eq!(KnownCodec::Unknown.category(), None);
}
