use mediacodecs::{Container, MediaType, get_mime_for_codec, mime_for_codec};

fn mime(codecs: &str) -> String {
    mime_for_codec(codecs).expect("mime").to_string()
}

#[test]
fn single_audio_codec_is_audio() {
    assert_eq!(mime("mp4a.40.2"), "audio/mp4;codecs=\"mp4a.40.2\"");
    assert_eq!(mime("opus"), "audio/mp4;codecs=\"opus\"");
    assert_eq!(mime("vorbis"), "audio/webm;codecs=\"vorbis\"");
}

#[test]
fn single_text_codec_is_application() {
    let m = mime_for_codec("stpp.ttml.im1t").unwrap();
    assert_eq!(m.media_type, MediaType::Application);
    assert_eq!(m.to_string(), "application/mp4;codecs=\"stpp.ttml.im1t\"");

    // alongside video it is just another track
    assert_eq!(
        mime("avc1.4d400d,stpp.ttml.im1t"),
        "video/mp4;codecs=\"avc1.4d400d,stpp.ttml.im1t\""
    );
}

#[test]
fn multiple_codecs_stay_video() {
    let m = mime_for_codec("avc1.4d400d,mp4a.40.2").unwrap();
    assert_eq!(m.media_type, MediaType::Video);
    assert_eq!(m.container, Container::Mp4);
    assert_eq!(m.to_string(), "video/mp4;codecs=\"avc1.4d400d,mp4a.40.2\"");

    // two audio codecs are not "a single audio codec"
    assert_eq!(mime_for_codec("mp4a.40.2,ec-3").unwrap().media_type, MediaType::Video);
}

#[test]
fn containers_resolve_in_order() {
    assert_eq!(mime("vp8,vorbis"), "video/webm;codecs=\"vp8,vorbis\"");
    assert_eq!(mime("vp8,opus"), "video/webm;codecs=\"vp8,opus\"");
    assert_eq!(mime("theora,vorbis"), "video/ogg;codecs=\"theora,vorbis\"");
    // mp4 is tried first and accepts both
    assert_eq!(mime("vp09.00.10.08,opus"), "video/mp4;codecs=\"vp09.00.10.08,opus\"");
    assert_eq!(mime("av01.0.05M.08"), "video/mp4;codecs=\"av01.0.05M.08\"");
}

#[test]
fn falls_back_to_mp4_when_no_container_fits() {
    assert_eq!(mime("hvc1.1.6.L93.90,ec-3"), "video/mp4;codecs=\"hvc1.1.6.L93.90,ec-3\"");
    assert_eq!(mime("theora,mp4a.40.2"), "video/mp4;codecs=\"theora,mp4a.40.2\"");
}

#[test]
fn codecs_attribute_is_the_original_input() {
    assert_eq!(mime("avc1.66.30"), "video/mp4;codecs=\"avc1.66.30\"");
    assert_eq!(
        mime(" AVC1.4D400D , MP4A.40.2"),
        "video/mp4;codecs=\" AVC1.4D400D , MP4A.40.2\""
    );
}

#[test]
fn missing_or_empty_input_has_no_mime() {
    assert!(get_mime_for_codec(None).is_none());
    assert!(get_mime_for_codec(Some("")).is_none());
    assert!(mime_for_codec("").is_none());
}
