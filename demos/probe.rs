use mediacodecs::{
    DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC, browser_supports_codec, mime_for_codec,
    muxer_supports_codec, parse_codecs,
};
use std::env;

// Classify a codec string and check it against a pretend platform that only
// plays MP4. With no argument the default video+audio pair is used.
fn main() -> anyhow::Result<()> {
    let codecs = env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{DEFAULT_VIDEO_CODEC},{DEFAULT_AUDIO_CODEC}"));

    let info = parse_codecs(&codecs);
    println!("{}", serde_json::to_string_pretty(&info)?);

    let Some(mime) = mime_for_codec(&codecs) else {
        anyhow::bail!("empty codec string");
    };
    println!("mime:     {mime}");

    let mp4_only = |m: &str| m.contains("/mp4;");
    println!("platform: {}", browser_supports_codec(&codecs, Some(&mp4_only)));
    println!("muxer:    {}", muxer_supports_codec(&codecs));

    Ok(())
}
