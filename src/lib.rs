pub mod codecs;
pub mod known_codecs;
pub mod legacy;
pub mod manifest;
pub mod mime;
pub mod patterns;
pub mod support;

pub use codecs::{
    CodecToken, DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC, MediaCategory, ParseReport,
    ParsedCodecInfo, is_audio_codec, is_text_codec, is_video_codec, parse_codecs,
    parse_codecs_report,
};
pub use known_codecs::KnownCodec;
pub use legacy::{translate_legacy_codec, translate_legacy_codecs};
pub use manifest::{Manifest, ManifestError, codecs_from_default};
pub use mime::{Container, MediaType, MimeDescriptor, get_mime_for_codec, mime_for_codec};
pub use patterns::PatternKind;
pub use support::{MimeAllowList, TypeSupport, browser_supports_codec, muxer_supports_codec};
