use crate::codecs::MediaCategory;

/// Typed view over the codec families the classifier recognizes.
///
/// Anything not in this list becomes `KnownCodec::Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCodec {
    // Video
    Av1,
    Avc,
    Hevc,
    Vp8,
    Vp9,
    Theora,
    Mp4v,

    // Audio
    Aac,
    Flac,
    Vorbis,
    Opus,
    Ac3,
    Ac4,
    Ec3,
    Alac,
    Mp3,
    Speex,

    // Text
    Ttml,

    Unknown,
}

impl From<&str> for KnownCodec {
    /// Map a type tag (as produced by the parser, any case) to its family.
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "av1" | "av01" => KnownCodec::Av1,
            "avc1" | "avc2" | "avc3" | "avc4" | "avc01" | "avc02" | "avc03" | "avc04" => {
                KnownCodec::Avc
            }
            "hvc1" | "hev1" => KnownCodec::Hevc,
            "vp8" | "vp08" => KnownCodec::Vp8,
            "vp9" | "vp09" => KnownCodec::Vp9,
            "theora" => KnownCodec::Theora,
            "mp4v" => KnownCodec::Mp4v,

            "mp4a" | "aac" => KnownCodec::Aac,
            "flac" => KnownCodec::Flac,
            "vorbis" => KnownCodec::Vorbis,
            "opus" => KnownCodec::Opus,
            "ac-3" => KnownCodec::Ac3,
            "ac-4" => KnownCodec::Ac4,
            "ec-3" => KnownCodec::Ec3,
            "alac" => KnownCodec::Alac,
            "mp3" => KnownCodec::Mp3,
            "speex" => KnownCodec::Speex,

            "stpp.ttml.im1t" => KnownCodec::Ttml,

            _ => KnownCodec::Unknown,
        }
    }
}

impl KnownCodec {
    pub fn full_name(&self) -> &'static str {
        match self {
            KnownCodec::Av1 => "AV1",
            KnownCodec::Avc => "H.264 / AVC",
            KnownCodec::Hevc => "H.265 / HEVC",
            KnownCodec::Vp8 => "VP8",
            KnownCodec::Vp9 => "VP9",
            KnownCodec::Theora => "Theora",
            KnownCodec::Mp4v => "MPEG-4 Visual",
            KnownCodec::Aac => "AAC",
            KnownCodec::Flac => "FLAC",
            KnownCodec::Vorbis => "Vorbis",
            KnownCodec::Opus => "Opus",
            KnownCodec::Ac3 => "AC-3 (Dolby Digital)",
            KnownCodec::Ac4 => "AC-4",
            KnownCodec::Ec3 => "E-AC-3 (Dolby Digital Plus)",
            KnownCodec::Alac => "Apple Lossless",
            KnownCodec::Mp3 => "MP3",
            KnownCodec::Speex => "Speex",
            KnownCodec::Ttml => "TTML (ISO/IEC 14496-30)",
            KnownCodec::Unknown => "Unknown",
        }
    }

    /// Category this family belongs to, `None` for `Unknown`.
    pub fn category(&self) -> Option<MediaCategory> {
        match self {
            KnownCodec::Av1
            | KnownCodec::Avc
            | KnownCodec::Hevc
            | KnownCodec::Vp8
            | KnownCodec::Vp9
            | KnownCodec::Theora
            | KnownCodec::Mp4v => Some(MediaCategory::Video),
            KnownCodec::Aac
            | KnownCodec::Flac
            | KnownCodec::Vorbis
            | KnownCodec::Opus
            | KnownCodec::Ac3
            | KnownCodec::Ac4
            | KnownCodec::Ec3
            | KnownCodec::Alac
            | KnownCodec::Mp3
            | KnownCodec::Speex => Some(MediaCategory::Audio),
            KnownCodec::Ttml => Some(MediaCategory::Text),
            KnownCodec::Unknown => None,
        }
    }
}
