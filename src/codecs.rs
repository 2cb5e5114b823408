use crate::patterns::{CATEGORY_ORDER, PatternKind};
use serde::Serialize;
use std::fmt;

/// Fallback audio codec (AAC-LC) for callers with no codec information.
pub const DEFAULT_AUDIO_CODEC: &str = "mp4a.40.2";
/// Fallback video codec (H.264 Main profile) for callers with no codec information.
pub const DEFAULT_VIDEO_CODEC: &str = "avc1.4d400d";

/// Media category a codec token can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Video,
    Audio,
    Text,
}

impl MediaCategory {
    fn from_pattern(kind: PatternKind) -> Option<Self> {
        match kind {
            PatternKind::Video => Some(MediaCategory::Video),
            PatternKind::Audio => Some(MediaCategory::Audio),
            PatternKind::Text => Some(MediaCategory::Text),
            _ => None,
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaCategory::Video => "video",
            MediaCategory::Audio => "audio",
            MediaCategory::Text => "text",
        };
        f.write_str(s)
    }
}

/// A single codec identifier split into its type tag and the rest.
///
/// For `"avc1.4d400d"` this is `typ = "avc1"`, `details = ".4d400d"`.
/// Both halves keep the case they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecToken {
    #[serde(rename = "type")]
    pub typ: String,
    pub details: String,
}

impl CodecToken {
    /// Token that could not be classified; the whole text becomes the type.
    fn positional(token: &str) -> Self {
        CodecToken {
            typ: token.to_string(),
            details: String::new(),
        }
    }
}

impl fmt::Display for CodecToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.typ, self.details)
    }
}

/// Result of parsing a codec string: at most one token per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCodecInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<CodecToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<CodecToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<CodecToken>,
}

impl ParsedCodecInfo {
    pub fn get(&self, category: MediaCategory) -> Option<&CodecToken> {
        match category {
            MediaCategory::Video => self.video.as_ref(),
            MediaCategory::Audio => self.audio.as_ref(),
            MediaCategory::Text => self.text.as_ref(),
        }
    }

    fn slot(&mut self, category: MediaCategory) -> &mut Option<CodecToken> {
        match category {
            MediaCategory::Video => &mut self.video,
            MediaCategory::Audio => &mut self.audio,
            MediaCategory::Text => &mut self.text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.audio.is_none() && self.text.is_none()
    }
}

/// [`ParsedCodecInfo`] plus the unclassified tokens that found no slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub info: ParsedCodecInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
}

/// Parse a comma-separated codec string into per-category tokens.
///
/// Never fails: an empty or unrecognizable string just yields an empty result.
///
/// ```
/// use mediacodecs::parse_codecs;
///
/// let info = parse_codecs("avc1.4d400d,mp4a.40.2");
/// assert_eq!(info.video.unwrap().typ, "avc1");
/// assert_eq!(info.audio.unwrap().details, ".40.2");
/// ```
pub fn parse_codecs(codecs: &str) -> ParsedCodecInfo {
    parse_codecs_report(codecs).info
}

/// Like [`parse_codecs`], but also returns the tokens that were dropped.
///
/// Tokens matching no pattern fill the `video` slot, then the `audio` slot,
/// if those are still free. Anything after that is dropped.
pub fn parse_codecs_report(codecs: &str) -> ParseReport {
    let mut info = ParsedCodecInfo::default();
    let mut unknown = Vec::new();

    for token in codecs.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let lower = token.to_lowercase();
        let mut classified = false;

        for kind in CATEGORY_ORDER {
            let Some(len) = kind.match_prefix(&lower) else {
                continue;
            };
            let Some(category) = MediaCategory::from_pattern(kind) else {
                continue;
            };
            log::trace!("{token:?} matched the {} pattern", kind.full_name());
            *info.slot(category) = Some(split_token(token, len));
            classified = true;
        }

        if !classified {
            unknown.push(token);
        }
    }

    let mut dropped = Vec::new();
    for token in unknown {
        if info.video.is_none() {
            info.video = Some(CodecToken::positional(token));
        } else if info.audio.is_none() {
            info.audio = Some(CodecToken::positional(token));
        } else {
            dropped.push(token.to_string());
        }
    }

    if !dropped.is_empty() {
        log::debug!("dropping unclassified codecs {dropped:?} from {codecs:?}");
    }

    ParseReport { info, dropped }
}

// `len` is measured on the lowercased token. Pattern prefixes are ASCII, so it
// only drifts if lowercasing changed byte lengths earlier in the token.
fn split_token(token: &str, len: usize) -> CodecToken {
    let mut at = len.min(token.len());
    while !token.is_char_boundary(at) {
        at -= 1;
    }
    let (typ, details) = token.split_at(at);
    CodecToken {
        typ: typ.to_string(),
        details: details.to_string(),
    }
}

fn normalize(codec: &str) -> String {
    codec.trim().to_lowercase()
}

/// Is this a codec the video pattern recognizes?
pub fn is_video_codec(codec: &str) -> bool {
    PatternKind::Video.matches(&normalize(codec))
}

/// Is this a codec the audio pattern recognizes?
pub fn is_audio_codec(codec: &str) -> bool {
    PatternKind::Audio.matches(&normalize(codec))
}

/// Is this a codec the text pattern recognizes?
pub fn is_text_codec(codec: &str) -> bool {
    PatternKind::Text.matches(&normalize(codec))
}
