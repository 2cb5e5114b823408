use crate::legacy::translate_legacy_codec;
use crate::patterns::{CONTAINER_ORDER, PatternKind};
use serde::Serialize;
use std::fmt;

/// Top-level media type of a MIME string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Application,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Application => "application",
        }
    }
}

/// Container format a codec set is played from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Mp4,
    Webm,
    Ogg,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Mp4 => "mp4",
            Container::Webm => "webm",
            Container::Ogg => "ogg",
        }
    }

    fn from_pattern(kind: PatternKind) -> Option<Self> {
        match kind {
            PatternKind::Mp4 => Some(Container::Mp4),
            PatternKind::Webm => Some(Container::Webm),
            PatternKind::Ogg => Some(Container::Ogg),
            _ => None,
        }
    }
}

/// Resolved media type and container for a codec string.
///
/// `Display` renders the MIME string handed to the platform, e.g.
/// `video/mp4;codecs="avc1.4d400d,mp4a.40.2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MimeDescriptor {
    pub media_type: MediaType,
    pub container: Container,
    /// Codec string exactly as given by the caller.
    pub codecs: String,
}

impl fmt::Display for MimeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{};codecs=\"{}\"",
            self.media_type.as_str(),
            self.container.as_str(),
            self.codecs
        )
    }
}

/// Work out the MIME type for a codec string.
///
/// Returns `None` for a missing or empty string.
///
/// ```
/// use mediacodecs::get_mime_for_codec;
///
/// let mime = get_mime_for_codec(Some("avc1.4d400d,mp4a.40.2")).unwrap();
/// assert_eq!(mime.to_string(), "video/mp4;codecs=\"avc1.4d400d,mp4a.40.2\"");
/// ```
pub fn get_mime_for_codec(codecs: Option<&str>) -> Option<MimeDescriptor> {
    let original = codecs.filter(|s| !s.is_empty())?;

    let tokens: Vec<String> = original
        .to_lowercase()
        .split(',')
        .map(|c| translate_legacy_codec(c.trim()))
        .collect();

    let media_type = match tokens.as_slice() {
        [only] if PatternKind::Audio.matches(only) => MediaType::Audio,
        [only] if PatternKind::Text.matches(only) => MediaType::Application,
        _ => MediaType::Video,
    };

    let container = CONTAINER_ORDER
        .into_iter()
        .find(|kind| tokens.iter().all(|t| kind.matches(t)))
        .and_then(Container::from_pattern)
        .unwrap_or(Container::Mp4);

    log::debug!(
        "{original:?} resolved to {}/{}",
        media_type.as_str(),
        container.as_str()
    );

    Some(MimeDescriptor {
        media_type,
        container,
        codecs: original.to_string(),
    })
}

/// Convenience wrapper over [`get_mime_for_codec`] for a plain `&str`.
pub fn mime_for_codec(codecs: &str) -> Option<MimeDescriptor> {
    get_mime_for_codec(Some(codecs))
}
