use regex::Regex;
use std::sync::LazyLock;

/// Every pattern the classifier knows about.
///
/// Patterns are anchored at the start of a token and are always tested
/// against a lowercased copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    // Media categories
    Video,
    Audio,
    Text,

    // Containers
    Mp4,
    Webm,
    Ogg,

    // Remux support
    MuxerVideo,
    MuxerAudio,
}

/// Order in which a token is tested for its media category.
///
/// A token matching more than one category ends up under the last one.
pub const CATEGORY_ORDER: [PatternKind; 3] =
    [PatternKind::Video, PatternKind::Audio, PatternKind::Text];

/// Order in which containers are tried; the first one accepting every token wins.
pub const CONTAINER_ORDER: [PatternKind; 3] =
    [PatternKind::Mp4, PatternKind::Webm, PatternKind::Ogg];

/// Patterns that make a token acceptable to the muxer.
pub const MUXER_ORDER: [PatternKind; 2] = [PatternKind::MuxerVideo, PatternKind::MuxerAudio];

// (kind, source) in declaration order. `0?` absorbs vendors writing av1/av01, vp9/vp09, ...
const TABLE: &[(PatternKind, &str)] = &[
    (PatternKind::Video, r"^(av0?1|avc0?[1234]|vp0?[89]|hvc1|hev1|theora|mp4v)"),
    (PatternKind::Audio, r"^(mp4a|flac|vorbis|opus|ac-[34]|ec-3|alac|mp3|speex|aac)"),
    (PatternKind::Text, r"^(stpp\.ttml\.im1t)"),
    (PatternKind::Mp4, r"^(av0?1|avc0?[1234]|vp0?9|flac|opus|mp3|mp4a|mp4v|stpp\.ttml\.im1t)"),
    (PatternKind::Webm, r"^(vp0?[89]|av0?1|opus|vorbis)"),
    (PatternKind::Ogg, r"^(vp0?[89]|theora|flac|opus|vorbis)"),
    (PatternKind::MuxerVideo, r"^(avc0?1)"),
    (PatternKind::MuxerAudio, r"^(mp4a)"),
];

static COMPILED: LazyLock<Vec<(PatternKind, Regex)>> = LazyLock::new(|| {
    TABLE
        .iter()
        .map(|(kind, src)| {
            let re = Regex::new(src).unwrap_or_else(|e| panic!("bad {kind:?} pattern: {e}"));
            (*kind, re)
        })
        .collect()
});

impl PatternKind {
    /// Human-readable name, used in logs.
    pub fn full_name(&self) -> &'static str {
        match self {
            PatternKind::Video => "video",
            PatternKind::Audio => "audio",
            PatternKind::Text => "text",
            PatternKind::Mp4 => "mp4",
            PatternKind::Webm => "webm",
            PatternKind::Ogg => "ogg",
            PatternKind::MuxerVideo => "muxer video",
            PatternKind::MuxerAudio => "muxer audio",
        }
    }

    fn regex(&self) -> Option<&'static Regex> {
        COMPILED.iter().find(|(k, _)| k == self).map(|(_, re)| re)
    }

    /// Byte length of the matched prefix, if the (already lowercased) token matches.
    pub fn match_prefix(&self, token: &str) -> Option<usize> {
        self.regex()?.captures(token)?.get(1).map(|m| m.end())
    }

    /// Does the (already lowercased) token match this pattern?
    pub fn matches(&self, token: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(token))
    }
}
