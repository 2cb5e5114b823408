use crate::mime::get_mime_for_codec;
use crate::patterns::MUXER_ORDER;
use serde::Deserialize;
use std::collections::HashSet;

/// Platform decode-capability check.
///
/// Implement this to bridge to whatever the platform offers (a browser's
/// `MediaSource.isTypeSupported`, a decoder probe, ...). Any
/// `Fn(&str) -> bool` already implements it.
pub trait TypeSupport {
    fn is_type_supported(&self, mime: &str) -> bool;
}

impl<F> TypeSupport for F
where
    F: Fn(&str) -> bool,
{
    fn is_type_supported(&self, mime: &str) -> bool {
        self(mime)
    }
}

/// A fixed set of MIME strings reported as supported.
///
/// Comparison is exact, on the rendered MIME string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MimeAllowList {
    types: HashSet<String>,
}

impl MimeAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new list with `mime` added.
    pub fn with_type(mut self, mime: impl Into<String>) -> Self {
        self.types.insert(mime.into());
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MimeAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MimeAllowList {
            types: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl TypeSupport for MimeAllowList {
    fn is_type_supported(&self, mime: &str) -> bool {
        self.types.contains(mime)
    }
}

/// Can the platform decode this codec string?
///
/// `false` when no capability check is available or the codec string does
/// not resolve to a MIME type.
pub fn browser_supports_codec(codecs: &str, platform: Option<&dyn TypeSupport>) -> bool {
    let Some(platform) = platform else {
        return false;
    };
    match get_mime_for_codec(Some(codecs)) {
        Some(mime) => platform.is_type_supported(&mime.to_string()),
        None => false,
    }
}

/// Can the remuxer repackage this codec string?
///
/// Only AVC video and AAC audio qualify; a single empty or unknown token
/// fails the whole string.
pub fn muxer_supports_codec(codecs: &str) -> bool {
    codecs.to_lowercase().split(',').all(|codec| {
        let codec = codec.trim();
        MUXER_ORDER.iter().any(|kind| kind.matches(codec))
    })
}
