use crate::codecs::{ParsedCodecInfo, parse_codecs};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

/// The slice of a parsed multivariant playlist needed to look up audio codecs.
///
/// Deserializes from the usual JSON manifest shape:
/// `{"mediaGroups": {"AUDIO": {"<group>": {"<name>": {"default": true, "playlists": [...]}}}}}`.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub media_groups: MediaGroups,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MediaGroups {
    #[serde(rename = "AUDIO", default)]
    pub audio: Option<OrderedMap<OrderedMap<AudioRendition>>>,
}

/// One alternate audio rendition inside a group.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct AudioRendition {
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub playlists: Option<Vec<Playlist>>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub attributes: PlaylistAttributes,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PlaylistAttributes {
    #[serde(rename = "CODECS", default)]
    pub codecs: Option<String>,
}

/// String-keyed map that keeps entries in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        OrderedMap(iter.into_iter().collect())
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, V>()? {
            entries.push((k, v));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

impl Manifest {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

/// Codecs of the default rendition in an audio group.
///
/// Scans the group in document order and parses the `CODECS` attribute of the
/// first playlist of the first rendition marked default. `None` when there are
/// no audio groups, the group is missing, or nothing in it is a default.
pub fn codecs_from_default(manifest: &Manifest, audio_group_id: Option<&str>) -> Option<ParsedCodecInfo> {
    let groups = manifest.media_groups.audio.as_ref()?;
    let group_id = audio_group_id.filter(|id| !id.is_empty())?;
    let group = groups.get(group_id)?;

    for (name, rendition) in group.iter() {
        if !rendition.default {
            continue;
        }
        let Some(playlists) = &rendition.playlists else {
            continue;
        };
        log::debug!("using default audio rendition {name:?} in group {group_id:?}");
        let codecs = playlists
            .first()
            .and_then(|p| p.attributes.codecs.as_deref())
            .unwrap_or_default();
        return Some(parse_codecs(codecs));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_map_keeps_document_order() {
        let m: OrderedMap<u32> = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(m.get("a"), Some(&2));
        assert_eq!(m.get("b"), None);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = Manifest::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)));
    }
}
