use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    segments: HashMap<String, SegmentEntry>,
}

/// A segment fixture is either a bare path or a path plus expected samples.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SegmentEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        expected: Option<String>,
    },
}

impl SegmentEntry {
    fn as_path(&self) -> &str {
        match self {
            SegmentEntry::Path(path) => path,
            SegmentEntry::Detailed { path, .. } => path,
        }
    }

    fn expected(&self) -> Option<&str> {
        match self {
            SegmentEntry::Path(_) => None,
            SegmentEntry::Detailed { expected, .. } => expected.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod segments {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.segments.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.segments, "segment", name)?;
        read_to_string(entry.as_path())
    }

    /// Expected `(time, components)` samples recorded next to a segment, if any.
    pub fn expected<T: DeserializeOwned>(name: &str) -> Result<Option<T>> {
        let entry = lookup(&MANIFEST.segments, "segment", name)?;
        match entry.expected() {
            Some(rel) => super::load_json(rel).map(Some),
            None => Ok(None),
        }
    }
}
