use std::fs;
use std::path::{Component, Path, PathBuf};
use serde::Deserialize;
use crate::error::{Result, SlideshowError};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManifestEntry {
    pub id: String,
    pub title: String,
    pub image_path: String,
    #[serde(rename = "short_description")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SlideshowError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| SlideshowError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds the entry describing `image`. Paths must name the same file
    /// lexically: `./content/a.jpg` matches `content/a.jpg`, but nothing is
    /// resolved against the filesystem.
    pub fn find(&self, image: &Path) -> Option<&ManifestEntry> {
        let wanted = normalize(image);
        self.entries
            .iter()
            .filter(|entry| !entry.image_path.is_empty())
            .find(|entry| normalize(Path::new(&entry.image_path)) == wanted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}
