//! Generated-project marker
//!
//! Every generated project gets a `.hatch.yaml` at its root recording how it
//! was created. Finding one in a directory or any of its ancestors means the
//! directory is inside a hatch project.

use crate::error::Result;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// File name of the project marker
pub const PROJECT_MARKER: &str = ".hatch.yaml";

/// Contents of `.hatch.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMarker {
    pub name: String,
    pub blueprint: String,
    /// hatch version that generated the project
    pub generator: String,
}

impl ProjectMarker {
    pub fn new(name: impl Into<String>, blueprint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blueprint: blueprint.into(),
            generator: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Write the marker into `root`, replacing any existing one
    pub fn write(&self, root: &Utf8Path) -> Result<Utf8PathBuf> {
        let path = root.join(PROJECT_MARKER);
        fs::write(&path, serde_yaml_ng::to_string(self)?)?;
        debug!("Wrote project marker {}", path);
        Ok(path)
    }

    /// Read the marker at the root of a project
    pub fn read(root: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(root.join(PROJECT_MARKER))?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }
}

/// Find the root of the hatch project containing `start`, if any
pub fn find_project_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_MARKER).is_file())
        .map(Utf8Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_write_and_read() {
        let temp = TempDir::new().unwrap();
        let root = utf8_dir(&temp);

        let marker = ProjectMarker::new("my-app", "app");
        marker.write(&root).unwrap();

        assert_eq!(ProjectMarker::read(&root).unwrap(), marker);
    }

    #[test]
    fn test_find_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        let root = utf8_dir(&temp).join("my-app");
        let nested = root.join("src/deep");
        fs::create_dir_all(&nested).unwrap();
        ProjectMarker::new("my-app", "app").write(&root).unwrap();

        assert_eq!(find_project_root(&nested), Some(root.clone()));
        assert_eq!(find_project_root(&root), Some(root));
    }

    #[test]
    fn test_no_marker() {
        let temp = TempDir::new().unwrap();
        let dir = utf8_dir(&temp).join("plain");
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(find_project_root(&dir), None);
    }
}
