// Fri Oct 16 2026 - Alex

use crate::generator::GeneratedClass;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub record_id: u32,
    pub class_name: String,
    pub file: String,
    pub accessors: usize,
    pub placeholders: usize,
}

/// Writes generated classes as `<ClassName>.java` files into one directory.
pub struct OutputManager {
    output_dir: PathBuf,
    write_manifest: bool,
}

impl OutputManager {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            write_manifest: true,
        }
    }

    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, class: &GeneratedClass) -> PathBuf {
        self.output_dir.join(class.file_name())
    }

    pub fn write(&self, class: &GeneratedClass) -> Result<PathBuf, OutputError> {
        self.ensure_dir()?;

        let path = self.path_for(class);
        fs::write(&path, &class.source).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;

        log::info!("Wrote {} to {}", class.class_name, path.display());
        Ok(path)
    }

    pub fn write_all(&self, classes: &[GeneratedClass]) -> Result<Vec<PathBuf>, OutputError> {
        let paths = classes
            .iter()
            .map(|class| self.write(class))
            .collect::<Result<Vec<_>, _>>()?;

        if self.write_manifest {
            self.save_manifest(classes)?;
        }

        Ok(paths)
    }

    fn save_manifest(&self, classes: &[GeneratedClass]) -> Result<(), OutputError> {
        self.ensure_dir()?;

        let entries: Vec<ManifestEntry> = classes
            .iter()
            .map(|class| ManifestEntry {
                record_id: class.record_id,
                class_name: class.class_name.clone(),
                file: class.file_name(),
                accessors: class.accessors,
                placeholders: class.placeholders,
            })
            .collect();

        let path = self.output_dir.join(MANIFEST_FILE);
        let io_err = |source: std::io::Error| OutputError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }

    fn ensure_dir(&self) -> Result<(), OutputError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| OutputError::Io {
            path: self.output_dir.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: u32, name: &str) -> GeneratedClass {
        GeneratedClass {
            record_id: id,
            class_name: name.to_string(),
            source: format!("public class {} {{\n}}\n", name),
            accessors: 2,
            placeholders: 1,
        }
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let manager = OutputManager::new(dir.path().join("nested"));

        let path = manager.write(&class(1, "Packet01Login")).unwrap();

        assert_eq!(path.file_name().unwrap(), "Packet01Login.java");
        assert_eq!(fs::read_to_string(&path).unwrap(), "public class Packet01Login {\n}\n");
    }

    #[test]
    fn test_write_all_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manager = OutputManager::new(dir.path().to_path_buf());

        let classes = vec![class(1, "Packet01Login"), class(2, "Packet02Handshake")];
        let paths = manager.write_all(&classes).unwrap();
        assert_eq!(paths.len(), 2);

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(manifest[1]["class_name"], "Packet02Handshake");
        assert_eq!(manifest[1]["file"], "Packet02Handshake.java");
        assert_eq!(manifest[0]["placeholders"], 1);
    }

    #[test]
    fn test_manifest_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let manager = OutputManager::new(dir.path().to_path_buf()).with_manifest(false);

        manager.write_all(&[class(3, "Packet03Chat")]).unwrap();
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }
}
