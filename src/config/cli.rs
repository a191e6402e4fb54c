use crate::core::{ManifestSource, Storage};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads the compose manifest from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalManifest {
    path: String,
}

impl LocalManifest {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl ManifestSource for LocalManifest {
    async fn read_manifest(&self) -> Result<Vec<u8>> {
        let data = fs::read(&self.path)?;
        Ok(data)
    }
}

/// Writes converted configs under a base output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
