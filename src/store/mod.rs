mod models;

pub use models::*;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Line-oriented task file: one title per line.
///
/// Only titles are written back; descriptions and statuses live for the
/// length of a session.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open an existing data file. A missing file is an error; use
    /// [`Store::create`] to make one.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            bail!("data file {} does not exist", path.display());
        }
        Ok(Store { path })
    }

    /// Create an empty data file (and its parent directories) unless one
    /// already exists, then open it.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            tracing::info!("created data file {}", path.display());
        }
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Item>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        // Bytes that are not UTF-8 are replaced rather than refusing the file.
        let mut reader = BufReader::new(file);
        let mut items = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed to read {}", self.path.display()))?;
            if read == 0 {
                break;
            }
            let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            items.push(Item::new(String::from_utf8_lossy(line)));
        }

        tracing::info!("loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Truncate the file and write one title per line, in order.
    pub fn save(&self, items: &[Item]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to open {} for writing", self.path.display()))?;
        let mut out = BufWriter::new(file);
        for item in items {
            writeln!(out, "{}", item.title)
                .with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        out.flush()
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::info!("saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Append one unmarked item and persist immediately. A title spanning
    /// several lines would load back as several items, so it is refused.
    pub fn append(&self, title: &str) -> Result<Item> {
        if title.contains(['\n', '\r']) {
            bail!("task title must be a single line");
        }
        let mut items = self.load()?;
        let item = Item::new(title);
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }
}
