//! On-disk document archive.
//!
//! Layout under the archive root:
//!
//! ```text
//! manifest.json            current document state
//! pages/<id>.png           one encoded raster per page
//! backups/manifest-*.json  rotating manifest backups
//! ```
//!
//! Manifests are written to a temporary file and renamed into place.
//! Every save also drops a timestamped backup copy; restore falls
//! back to the newest backup whose manifest and page files are still
//! readable when the primary copy is corrupt. Page rasters are kept
//! even when no longer referenced by the current manifest so older
//! backups stay restorable.

use chrono::{DateTime, Utc};
use image::ImageFormat;
use scandeck_core::{Page, PageId, PixelSource, StorageError};
use scandeck_document::DocumentSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ManifestPage {
    id: String,
    captured_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    version: u32,
    saved_at: DateTime<Utc>,
    pages: Vec<ManifestPage>,
    selected_for_bulk: Vec<String>,
    active_page_id: Option<String>,
}

/// A restored document and how it was recovered.
#[derive(Debug)]
pub struct Restored {
    /// The sanitized, validated snapshot.
    pub snapshot: DocumentSnapshot,
    /// Whether recovery fell back to a backup manifest.
    pub from_backup: bool,
}

/// Persists document snapshots under a directory, with rotating
/// manifest backups.
#[derive(Debug, Clone)]
pub struct DocumentArchive {
    root: PathBuf,
    backup_retention: usize,
}

impl DocumentArchive {
    /// Creates an archive rooted at `root`, keeping `backup_retention`
    /// manifest backups.
    pub fn new(root: impl Into<PathBuf>, backup_retention: usize) -> Self {
        Self {
            root: root.into(),
            backup_retention: backup_retention.max(1),
        }
    }

    /// The archive root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join("manifest.json")
    }

    fn pages_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    fn backups_dir(&self) -> PathBuf {
        self.root.join("backups")
    }

    fn page_path(&self, id: &PageId) -> PathBuf {
        self.pages_dir().join(format!("{id}.png"))
    }

    /// Saves `snapshot` as the current document state.
    ///
    /// The caller hands in a fully-valid snapshot; page rasters are
    /// encoded as PNG, then the manifest is atomically replaced and a
    /// backup copy dropped.
    pub fn save(&self, snapshot: &DocumentSnapshot) -> Result<(), StorageError> {
        fs::create_dir_all(self.pages_dir())?;
        fs::create_dir_all(self.backups_dir())?;

        for page in &snapshot.pages {
            self.write_page(page)?;
        }

        let manifest = Manifest {
            version: MANIFEST_VERSION,
            saved_at: Utc::now(),
            pages: snapshot
                .pages
                .iter()
                .map(|p| ManifestPage {
                    id: p.id.to_string(),
                    captured_at: p.captured_at,
                })
                .collect(),
            selected_for_bulk: snapshot
                .selected_for_bulk
                .iter()
                .map(|id| id.to_string())
                .collect(),
            active_page_id: snapshot.active_page_id.as_ref().map(|id| id.to_string()),
        };

        let encoded =
            serde_json::to_vec_pretty(&manifest).map_err(|e| StorageError::Corrupt {
                reason: format!("manifest serialization failed: {e}"),
            })?;
        write_atomic(&self.manifest_path(), &encoded)?;

        let backup_name = format!("manifest-{}.json", Utc::now().timestamp_millis());
        write_atomic(&self.backups_dir().join(backup_name), &encoded)?;
        self.prune_backups()?;

        tracing::debug!(pages = snapshot.pages.len(), "document archived");
        Ok(())
    }

    /// Restores the most recent valid document state.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet (first run).
    /// A corrupt primary manifest falls back to the newest readable
    /// backup; the restored snapshot is sanitized before being handed
    /// back, stripping any dangling selection references.
    pub fn load(&self) -> Result<Option<Restored>, StorageError> {
        let primary = self.manifest_path();
        if !primary.exists() {
            return Ok(None);
        }

        match self.load_manifest(&primary) {
            Ok(snapshot) => Ok(Some(Restored {
                snapshot,
                from_backup: false,
            })),
            Err(primary_err) => {
                tracing::warn!(
                    "primary manifest unreadable ({primary_err}), trying backup recovery"
                );
                let snapshot = self.load_newest_backup().map_err(|_| primary_err)?;
                Ok(Some(Restored {
                    snapshot,
                    from_backup: true,
                }))
            }
        }
    }

    fn load_manifest(&self, path: &Path) -> Result<DocumentSnapshot, StorageError> {
        let content = fs::read(path)?;
        let manifest: Manifest =
            serde_json::from_slice(&content).map_err(|e| StorageError::Corrupt {
                reason: format!("manifest parse failed: {e}"),
            })?;
        if manifest.version != MANIFEST_VERSION {
            return Err(StorageError::Corrupt {
                reason: format!("unsupported manifest version {}", manifest.version),
            });
        }

        let mut pages = Vec::with_capacity(manifest.pages.len());
        for entry in &manifest.pages {
            let id = PageId::from_string(&entry.id);
            pages.push(Page::with_captured_at(
                id.clone(),
                self.read_page(&id)?,
                entry.captured_at,
            ));
        }

        let snapshot = DocumentSnapshot {
            pages,
            selected_for_bulk: manifest
                .selected_for_bulk
                .iter()
                .map(PageId::from_string)
                .collect(),
            active_page_id: manifest.active_page_id.map(PageId::from_string),
            timestamp: manifest.saved_at,
        };

        // Persisted state is untrusted: strip anything dangling
        // rather than install an invariant-breaking snapshot.
        let sanitized = snapshot.sanitized();
        sanitized.validate().map_err(|e| StorageError::Corrupt {
            reason: e.to_string(),
        })?;
        Ok(sanitized)
    }

    fn load_newest_backup(&self) -> Result<DocumentSnapshot, StorageError> {
        let mut backups: Vec<PathBuf> = match fs::read_dir(self.backups_dir()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect(),
            Err(_) => Vec::new(),
        };
        // Timestamped names sort chronologically.
        backups.sort();

        for path in backups.iter().rev() {
            match self.load_manifest(path) {
                Ok(snapshot) => {
                    tracing::info!(backup = %path.display(), "recovered document from backup");
                    return Ok(snapshot);
                }
                Err(e) => {
                    tracing::warn!(backup = %path.display(), "skipping unreadable backup: {e}");
                }
            }
        }

        Err(StorageError::Corrupt {
            reason: "no valid backup manifest found".to_string(),
        })
    }

    fn prune_backups(&self) -> Result<(), StorageError> {
        let mut backups: Vec<PathBuf> = fs::read_dir(self.backups_dir())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        backups.sort();

        while backups.len() > self.backup_retention {
            let oldest = backups.remove(0);
            fs::remove_file(&oldest)?;
        }
        Ok(())
    }

    fn write_page(&self, page: &Page) -> Result<(), StorageError> {
        let mut encoded = Vec::new();
        page.pixels
            .image()
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|e| StorageError::PixelCodec {
                id: page.id.to_string(),
                reason: e.to_string(),
            })?;
        write_atomic(&self.page_path(&page.id), &encoded)
    }

    fn read_page(&self, id: &PageId) -> Result<PixelSource, StorageError> {
        let content = fs::read(self.page_path(id))?;
        let image = image::load_from_memory_with_format(&content, ImageFormat::Png).map_err(
            |e| StorageError::PixelCodec {
                id: id.to_string(),
                reason: e.to_string(),
            },
        )?;
        Ok(PixelSource::new(image))
    }
}

/// Writes via a sibling temporary file and rename, so readers never
/// observe a half-written file.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
