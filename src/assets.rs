//! Asset registry and loading.
//!
//! Assets are source images available for placement. Bundled assets come from
//! an [`AssetSource`] and are preloaded concurrently at startup; uploaded
//! assets arrive one at a time from the host. Only natural pixel dimensions
//! are decoded here. Thumbnails are the host's concern.

use crate::error::{AssetError, AssetResult};
use crate::types::{Asset, AssetId, AssetOrigin};
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Manifest file listing bundled asset names
pub const DEFAULT_MANIFEST: &str = "posters.json";

// ============================================================================
// Registry
// ============================================================================

/// Owns every asset known to the session, in registration order.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
    next_id: AssetId,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        natural_size: (f32, f32),
        origin: AssetOrigin,
        bytes: Arc<[u8]>,
    ) -> AssetId {
        let id = self.next_id;
        self.next_id += 1;
        self.assets.push(Asset {
            id,
            name: name.into(),
            natural_size,
            origin,
            bytes,
        });
        id
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    /// Restore lookup: the first asset with this display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Drop every uploaded asset, returning the removed ids.
    pub fn remove_uploaded(&mut self) -> Vec<AssetId> {
        let removed: Vec<AssetId> = self
            .assets
            .iter()
            .filter(|asset| asset.is_uploaded())
            .map(|asset| asset.id)
            .collect();
        self.assets.retain(|asset| !asset.is_uploaded());
        removed
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// An asset whose dimensions have been decoded but which is not yet
/// registered.
#[derive(Clone, Debug)]
pub struct DecodedAsset {
    pub name: String,
    pub natural_size: (f32, f32),
    pub bytes: Arc<[u8]>,
}

/// Read the pixel dimensions from encoded image bytes without decoding the
/// full image.
pub fn decode_dimensions(name: &str, bytes: &[u8]) -> AssetResult<(u32, u32)> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(AssetError::EmptyImage {
            name: name.to_string(),
            width,
            height,
        });
    }
    Ok((width, height))
}

pub fn decode_asset(name: &str, bytes: Vec<u8>) -> AssetResult<DecodedAsset> {
    let (width, height) = decode_dimensions(name, &bytes)?;
    Ok(DecodedAsset {
        name: name.to_string(),
        natural_size: (width as f32, height as f32),
        bytes: Arc::from(bytes),
    })
}

// ============================================================================
// Sources
// ============================================================================

/// Supplier of bundled assets.
pub trait AssetSource: Send + Sync {
    /// Identifiers of every bundled asset, in any order.
    fn list(&self) -> AssetResult<Vec<String>>;

    /// Raw encoded bytes for one identifier.
    fn read(&self, name: &str) -> AssetResult<Vec<u8>>;
}

/// Bundled assets stored in a directory.
///
/// The asset list comes from a JSON manifest (an array of file names) when
/// present, otherwise from the directory entries whose extension is a known
/// image format.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
    manifest: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirectorySource {
    fn list(&self) -> AssetResult<Vec<String>> {
        let manifest = self.root.join(&self.manifest);
        if manifest.is_file() {
            let text = std::fs::read_to_string(&manifest)?;
            return Ok(serde_json::from_str(&text)?);
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || ImageFormat::from_path(&path).is_err() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> AssetResult<Vec<u8>> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(name.to_string()));
        }
        Ok(std::fs::read(path)?)
    }
}

/// Load and decode every bundled asset.
///
/// Decoding runs on scoped worker threads. A failed asset is logged and
/// skipped; only a failure to list the source fails the batch. The result is
/// sorted by name, case-insensitively.
pub fn preload(source: &dyn AssetSource) -> AssetResult<Vec<DecodedAsset>> {
    crate::profile_scope!("preload_assets");

    let mut names = source.list()?;
    names.sort_by_key(|name| name.to_lowercase());
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(names.len());
    let chunk_size = names.len().div_ceil(workers);

    let loaded: Vec<Option<DecodedAsset>> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|name| load_one(source, name))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .zip(names.chunks(chunk_size))
            .flat_map(|(handle, chunk)| match handle.join() {
                Ok(results) => results,
                Err(_) => {
                    warn!(count = chunk.len(), "Asset worker panicked, skipping its assets");
                    vec![None; chunk.len()]
                }
            })
            .collect()
    });

    let assets: Vec<DecodedAsset> = loaded.into_iter().flatten().collect();
    debug!(requested = names.len(), loaded = assets.len(), "Preloaded bundled assets");
    Ok(assets)
}

fn load_one(source: &dyn AssetSource, name: &str) -> Option<DecodedAsset> {
    match source.read(name).and_then(|bytes| decode_asset(name, bytes)) {
        Ok(asset) => Some(asset),
        Err(e) => {
            warn!(asset = name, error = %e, "Failed to load asset");
            None
        }
    }
}
