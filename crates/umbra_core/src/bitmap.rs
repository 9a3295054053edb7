//! Bitmap loading and caching for image textures.
//!
//! Decodes image files from disk into 8-bit RGB grids. Channel values are
//! kept as bytes; normalizing to [0, 1] happens at lookup time in the
//! renderer's image texture.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during bitmap loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {path}: {source}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture {0} has no pixels")]
    EmptyImage(PathBuf),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded image with 8-bit RGB pixels.
#[derive(Clone, Debug)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Row-major pixels, row 0 at the top of the image
    pub pixels: Vec<[u8; 3]>,

    /// Source file path (for debugging)
    pub path: String,
}

impl Bitmap {
    /// Create a bitmap from raw pixel data.
    ///
    /// `pixels` must hold `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>, path: impl Into<String>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// True when the bitmap has no pixel data.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get pixel at integer coordinates, (0, 0) being the top-left corner.
    ///
    /// Out-of-range coordinates are clamped to the last row/column.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if self.is_empty() {
            return [0, 0, 0];
        }
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<[u8; 3]>()
    }
}

/// Cache for loaded bitmaps.
///
/// Bitmaps are loaded on-demand and cached for reuse.
pub struct BitmapCache {
    /// Cached bitmaps by file path
    bitmaps: HashMap<String, Arc<Bitmap>>,

    /// Base directory for resolving relative paths
    base_dir: Option<PathBuf>,
}

impl BitmapCache {
    /// Create a new empty bitmap cache.
    pub fn new() -> Self {
        Self {
            bitmaps: HashMap::new(),
            base_dir: None,
        }
    }

    /// Create a bitmap cache with a base directory for relative paths.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            bitmaps: HashMap::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Load a bitmap from file, using cache if available.
    pub fn load(&mut self, path: &str) -> TextureResult<Arc<Bitmap>> {
        if let Some(bitmap) = self.bitmaps.get(path) {
            return Ok(bitmap.clone());
        }

        let full_path = self.resolve_path(path);
        let bitmap = Arc::new(load_bitmap(&full_path)?);
        self.bitmaps.insert(path.to_string(), bitmap.clone());

        Ok(bitmap)
    }

    /// Check if a bitmap is cached.
    pub fn is_cached(&self, path: &str) -> bool {
        self.bitmaps.contains_key(path)
    }

    /// Get the number of cached bitmaps.
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    /// Resolve a path relative to the base directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);

        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(base) = &self.base_dir {
            base.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for BitmapCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a bitmap from a file path.
///
/// Any format the `image` crate can decode is accepted; alpha is dropped.
pub fn load_bitmap(path: &Path) -> TextureResult<Bitmap> {
    let img = image::open(path).map_err(|source| TextureError::LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::EmptyImage(path.to_path_buf()));
    }

    let pixels: Vec<[u8; 3]> = rgb.pixels().map(|p| p.0).collect();
    let bitmap = Bitmap::new(width, height, pixels, path.to_string_lossy());

    log::debug!(
        "Loaded bitmap: {} ({}x{}, {:.1} KB)",
        path.display(),
        width,
        height,
        bitmap.size_bytes() as f32 / 1024.0
    );

    Ok(bitmap)
}
