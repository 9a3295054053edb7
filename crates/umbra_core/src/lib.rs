//! Umbra Core - external resources for the path tracer.
//!
//! This crate provides:
//!
//! - **Bitmap loading**: decoding image files into 8-bit RGB pixel grids
//! - **Bitmap cache**: path-keyed sharing so a file is decoded once per run
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::BitmapCache;
//!
//! let mut cache = BitmapCache::new();
//! let earth = cache.load("earthmap.jpg")?;
//! println!("Loaded {}x{}", earth.width, earth.height);
//! ```

pub mod bitmap;

// Re-export commonly used types
pub use bitmap::{load_bitmap, Bitmap, BitmapCache, TextureError, TextureResult};
