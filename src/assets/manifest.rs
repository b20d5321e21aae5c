use crate::assets::AssetError;
use crate::sprite::Animation;
use quicksilver::geom::{Rectangle, Vector};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// How a bitmap is split into equally sized animation cells.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CellGrid {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub count: u32,
}

impl CellGrid {
    pub fn cell_size(&self) -> Vector {
        Vector::new(self.width as f32, self.height as f32)
    }

    /// Cells are laid out left to right, then top to bottom.
    pub fn cell_area(&self, index: u32) -> Rectangle {
        let column = index % self.columns;
        let row = index / self.columns;
        Rectangle::new(
            (column as f32 * self.width as f32, row as f32 * self.height as f32),
            self.cell_size()
        )
    }

    /// Pixel size the whole grid covers, or `None` when it does not fit in a `u32`.
    fn extent(&self) -> Option<(u32, u32)> {
        if self.columns == 0 {
            return None;
        }
        let rows = self.count.checked_add(self.columns - 1)? / self.columns;
        Some((self.columns.checked_mul(self.width)?, rows.checked_mul(self.height)?))
    }

    pub fn fits(&self, image_size: Vector) -> bool {
        match self.extent() {
            Some((width, height)) => width as f32 <= image_size.x && height as f32 <= image_size.y,
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BitmapEntry {
    pub name: String,
    pub file: String,
    #[serde(default)]
    pub cells: Option<CellGrid>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    pub animations: HashMap<String, Animation>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BundleManifest {
    pub name: String,
    pub bitmaps: Vec<BitmapEntry>,
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,
}

impl BundleManifest {
    pub fn from_bytes(bytes: &[u8]) -> Result<BundleManifest, AssetError> {
        let manifest: BundleManifest = ron::de::from_bytes(bytes)
            .map_err(|e| AssetError::Parse(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), AssetError> {
        let mut bitmap_names = HashSet::new();
        for bitmap in self.bitmaps.iter() {
            if !bitmap_names.insert(bitmap.name.as_str()) {
                return Err(AssetError::Duplicate(bitmap.name.clone()));
            }
            if let Some(cells) = bitmap.cells {
                if cells.width == 0 || cells.height == 0 || cells.count == 0 || cells.extent().is_none() {
                    return Err(AssetError::CellGrid(bitmap.name.clone()));
                }
            }
        }

        let mut script_names = HashSet::new();
        for script in self.scripts.iter() {
            if !script_names.insert(script.name.as_str()) {
                return Err(AssetError::Duplicate(script.name.clone()));
            }
        }
        Ok(())
    }

    /// Ensures every name the game asks for is present.
    pub fn require(&self, bitmaps: &[&str], scripts: &[&str]) -> Result<(), AssetError> {
        for name in bitmaps {
            if !self.bitmaps.iter().any(|bitmap| bitmap.name == *name) {
                return Err(AssetError::Missing(name.to_string()));
            }
        }
        for name in scripts {
            if !self.scripts.iter().any(|script| script.name == *name) {
                return Err(AssetError::Missing(name.to_string()));
            }
        }
        Ok(())
    }
}
