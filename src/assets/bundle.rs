use crate::assets::manifest::BundleManifest;
use crate::assets::{AssetError, REQUIRED_BITMAPS, REQUIRED_SCRIPTS};
use crate::sprite::{Animation, AssetSource};
use quicksilver::{
    combinators::{join_all, result},
    geom::Vector,
    graphics::Image,
    load_file,
    Future,
};
use std::collections::HashMap;

struct LoadedBitmap {
    cell_size: Vector,
    cells: Vec<Image>,
}

/// Every bitmap and animation script of the game, with bitmaps already cut
/// into their animation cells.
pub struct Bundle {
    name: String,
    bitmaps: HashMap<String, LoadedBitmap>,
    scripts: HashMap<String, HashMap<String, Animation>>,
}

impl Bundle {
    pub fn load(path: &str) -> impl Future<Item = Bundle, Error = quicksilver::Error> {
        load_file(path.to_string())
            .and_then(|bytes| result(Self::read_manifest(&bytes).map_err(quicksilver::Error::from)))
            .and_then(|manifest| {
                let images: Vec<_> = manifest.bitmaps.iter()
                    .map(|bitmap| Image::load(bitmap.file.clone()))
                    .collect();
                join_all(images)
                    .and_then(move |images| result(Self::assemble(manifest, images).map_err(quicksilver::Error::from)))
            })
    }

    fn read_manifest(bytes: &[u8]) -> Result<BundleManifest, AssetError> {
        let manifest = BundleManifest::from_bytes(bytes)?;
        manifest.require(REQUIRED_BITMAPS, REQUIRED_SCRIPTS)?;
        Ok(manifest)
    }

    fn assemble(manifest: BundleManifest, images: Vec<Image>) -> Result<Bundle, AssetError> {
        let mut bitmaps = HashMap::new();
        for (entry, image) in manifest.bitmaps.into_iter().zip(images.into_iter()) {
            let loaded = match entry.cells {
                Some(grid) => {
                    if !grid.fits(image.area().size) {
                        return Err(AssetError::CellGrid(entry.name));
                    }
                    LoadedBitmap {
                        cell_size: grid.cell_size(),
                        cells: (0 .. grid.count).map(|index| image.subimage(grid.cell_area(index))).collect(),
                    }
                }
                None => LoadedBitmap { cell_size: image.area().size, cells: vec![image] },
            };
            bitmaps.insert(entry.name, loaded);
        }

        let scripts = manifest.scripts.into_iter()
            .map(|script| (script.name, script.animations))
            .collect();

        Ok(Bundle { name: manifest.name, bitmaps, scripts })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The image for one cell; out of range cells fall back to the first one.
    pub fn cell(&self, bitmap: &str, cell: usize) -> Option<&Image> {
        self.bitmaps.get(bitmap)
            .and_then(|loaded| loaded.cells.get(cell).or_else(|| loaded.cells.first()))
    }
}

impl AssetSource for Bundle {
    fn bitmap_size(&self, bitmap: &str) -> Option<Vector> {
        self.bitmaps.get(bitmap).map(|loaded| loaded.cell_size)
    }

    fn has_script(&self, script: &str) -> bool {
        self.scripts.contains_key(script)
    }

    fn animation(&self, script: &str, name: &str) -> Option<&Animation> {
        self.scripts.get(script).and_then(|animations| animations.get(name))
    }
}
