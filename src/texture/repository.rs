use tracing::debug;

use crate::asset::asset_key;
use crate::texture::sheet::{LoadHandle, SheetId, SpriteSheet};

/// The opaque image-loading service.
///
/// Implementations start loading `handle.source()` and complete the handle
/// when done, either right away or later from another thread.
pub trait ImageLoader {
    fn load(&mut self, id: SheetId, handle: LoadHandle);
}

/// All sprite sheets the game uses, keyed by the name derived from their path.
#[derive(Debug, Default)]
pub struct SpriteRepository {
    sheets: Vec<(String, SpriteSheet)>,
}

impl SpriteRepository {
    pub fn new<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut repository = Self::default();
        for path in paths {
            repository.register(path);
        }
        repository
    }

    /// Registers a sheet for `path`, returning its id. A path whose key is
    /// already registered replaces the earlier sheet.
    pub fn register(&mut self, path: &str) -> SheetId {
        let key = asset_key(path).to_string();

        if let Some(index) = self.sheets.iter().position(|(existing, _)| *existing == key) {
            let id = self.sheets[index].1.id();
            debug!(%key, path, "Replacing sprite sheet");
            self.sheets[index].1 = SpriteSheet::new(id, path);
            return id;
        }

        let id = SheetId(self.sheets.len() as u16);
        debug!(%key, path, ?id, "Registered sprite sheet");
        self.sheets.push((key, SpriteSheet::new(id, path)));
        id
    }

    pub fn fetch(&self, key: &str) -> Option<&SpriteSheet> {
        self.sheets.iter().find(|(existing, _)| existing == key).map(|(_, sheet)| sheet)
    }

    pub fn get(&self, id: SheetId) -> Option<&SpriteSheet> {
        self.sheets.get(id.0 as usize).map(|(_, sheet)| sheet)
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&str, &SpriteSheet)> {
        self.sheets.iter().map(|(key, sheet)| (key.as_str(), sheet))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Whether every sheet has finished its load attempt.
    pub fn is_loaded(&self) -> bool {
        self.sheets.iter().all(|(_, sheet)| sheet.loaded())
    }

    /// Hands every sheet that is still pending to `loader`.
    pub fn load_with(&self, loader: &mut dyn ImageLoader) {
        for (key, sheet) in &self.sheets {
            if !sheet.loaded() {
                debug!(%key, source = sheet.source(), "Requesting sprite sheet load");
                loader.load(sheet.id(), sheet.handle());
            }
        }
    }
}
