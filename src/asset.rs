//! Asset identification.
//!
//! Images are loaded by whatever front-end hosts the engine; the engine only
//! needs a stable key per asset path.

use strum_macros::{EnumIter, IntoStaticStr};

use crate::constants::{GRID_SHEET_PATH, SPRITES_SHEET_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Asset {
    /// The maze theme sheet.
    Grid,
    /// Characters: player and ghosts.
    SpritesAlpha,
}

impl Asset {
    /// The default path the front-end loads this asset from.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Grid => GRID_SHEET_PATH,
            Asset::SpritesAlpha => SPRITES_SHEET_PATH,
        }
    }

    /// The registry key, which is also what [`asset_key`] derives from the path.
    pub fn key(&self) -> &'static str {
        (*self).into()
    }
}

/// Derives a lookup key from an asset path.
///
/// Strips a leading `./` (or `.`), keeps the last path segment and drops the
/// extension: `./img/grid.png` becomes `grid`.
pub fn asset_key(path: &str) -> &str {
    let path = path.strip_prefix("./").or_else(|| path.strip_prefix('.')).unwrap_or(path);
    let name = path.rsplit('/').next().unwrap_or(path);
    name.split('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_asset_key_matches_path() {
        for asset in Asset::iter() {
            assert_eq!(asset_key(asset.path()), asset.key());
        }
    }
}
