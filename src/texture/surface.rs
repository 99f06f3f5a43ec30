use crate::collision::BoundingBox;
use crate::error::TextureError;
use crate::texture::sheet::Tile;

/// The drawing surface the engine renders onto.
///
/// Drawing a tile means copying its source region out of its sheet into
/// `dest`, scaled to fit.
pub trait Surface {
    fn draw(&mut self, tile: &Tile, dest: BoundingBox) -> Result<(), TextureError>;

    /// Outlines a region. Only used by the collision debug overlay.
    fn outline(&mut self, _bounds: BoundingBox) -> Result<(), TextureError> {
        Ok(())
    }
}
