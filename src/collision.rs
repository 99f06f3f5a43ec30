//! Axis-aligned bounding boxes and the keyed collision lookup used by entities
//! before they commit a move.

use glam::Vec2;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::error::EntityError;
use crate::world::Entry;

/// The boxes reported by one collidable object, in a stable order.
///
/// Simple entities report exactly one box, so that case stays inline.
pub type BoxList = SmallVec<[BoundingBox; 1]>;

/// An axis-aligned rectangle in world-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Creates a box. Negative sizes are clamped to zero; non-finite sizes are
    /// kept as given so [`BoundingBox::is_finite`] still rejects them.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: clamp_size(width),
            height: clamp_size(height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns this box moved by `velocity`. The original is left untouched.
    pub fn offset_by(self, velocity: Vec2) -> Self {
        Self {
            x: self.x + velocity.x,
            y: self.y + velocity.y,
            ..self
        }
    }

    /// Whether every coordinate and dimension is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Two boxes overlap unless one is strictly to one side of the other.
    /// Touching edges count as overlapping.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let left_of = self.right() < other.x;
        let right_of = self.x > other.right();
        let above = self.bottom() < other.y;
        let below = self.y > other.bottom();

        !(left_of || right_of || above || below)
    }
}

fn clamp_size(size: f32) -> f32 {
    if size.is_finite() {
        size.max(0.0)
    } else {
        size
    }
}

/// Anything that occupies space in the world.
pub trait Collidable {
    /// The boxes this object occupies right now, in a stable order.
    fn bounding_boxes(&self) -> BoxList;
}

/// Keyed collision queries against the world registry.
///
/// While an object is being updated it is taken out of the registry; its boxes
/// are carried here under its key so it can still be named in a query.
pub struct CollisionIndex<'a> {
    entries: &'a [Entry],
    detached: Option<(&'a str, &'a [BoundingBox])>,
}

impl<'a> CollisionIndex<'a> {
    pub(crate) fn new(entries: &'a [Entry]) -> Self {
        Self { entries, detached: None }
    }

    pub(crate) fn with_detached(mut self, key: &'a str, boxes: &'a [BoundingBox]) -> Self {
        self.detached = Some((key, boxes));
        self
    }

    fn boxes_for(&self, key: &str) -> Option<BoxList> {
        if let Some((detached_key, boxes)) = self.detached {
            if detached_key == key {
                return Some(boxes.iter().copied().collect());
            }
        }

        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.object.as_ref())
            .map(|object| object.bounding_boxes())
    }

    /// Like [`CollisionIndex::check`], but reports a missing key as an error.
    pub fn try_check(&self, first: &str, second: &str, velocity: Vec2) -> Result<bool, EntityError> {
        let moving = self.boxes_for(first).ok_or_else(|| EntityError::NotFound(first.to_string()))?;
        let obstacles = self.boxes_for(second).ok_or_else(|| EntityError::NotFound(second.to_string()))?;

        for candidate in moving.iter().filter(|b| b.is_finite()).map(|b| b.offset_by(velocity)) {
            // Malformed geometry would otherwise produce false positives.
            if let Some(hit) = obstacles
                .iter()
                .filter(|b| b.is_finite())
                .find(|obstacle| candidate.overlaps(obstacle))
            {
                trace!(first, second, ?candidate, ?hit, "Collision detected");
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Whether `first`, displaced by `velocity`, would overlap any box of `second`.
    ///
    /// A key with nothing registered under it is not an error: it is logged and
    /// treated as no collision.
    pub fn check(&self, first: &str, second: &str, velocity: Vec2) -> bool {
        match self.try_check(first, second, velocity) {
            Ok(colliding) => colliding,
            Err(error) => {
                warn!(first, second, %error, "Collision check against a missing object");
                false
            }
        }
    }
}
