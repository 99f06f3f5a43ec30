//! The world: every renderable, collidable object, keyed by name, driven once per tick.

use rand::RngCore;
use tracing::{debug, error};

use crate::collision::{BoxList, Collidable, CollisionIndex};
use crate::error::TextureError;
use crate::input::KeyState;
use crate::texture::surface::Surface;

/// Everything an object may look at while it updates.
pub struct TickContext<'a> {
    /// The key the object being updated is registered under.
    pub key: &'a str,
    pub collisions: &'a CollisionIndex<'a>,
    pub input: KeyState,
    /// Seconds since the previous tick.
    pub dt: f32,
    pub rng: &'a mut dyn RngCore,
}

/// An object living in the world.
pub trait GameObject: Collidable {
    fn update(&mut self, _ctx: &mut TickContext<'_>) {}

    fn render(&self, surface: &mut dyn Surface) -> Result<(), TextureError>;
}

/// A registry slot. The object is only absent while it is being updated.
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) object: Option<Box<dyn GameObject>>,
}

/// Owns the world's objects in registration order.
#[derive(Default)]
pub struct World {
    entries: Vec<Entry>,
    debug_collision: bool,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `object` under `key`. An existing key is replaced in place,
    /// keeping its position in the draw order.
    pub fn register(&mut self, key: impl Into<String>, object: impl GameObject + 'static) {
        let key = key.into();
        let object: Box<dyn GameObject> = Box::new(object);

        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                debug!(%key, "Replacing world object");
                entry.object = Some(object);
            }
            None => {
                debug!(%key, "Registered world object");
                self.entries.push(Entry {
                    key,
                    object: Some(object),
                });
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&dyn GameObject> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.object.as_deref())
    }

    pub fn bounding_boxes(&self, key: &str) -> Option<BoxList> {
        self.get(key).map(|object| object.bounding_boxes())
    }

    pub fn set_debug_collision(&mut self, enabled: bool) {
        self.debug_collision = enabled;
    }

    pub fn debug_collision(&self) -> bool {
        self.debug_collision
    }

    /// Collision queries against the current state of the world.
    pub fn collisions(&self) -> CollisionIndex<'_> {
        CollisionIndex::new(&self.entries)
    }

    /// Updates every object once, in registration order.
    ///
    /// Each object sees the others as already updated this tick, and itself as
    /// it was before its own update.
    pub fn update(&mut self, input: KeyState, dt: f32, rng: &mut dyn RngCore) {
        for index in 0..self.entries.len() {
            let Some(mut object) = self.entries[index].object.take() else {
                continue;
            };

            let key = self.entries[index].key.clone();
            let boxes = object.bounding_boxes();
            {
                let collisions = CollisionIndex::new(&self.entries).with_detached(&key, &boxes);
                let mut ctx = TickContext {
                    key: &key,
                    collisions: &collisions,
                    input,
                    dt,
                    rng: &mut *rng,
                };
                object.update(&mut ctx);
            }

            self.entries[index].object = Some(object);
        }
    }

    /// Draws every object in registration order. A failed draw is logged and
    /// the remaining objects are still drawn.
    pub fn render(&self, surface: &mut dyn Surface) {
        for entry in &self.entries {
            let Some(object) = entry.object.as_deref() else {
                continue;
            };

            if let Err(e) = object.render(surface) {
                error!(key = %entry.key, "Failed to render world object: {e}");
            }
        }

        if self.debug_collision {
            self.render_collision_overlay(surface);
        }
    }

    fn render_collision_overlay(&self, surface: &mut dyn Surface) {
        for entry in &self.entries {
            let Some(object) = entry.object.as_deref() else {
                continue;
            };

            for bounds in object.bounding_boxes() {
                if let Err(e) = surface.outline(bounds) {
                    error!(key = %entry.key, "Failed to draw collision outline: {e}");
                    break;
                }
            }
        }
    }
}
