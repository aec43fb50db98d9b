//! In-memory retained canvas backing both the window and PNG export.

use super::primitive::{Primitive, PrimitiveId, PrimitiveKind, Style};
use super::surface::CanvasSurface;
use crate::util::Rect;
use log::debug;
use std::collections::BTreeMap;

/// Retained canvas keyed by id.
///
/// Ids are allocated in increasing order, so iterating the map yields primitives
/// in stacking order (first = bottom layer, last = top layer). Every mutation also
/// records the affected area so the backend can limit damage to what changed.
#[derive(Debug)]
pub struct RetainedCanvas {
    primitives: BTreeMap<PrimitiveId, Primitive>,
    next_id: u64,
    damage: Vec<Rect>,
    full_damage: bool,
}

impl Default for RetainedCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RetainedCanvas {
    /// Creates an empty canvas. The first id handed out is `#1`.
    pub fn new() -> Self {
        Self {
            primitives: BTreeMap::new(),
            next_id: 1,
            damage: Vec::new(),
            full_damage: true,
        }
    }

    /// Iterates live primitives bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(id, primitive)| (*id, primitive))
    }

    /// Ids of live primitives bottom to top.
    pub fn ids(&self) -> Vec<PrimitiveId> {
        self.primitives.keys().copied().collect()
    }

    /// Forces the next damage drain to cover the whole canvas.
    pub fn mark_full_damage(&mut self) {
        self.full_damage = true;
        self.damage.clear();
    }

    /// Drains damage regions in canvas coordinates.
    ///
    /// When the whole canvas is dirty a single rectangle of the given size is returned.
    pub fn take_damage(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.full_damage {
            self.full_damage = false;
            self.damage.clear();
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        std::mem::take(&mut self.damage)
    }

    fn mark_primitive(&mut self, primitive: &Primitive) {
        if self.full_damage {
            return;
        }
        match primitive.bounding_box() {
            Some(rect) => self.damage.push(rect),
            None => self.mark_full_damage(),
        }
    }
}

impl CanvasSurface for RetainedCanvas {
    fn create_primitive(
        &mut self,
        kind: PrimitiveKind,
        points: Vec<(i32, i32)>,
        style: Style,
    ) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;

        let primitive = Primitive {
            kind,
            points,
            style,
        };
        self.mark_primitive(&primitive);
        debug!(
            "Created {:?} {} with {} points",
            kind,
            id,
            primitive.points.len()
        );
        self.primitives.insert(id, primitive);
        id
    }

    fn delete_primitive(&mut self, id: PrimitiveId) -> bool {
        match self.primitives.remove(&id) {
            Some(primitive) => {
                self.mark_primitive(&primitive);
                true
            }
            None => {
                debug!("Ignoring delete of missing primitive {}", id);
                false
            }
        }
    }

    fn delete_all(&mut self) {
        self.primitives.clear();
        self.mark_full_damage();
    }

    fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    fn len(&self) -> usize {
        self.primitives.len()
    }
}
