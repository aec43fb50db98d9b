//! The retained-mode surface contract the drawing engine renders through.

use super::primitive::{Primitive, PrimitiveId, PrimitiveKind, Style};

/// A 2D retained-mode drawing surface.
///
/// The surface owns primitive geometry; callers only hold the [`PrimitiveId`]s it
/// returns. Deletion is idempotent: removing an id that is already gone is not an
/// error, it simply reports `false`.
pub trait CanvasSurface {
    /// Adds a primitive on top of everything else and returns its id.
    fn create_primitive(
        &mut self,
        kind: PrimitiveKind,
        points: Vec<(i32, i32)>,
        style: Style,
    ) -> PrimitiveId;

    /// Removes a primitive. Returns whether it was present.
    fn delete_primitive(&mut self, id: PrimitiveId) -> bool;

    /// Removes every primitive.
    fn delete_all(&mut self);

    /// Looks up a live primitive.
    fn get(&self, id: PrimitiveId) -> Option<&Primitive>;

    /// Number of live primitives.
    fn len(&self) -> usize;

    /// Returns true if no primitives are live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the id refers to a live primitive.
    fn contains(&self, id: PrimitiveId) -> bool {
        self.get(id).is_some()
    }
}
