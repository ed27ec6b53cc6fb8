//! Single attachment point for the active particle field.
//!
//! Regeneration swaps fields wholesale: the slot owns at most one
//! `(ParticleField, backing)` pair, and `replace` releases the old backing
//! before installing the new one, so two fields are never attached at once
//! and every backing is released exactly once.

use crate::galaxy::ParticleField;

/// Rendering-stage resources tied to an attached field (GPU buffers in the
/// browser, a counting stub in tests).
pub trait FieldBacking {
    fn release(&mut self);
}

/// No-op backing for callers that keep fields purely CPU-side.
impl FieldBacking for () {
    fn release(&mut self) {}
}

/// Owns the one field currently attached to the scene.
pub struct FieldSlot<B: FieldBacking> {
    attached: Option<(ParticleField, B)>,
}

impl<B: FieldBacking> FieldSlot<B> {
    pub fn new() -> Self {
        Self { attached: None }
    }

    /// Release the previous backing (if any) and install the new pair.
    pub fn replace(&mut self, field: ParticleField, backing: B) {
        if let Some((_, mut old)) = self.attached.take() {
            old.release();
        }
        self.attached = Some((field, backing));
    }

    /// Detach and release without installing a replacement.
    pub fn clear(&mut self) {
        if let Some((_, mut old)) = self.attached.take() {
            old.release();
        }
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.attached.as_ref().map(|(field, _)| field)
    }

    pub fn backing(&self) -> Option<&B> {
        self.attached.as_ref().map(|(_, backing)| backing)
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}

impl<B: FieldBacking> Default for FieldSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: FieldBacking> Drop for FieldSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
