//! # Model Transform Stack
//!
//! The model-matrix state shared by the draw routines. Primitives that
//! place themselves by matrix composition (rect, ellipse, arc, quad,
//! triangle) save the state before mutating it and restore it on every
//! exit path, modeled as scoped acquisition/release rather than manual
//! save/restore pairs: dropping the [`TransformGuard`] restores the stack
//! even if the draw unwinds.

use glam::{DMat4, DVec3};

/// A stack of model matrices with the active matrix on top.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<DMat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Creates a stack holding the identity matrix.
    pub fn new() -> Self {
        Self {
            stack: vec![DMat4::IDENTITY],
        }
    }

    /// Returns the active model matrix.
    pub fn current(&self) -> &DMat4 {
        // The stack is never empty: it starts with one entry and the guard
        // only pops what it pushed.
        &self.stack[self.stack.len() - 1]
    }

    /// Pushes a copy of the active matrix and returns a guard that
    /// restores the previous state when dropped.
    pub fn save(&mut self) -> TransformGuard<'_> {
        let depth = self.stack.len();
        let top = *self.current();
        self.stack.push(top);
        TransformGuard { stack: self, depth }
    }

    fn apply(&mut self, matrix: DMat4) {
        let last = self.stack.len() - 1;
        self.stack[last] = self.stack[last] * matrix;
    }
}

/// Scoped handle over a saved transform state.
///
/// All mutations go through the guard; dropping it truncates the stack
/// back to the saved depth.
#[derive(Debug)]
pub struct TransformGuard<'a> {
    stack: &'a mut MatrixStack,
    depth: usize,
}

impl TransformGuard<'_> {
    /// Right-multiplies the active matrix.
    pub fn mult(&mut self, matrix: DMat4) {
        self.stack.apply(matrix);
    }

    /// Translates the active matrix.
    pub fn translate(&mut self, offset: DVec3) {
        self.stack.apply(DMat4::from_translation(offset));
    }

    /// Scales the active matrix per axis.
    pub fn scale(&mut self, factors: DVec3) {
        self.stack.apply(DMat4::from_scale(factors));
    }

    /// Returns the active model matrix.
    pub fn current(&self) -> &DMat4 {
        self.stack.current()
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.stack.stack.truncate(self.depth);
    }
}
