use std::rc::Rc;

use crate::foundation::color::{over_packed, pack};
use crate::foundation::core::{Point, Rgba};
use crate::layer::{FunctionRef, LayerRef, column_position, covered_rows};
use crate::raster::texture::Texture;

/// Color of the envelope outline.
pub const OUTLINE_COLOR: Rgba = Rgba::new(1.0, 0.5, 0.0, 1.0);

/// Layer stack of a transfer function editor.
///
/// Holds at most one background plus an ordered list of functions; index 0 is
/// the bottom of the stack, the last entry is topmost for both compositing and
/// hit-testing. The background always sits below every function.
pub struct Editor {
    background: Option<LayerRef>,
    functions: Vec<FunctionRef>,
    show_outline: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            background: None,
            functions: Vec::new(),
            show_outline: true,
        }
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("has_background", &self.background.is_some())
            .field("functions", &self.functions.len())
            .field("show_outline", &self.show_outline)
            .finish()
    }
}

impl Editor {
    /// Empty editor with the outline enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `func` on top of the stack.
    pub fn add_function(&mut self, func: FunctionRef) {
        self.functions.push(func);
        tracing::debug!(count = self.functions.len(), "function added");
    }

    /// Replace the background layer.
    pub fn set_background(&mut self, bg: LayerRef) {
        self.background = Some(bg);
        tracing::debug!("background set");
    }

    /// Move `func` to the top of the stack. No-op when it is not registered.
    pub fn move_to_top(&mut self, func: &FunctionRef) {
        let Some(idx) = self.functions.iter().position(|f| Rc::ptr_eq(f, func)) else {
            return;
        };
        let f = self.functions.remove(idx);
        self.functions.push(f);
        tracing::debug!(from = idx, "function moved to top");
    }

    /// Registered functions, bottom first.
    pub fn functions(&self) -> &[FunctionRef] {
        &self.functions
    }

    /// Current background layer.
    pub fn background(&self) -> Option<&LayerRef> {
        self.background.as_ref()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// `true` when no function is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Whether the envelope outline is drawn by [`Editor::rasterize`].
    pub fn show_outline(&self) -> bool {
        self.show_outline
    }

    /// Toggle the envelope outline.
    pub fn set_show_outline(&mut self, show: bool) {
        self.show_outline = show;
    }

    /// Envelope: pointwise maximum over all functions, never below 0.
    pub fn eval(&self, x: f64) -> f64 {
        self.functions
            .iter()
            .map(|f| f.eval(x))
            .fold(0.0, f64::max)
    }

    /// Topmost function whose curve lies above `pos`.
    pub fn select(&self, pos: Point) -> Option<FunctionRef> {
        self.functions
            .iter()
            .rev()
            .find(|f| pos.y < f.eval(pos.x))
            .cloned()
    }

    /// `n` envelope samples at `i / (n - 1)`; a single sample is taken at 0.
    pub fn sample_alpha(&self, n: usize) -> Vec<f32> {
        match n {
            0 => Vec::new(),
            1 => vec![self.eval(0.0) as f32],
            _ => {
                let last = (n - 1) as f64;
                (0..n).map(|i| self.eval(i as f64 / last) as f32).collect()
            }
        }
    }

    /// Composite every layer into a `width x height` texture.
    ///
    /// Functions are stacked bottom to top, the stack result is laid over the
    /// background, then the envelope outline is stamped on top.
    #[tracing::instrument(skip(self), fields(functions = self.functions.len()))]
    pub fn rasterize(&self, width: u32, height: u32) -> Texture {
        let mut tex = Texture::new(width, height);

        for func in &self.functions {
            let layer = func.rasterize(width, height);
            for (dst, &src) in tex.data_mut().iter_mut().zip(layer.data()) {
                *dst = over_packed(src, *dst);
            }
        }

        if let Some(bg) = &self.background {
            let bg = bg.rasterize(width, height);
            for (dst, &below) in tex.data_mut().iter_mut().zip(bg.data()) {
                *dst = over_packed(*dst, below);
            }
        }

        if self.show_outline {
            self.stamp_outline(&mut tex);
        }

        tex
    }

    fn stamp_outline(&self, tex: &mut Texture) {
        let (width, height) = (tex.width(), tex.height());
        if height == 0 {
            return;
        }
        let color = pack(OUTLINE_COLOR);
        for x in 0..width {
            let y = self.eval(column_position(x, width));
            if y > 0.0 {
                let row = covered_rows(y, height).min(height - 1);
                tex.set(x, row, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/stack.rs"]
mod tests;
