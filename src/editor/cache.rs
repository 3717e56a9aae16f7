use crate::editor::stack::Editor;
use crate::foundation::core::Point;
use crate::layer::{FunctionRef, LayerRef};
use crate::raster::texture::Texture;

/// Editor wrapper that keeps the last raster and only recomposites when the
/// stack changed or a different size is requested.
///
/// Display layers poll [`RasterCache::texture`] every frame; the result is
/// byte-identical to a fresh [`Editor::rasterize`] for the same state.
#[derive(Debug, Default)]
pub struct RasterCache {
    editor: Editor,
    cached: Option<Texture>,
}

impl RasterCache {
    /// Wrap an editor; the first [`RasterCache::texture`] call rasterizes.
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            cached: None,
        }
    }

    /// Read access to the wrapped editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Unwrap the editor, dropping the cached raster.
    pub fn into_editor(self) -> Editor {
        self.editor
    }

    /// See [`Editor::add_function`].
    pub fn add_function(&mut self, func: FunctionRef) {
        self.editor.add_function(func);
        self.invalidate();
    }

    /// See [`Editor::set_background`].
    pub fn set_background(&mut self, bg: LayerRef) {
        self.editor.set_background(bg);
        self.invalidate();
    }

    /// See [`Editor::move_to_top`].
    pub fn move_to_top(&mut self, func: &FunctionRef) {
        self.editor.move_to_top(func);
        self.invalidate();
    }

    /// See [`Editor::set_show_outline`].
    pub fn set_show_outline(&mut self, show: bool) {
        if self.editor.show_outline() != show {
            self.editor.set_show_outline(show);
            self.invalidate();
        }
    }

    /// See [`Editor::select`].
    pub fn select(&self, pos: Point) -> Option<FunctionRef> {
        self.editor.select(pos)
    }

    /// Drop the cached raster, e.g. after a function changed behind its handle.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// `true` when the next [`RasterCache::texture`] call of this size is free.
    pub fn is_fresh(&self, width: u32, height: u32) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|t| t.width() == width && t.height() == height)
    }

    /// Composited raster of the current stack at `width x height`.
    pub fn texture(&mut self, width: u32, height: u32) -> &Texture {
        if self.is_fresh(width, height) {
            tracing::trace!(width, height, "raster cache hit");
        } else {
            tracing::debug!(width, height, "raster cache refresh");
            self.cached = Some(self.editor.rasterize(width, height));
        }
        self.cached.get_or_insert_with(|| Texture::new(width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/cache.rs"]
mod tests;
