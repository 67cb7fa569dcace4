//! Auto-sizing text field state.
//!
//! [`AutoFitField`] is the glue between a host text widget and [`FitSearch`]. The
//! host forwards its "text changed" and "size changed" events here and reads the
//! chosen size back with [`AutoFitField::text_size`]. The field never draws
//! anything; applying the size is up to the host.

use crate::config::FitConfig;
use crate::measure::{Measurer, TextSource};
use crate::primitives::{AvailableSpace, Spacing};
use crate::search::FitSearch;

/// Text field whose font size shrinks or grows to fit its measured box.
#[derive(Debug, Clone)]
pub struct AutoFitField {
    text: String,
    hint: Option<String>,
    /// Removes the hint on the first edit
    clear_hint_on_edit: bool,
    padding: Spacing,
    measured: [f32; 2],
    text_size: f32,
    default_typeface: bool,
    scale_factor: f32,
    should_resize: bool,
    search: FitSearch,
}

impl AutoFitField {
    /// Create a field whose largest size is the declared text size.
    pub fn new(declared_size: u32) -> Self {
        Self::with_config(FitConfig::new(declared_size))
    }

    pub fn with_config(config: FitConfig) -> Self {
        Self {
            text: String::new(),
            hint: None,
            clear_hint_on_edit: true,
            padding: Spacing::zero(),
            measured: [0.0, 0.0],
            text_size: config.max_size as f32,
            default_typeface: true,
            scale_factor: 1.0,
            should_resize: false,
            search: FitSearch::new(config),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Replace the hint without touching the size. Takes effect on the next adjust.
    pub fn set_hint(&mut self, hint: Option<String>) {
        self.hint = hint;
    }

    /// Text used for measuring: the hint if non-empty, the content otherwise.
    pub fn effective_text(&self) -> &str {
        TextSource::new(&self.text, self.hint.as_deref()).effective()
    }

    /// Currently applied font size.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn measured_size(&self) -> [f32; 2] {
        self.measured
    }

    pub fn is_default_typeface(&self) -> bool {
        self.default_typeface
    }

    /// Mark the typeface as custom. Custom typefaces scale the height limit by
    /// [`AutoFitField::scale_factor`].
    pub fn set_typeface_default(&mut self, default: bool) {
        self.default_typeface = default;
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    pub fn should_resize(&self) -> bool {
        self.should_resize
    }

    pub fn set_should_resize(&mut self, should_resize: bool) {
        self.should_resize = should_resize;
    }

    pub fn search(&self) -> &FitSearch {
        &self.search
    }

    /// Text changed event.
    pub fn set_text<M: Measurer + ?Sized>(&mut self, text: impl Into<String>, measurer: &mut M) {
        self.text = text.into();
        if self.clear_hint_on_edit {
            self.clear_hint_on_edit = false;
            self.hint = None;
        }
        self.adjust_text_size(measurer);
    }

    /// Size changed event. Always drops cached sizes, re-adjusts only on a real change.
    pub fn on_size_changed<M: Measurer + ?Sized>(
        &mut self,
        width: f32,
        height: f32,
        measurer: &mut M,
    ) {
        self.search.invalidate();
        let old = self.measured;
        self.measured = [width, height];
        if old != self.measured {
            self.adjust_text_size(measurer);
        }
    }

    /// Space left for text inside the measured box.
    pub fn available_space(&self) -> AvailableSpace {
        let [width, height] = self.measured;
        let height = if self.default_typeface {
            height
        } else {
            (height * self.scale_factor).trunc()
        };

        AvailableSpace::new(
            width - self.padding.horizontal(),
            height - self.padding.vertical(),
        )
    }

    /// Declared text size changed: becomes the largest candidate size.
    pub fn set_max_size<M: Measurer + ?Sized>(&mut self, max_size: u32, measurer: &mut M) {
        self.search.set_max_size(max_size);
        self.adjust_text_size(measurer);
    }

    pub fn set_min_size<M: Measurer + ?Sized>(&mut self, min_size: u32, measurer: &mut M) {
        self.search.set_min_size(min_size);
        self.adjust_text_size(measurer);
    }

    /// Resolve and apply a new text size.
    ///
    /// Does nothing when no room is left after padding.
    pub fn adjust_text_size<M: Measurer + ?Sized>(&mut self, measurer: &mut M) {
        let space = self.available_space();
        if space.is_empty() {
            log::trace!("no room ({}x{}), size unchanged", space.width, space.height);
            return;
        }

        let text = TextSource::new(&self.text, self.hint.as_deref()).effective();
        let size = self.search.resolve_configured(measurer, text, space);
        self.text_size = size as f32;
    }
}
