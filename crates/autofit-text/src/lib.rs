//! Text-engine backed measurement for `autofit-core`.
//!
//! # Current implementation
//! The `cosmic` feature provides a [`ContentMeasurer`] using `cosmic-text`. It shapes
//! a single unwrapped line and reports:
//! - width: the advance width of the shaped line
//! - height: the font spacing (line height) at the requested size
//!
//! Wrap it in [`autofit_core::BoundsMeasurer`] to drive a [`autofit_core::FitSearch`].

#[cfg(feature = "cosmic")]
use autofit_core::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A convenient concrete engine selection.
///
/// Currently only cosmic-text is supported.
pub enum Engine {
    #[cfg(feature = "cosmic")]
    Cosmic(cosmic::CosmicMeasurer),
}

impl Engine {
    /// Create a default engine using the system font database.
    #[cfg(feature = "cosmic")]
    pub fn new_default() -> Self {
        Self::Cosmic(cosmic::CosmicMeasurer::new())
    }

    /// Whether measurement uses the engine's default family.
    #[cfg(feature = "cosmic")]
    pub fn is_default_typeface(&self) -> bool {
        match self {
            Self::Cosmic(engine) => engine.is_default_typeface(),
        }
    }
}

#[cfg(feature = "cosmic")]
impl ContentMeasurer for Engine {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        match self {
            Self::Cosmic(engine) => engine.measure_text(request),
        }
    }
}

#[cfg(feature = "cosmic")]
pub mod cosmic {
    //! `cosmic-text` implementation of line measurement.

    use super::LINE_HEIGHT_FACTOR;

    use autofit_core::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};
    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

    /// Measurer backed by `cosmic-text`.
    pub struct CosmicMeasurer {
        font_system: FontSystem,
        /// Family used when a request does not name one. `None` means sans-serif.
        family: Option<String>,
    }

    impl Default for CosmicMeasurer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CosmicMeasurer {
        /// Create a measurer over the system font database.
        pub fn new() -> Self {
            Self::from_font_system(FontSystem::new())
        }

        /// Create a measurer over the system fonts plus the given font files.
        pub fn with_font_data(fonts: Vec<Vec<u8>>) -> Self {
            let mut font_system = FontSystem::new();
            for data in fonts {
                font_system.db_mut().load_font_data(data);
            }
            Self::from_font_system(font_system)
        }

        pub fn from_font_system(font_system: FontSystem) -> Self {
            log::debug!("font database holds {} faces", font_system.db().len());
            Self {
                font_system,
                family: None,
            }
        }

        /// Measure with the named family instead of sans-serif.
        pub fn with_family(mut self, family: impl Into<String>) -> Self {
            self.family = Some(family.into());
            self
        }

        pub fn is_default_typeface(&self) -> bool {
            self.family.is_none()
        }

        /// Access the underlying `FontSystem` if callers want to customize further.
        pub fn font_system_mut(&mut self) -> &mut FontSystem {
            &mut self.font_system
        }
    }

    impl ContentMeasurer for CosmicMeasurer {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            let Self {
                font_system,
                family,
            } = self;

            let metrics = Metrics::new(request.font_size, request.font_size * LINE_HEIGHT_FACTOR);
            if request.text.is_empty() {
                return IntrinsicSize::new(0.0, metrics.line_height);
            }

            let mut buffer = Buffer::new(font_system, metrics);

            // Prevent wrapping: unbounded width, one line of height.
            buffer.set_size(font_system, None, Some(metrics.line_height));

            let family = match request.family.or(family.as_deref()) {
                Some(name) => Family::Name(name),
                None => Family::SansSerif,
            };
            let attrs = Attrs::new().family(family);

            buffer.set_text(font_system, request.text, &attrs, Shaping::Advanced, None);
            buffer.shape_until_scroll(font_system, false);

            let width = buffer
                .layout_runs()
                .map(|run| run.line_w)
                .fold(0.0_f32, f32::max);

            IntrinsicSize::new(width, metrics.line_height)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use autofit_core::{AvailableSpace, BoundsMeasurer, Measurement, Measurer};

        #[test]
        fn test_empty_text_has_line_height_only() {
            let mut measurer = CosmicMeasurer::new();
            let size = measurer.measure_text(MeasureTextRequest {
                text: "",
                font_size: 20.0,
                family: None,
            });

            assert_eq!(size.width, 0.0);
            assert_eq!(size.height, 24.0);
        }

        #[test]
        fn test_huge_space_has_room() {
            let mut measurer = BoundsMeasurer::new(CosmicMeasurer::new());
            let space = AvailableSpace::new(1.0e6, 1.0e6);
            assert_eq!(measurer.test(16, "Hello", space), Measurement::RoomToGrow);
        }

        #[test]
        fn test_engine_dispatches_to_cosmic() {
            let mut engine = crate::Engine::new_default();
            assert!(engine.is_default_typeface());

            let size = engine.measure_text(MeasureTextRequest {
                text: "",
                font_size: 10.0,
                family: None,
            });
            assert_eq!(size.width, 0.0);
        }

        #[test]
        fn test_custom_family_is_not_default() {
            let measurer = CosmicMeasurer::new();
            assert!(measurer.is_default_typeface());
            assert!(!measurer.with_family("Inter").is_default_typeface());
        }
    }
}
