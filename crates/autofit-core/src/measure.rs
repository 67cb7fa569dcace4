//! Fit measurement for the size search.
//!
//! Two levels are provided:
//! - [`Measurer`]: the predicate the search drives. Given a candidate size it only
//!   answers in which direction the size should move.
//! - [`ContentMeasurer`]: a backend-agnostic bounding box measurement (e.g. a text
//!   engine). [`BoundsMeasurer`] turns one into a [`Measurer`].

use crate::primitives::AvailableSpace;
use glam::Vec2;

/// Direction reported by a [`Measurer`] for a candidate size.
///
/// Only the sign matters; no distance is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    /// Exact fit. The search stops at this size.
    Fits,
    /// The text at this size is smaller than the available space.
    RoomToGrow,
    /// The text at this size exceeds the available space.
    TooLarge,
}

/// Fit predicate driven by [`crate::FitSearch`].
///
/// Implementations must be monotone in `size`: for a fixed text and space, if a
/// size fits then every smaller size fits too, and if a size is too large then
/// every larger size is too large. A non-monotone measurer still produces an
/// in-range result, just not necessarily the best one.
///
/// A measurer may reuse internal scratch state (a shaping buffer, a paint object)
/// between calls, but a call must not affect the outcome of later calls.
pub trait Measurer {
    fn test(&mut self, size: u32, text: &str, space: AvailableSpace) -> Measurement;
}

impl<F> Measurer for F
where
    F: FnMut(u32, &str, AvailableSpace) -> Measurement,
{
    fn test(&mut self, size: u32, text: &str, space: AvailableSpace) -> Measurement {
        self(size, text, space)
    }
}

/// Request to measure the intrinsic size of a single line of text.
#[derive(Debug, Clone)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Backend-agnostic content measurement.
///
/// Implementors return the bounding box of a single unwrapped line: the advance
/// width of the shaped text and the font spacing (line height) at the requested
/// size. Backends like `autofit-text` implement this trait.
pub trait ContentMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Adapts a [`ContentMeasurer`] into a [`Measurer`].
///
/// The measured box is anchored at the origin and compared against the space:
/// contained means [`Measurement::RoomToGrow`], anything else is
/// [`Measurement::TooLarge`]. It never reports an exact [`Measurement::Fits`].
#[derive(Debug)]
pub struct BoundsMeasurer<C> {
    content: C,
    family: Option<String>,
}

impl<C: ContentMeasurer> BoundsMeasurer<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            family: None,
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_inner(self) -> C {
        self.content
    }
}

impl<C: ContentMeasurer> Measurer for BoundsMeasurer<C> {
    fn test(&mut self, size: u32, text: &str, space: AvailableSpace) -> Measurement {
        let bounds = self.content.measure_text(MeasureTextRequest {
            text,
            font_size: size as f32,
            family: self.family.as_deref(),
        });

        if space.contains(bounds.to_vec2()) {
            Measurement::RoomToGrow
        } else {
            Measurement::TooLarge
        }
    }
}

/// Content and hint text of a field.
///
/// The hint wins whenever it is non-empty; the content is measured otherwise.
#[derive(Debug, Clone, Copy)]
pub struct TextSource<'a> {
    pub content: &'a str,
    pub hint: Option<&'a str>,
}

impl<'a> TextSource<'a> {
    pub const fn new(content: &'a str, hint: Option<&'a str>) -> Self {
        Self { content, hint }
    }

    /// The text that is actually measured.
    pub fn effective(&self) -> &'a str {
        match self.hint {
            Some(hint) if !hint.is_empty() => hint,
            _ => self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed advance per character; line height is 1.2 * size.
    struct Monospace {
        advance: f32,
    }

    impl ContentMeasurer for Monospace {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            let chars = request.text.chars().count() as f32;
            IntrinsicSize::new(
                chars * request.font_size * self.advance,
                request.font_size * 1.2,
            )
        }
    }

    #[test]
    fn test_bounds_measurer_directions() {
        let mut measurer = BoundsMeasurer::new(Monospace { advance: 0.5 });
        let space = AvailableSpace::new(100.0, 100.0);

        // "abcd" at 50px: 100 wide, 60 tall -> exactly contained
        assert_eq!(measurer.test(50, "abcd", space), Measurement::RoomToGrow);
        assert_eq!(measurer.test(51, "abcd", space), Measurement::TooLarge);
    }

    #[test]
    fn test_bounds_measurer_height_limits() {
        let mut measurer = BoundsMeasurer::new(Monospace { advance: 0.1 });
        let space = AvailableSpace::new(1000.0, 24.0);

        assert_eq!(measurer.test(20, "a", space), Measurement::RoomToGrow);
        assert_eq!(measurer.test(21, "a", space), Measurement::TooLarge);
    }

    #[test]
    fn test_closure_measurer() {
        let mut calls = 0;
        let mut measurer = |size: u32, _: &str, _: AvailableSpace| {
            calls += 1;
            if size <= 10 {
                Measurement::RoomToGrow
            } else {
                Measurement::TooLarge
            }
        };

        let space = AvailableSpace::new(1.0, 1.0);
        assert_eq!(measurer.test(10, "x", space), Measurement::RoomToGrow);
        assert_eq!(measurer.test(11, "x", space), Measurement::TooLarge);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_hint_precedence() {
        assert_eq!(TextSource::new("typed", Some("hint")).effective(), "hint");
        assert_eq!(TextSource::new("typed", Some("")).effective(), "typed");
        assert_eq!(TextSource::new("typed", None).effective(), "typed");
        assert_eq!(TextSource::new("", None).effective(), "");
    }
}
