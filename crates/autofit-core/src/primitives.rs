use glam::Vec2;

/// Maximum box the text may occupy.
///
/// Only width and height matter; the origin is implicitly `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AvailableSpace {
    pub width: f32,
    pub height: f32,
}

impl AvailableSpace {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `true` when there is no room at all (either axis non-positive or NaN).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Inclusive containment of an extent anchored at the origin.
    pub fn contains(&self, extent: Vec2) -> bool {
        extent.x >= 0.0 && extent.y >= 0.0 && extent.x <= self.width && extent.y <= self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for AvailableSpace {
    fn from(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

/// Closed range of candidate sizes `[min, max]`.
///
/// Both ends are at least 1 and `min <= max` always holds. Use [`SizeRange::new`]
/// to build one from untrusted values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl SizeRange {
    /// Create a range, clamping both ends to `>= 1` and swapping them if reversed.
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = (min.max(1), max.max(1));
        if min > max {
            log::debug!("size range reversed ({min} > {max}), swapping");
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Range holding exactly one candidate.
    pub fn single(size: u32) -> Self {
        Self::new(size, size)
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Number of candidates in the range.
    pub const fn len(&self) -> u32 {
        self.max - self.min + 1
    }

    pub fn clamp(&self, size: u32) -> u32 {
        size.clamp(self.min, self.max)
    }

    pub const fn contains(&self, size: u32) -> bool {
        size >= self.min && size <= self.max
    }
}

/// Padding around the text area of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use autofit_core::Spacing;
    /// let spacing = Spacing::symmetric(10.0, 20.0);
    /// assert_eq!(spacing.left, 10.0);
    /// assert_eq!(spacing.right, 10.0);
    /// assert_eq!(spacing.top, 20.0);
    /// assert_eq!(spacing.bottom, 20.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_empty() {
        assert!(AvailableSpace::zero().is_empty());
        assert!(AvailableSpace::new(100.0, 0.0).is_empty());
        assert!(AvailableSpace::new(-1.0, 20.0).is_empty());
        assert!(AvailableSpace::new(f32::NAN, 20.0).is_empty());
        assert!(!AvailableSpace::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_space_contains_is_inclusive() {
        let space = AvailableSpace::new(200.0, 50.0);
        assert!(space.contains(Vec2::new(200.0, 50.0)));
        assert!(space.contains(Vec2::ZERO));
        assert!(!space.contains(Vec2::new(200.5, 10.0)));
        assert!(!space.contains(Vec2::new(10.0, 50.5)));
    }

    #[test]
    fn test_range_swaps_reversed_bounds() {
        let range = SizeRange::new(40, 16);
        assert_eq!(range.min(), 16);
        assert_eq!(range.max(), 40);
        assert_eq!(range.len(), 25);
    }

    #[test]
    fn test_range_clamps_to_one() {
        let range = SizeRange::new(0, 0);
        assert_eq!(range, SizeRange::single(1));
        assert_eq!(range.clamp(0), 1);
        assert_eq!(SizeRange::new(16, 40).clamp(99), 40);
    }
}
