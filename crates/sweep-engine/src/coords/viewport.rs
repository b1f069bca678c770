use super::Vec2;

/// Logical-pixel extent of the drawable area.
///
/// This is the basis the shape shaders use to map logical px to NDC; the
/// face also derives its dial center from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Midpoint of the viewport in logical pixels.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_the_face_canvas() {
        let vp = Viewport::new(144.0, 168.0);
        assert_eq!(vp.center(), Vec2::new(72.0, 84.0));
    }

    #[test]
    fn degenerate_viewports_are_invalid() {
        assert!(!Viewport::new(0.0, 168.0).is_valid());
        assert!(!Viewport::new(144.0, f32::NAN).is_valid());
        assert!(Viewport::new(144.0, 168.0).is_valid());
    }
}
