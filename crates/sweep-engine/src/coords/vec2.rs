use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotates the vector by `angle_deg` degrees.
    ///
    /// In this crate's y-down screen space a positive angle rotates
    /// clockwise as seen on screen.
    #[inline]
    pub fn rotated_deg(self, angle_deg: f32) -> Vec2 {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn rotation_by_quarter_turn_is_clockwise_on_screen() {
        // +X rotated 90 degrees lands on +Y, which points down on screen.
        assert!(close(Vec2::new(1.0, 0.0).rotated_deg(90.0), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert!(close(v.rotated_deg(0.0), v));
    }

    #[test]
    fn full_turn_returns_home() {
        let v = Vec2::new(38.0, 0.0);
        assert!(close(v.rotated_deg(360.0), v));
    }
}
