use glam::Vec2;

/// Bounding box of a container in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Viewport point relative to the box's top-left corner.
    #[inline]
    pub fn local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }

    /// Viewport point relative to the box's centre.
    #[inline]
    pub fn offset_from_center(&self, client: Vec2) -> Vec2 {
        client - self.center()
    }
}

/// Which way the horizontal rotation follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mirror {
    Follow,
    Opposite,
}

/// 3D tilt derived from a pointer offset. Not clamped: far-off pointers give
/// proportionally large angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_y_deg: f32,
    pub rotate_x_deg: f32,
}

impl Tilt {
    pub fn from_offset(offset: Vec2, deg_per_px: f32, mirror: Mirror) -> Self {
        let sign = match mirror {
            Mirror::Follow => 1.0,
            Mirror::Opposite => -1.0,
        };
        Self {
            rotate_y_deg: sign * offset.x * deg_per_px,
            rotate_x_deg: -offset.y * deg_per_px,
        }
    }

    pub fn css_transform(&self, perspective_px: f32) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg)",
            perspective_px, self.rotate_y_deg, self.rotate_x_deg
        )
    }
}
