//! Scale + translation transforms shared by canvas items and the view.

use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};
use std::ops::Mul;

/// A 2×2 diagonal scale followed by a translation.
///
/// Maps `p` to `(sx * p.x + tx, sy * p.y + ty)`. Rotation and skew are never
/// needed on the canvas, so they are not representable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translate(offset: Vec2) -> Self {
        Self {
            tx: offset.x,
            ty: offset.y,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            sy,
            ..Self::IDENTITY
        }
    }

    /// `translate(pivot) · scale(factor, factor) · translate(-pivot)`.
    ///
    /// The pivot is the one point that stays put.
    pub fn uniform_about(pivot: Pos2, factor: f32) -> Self {
        Self::translate(pivot.to_vec2()) * Self::scale(factor, factor) * Self::translate(-pivot.to_vec2())
    }

    pub fn map_point(&self, p: Pos2) -> Pos2 {
        pos2(self.sx * p.x + self.tx, self.sy * p.y + self.ty)
    }

    /// Maps a displacement; translation does not apply.
    pub fn map_vec(&self, v: Vec2) -> Vec2 {
        vec2(self.sx * v.x, self.sy * v.y)
    }

    /// Maps both corners and re-normalizes, so negative scales stay well-formed.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        Rect::from_two_pos(self.map_point(rect.min), self.map_point(rect.max))
    }

    /// `None` when either axis collapsed to zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.sx == 0.0 || self.sy == 0.0 {
            return None;
        }
        Some(Self {
            sx: 1.0 / self.sx,
            sy: 1.0 / self.sy,
            tx: -self.tx / self.sx,
            ty: -self.ty / self.sy,
        })
    }

    /// Scale factor of a uniform transform. Averages the axes otherwise.
    pub fn uniform_scale(&self) -> f32 {
        if self.sx == self.sy {
            self.sx
        } else {
            (self.sx + self.sy) / 2.0
        }
    }

    pub fn is_finite(&self) -> bool {
        self.sx.is_finite() && self.sy.is_finite() && self.tx.is_finite() && self.ty.is_finite()
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            sx: self.sx * rhs.sx,
            sy: self.sy * rhs.sy,
            tx: self.sx * rhs.tx + self.tx,
            ty: self.sy * rhs.ty + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_applies_right_operand_first() {
        let t = Transform::translate(vec2(10.0, 0.0)) * Transform::scale(2.0, 2.0);
        assert_eq!(t.map_point(pos2(1.0, 1.0)), pos2(12.0, 2.0));

        let t = Transform::scale(2.0, 2.0) * Transform::translate(vec2(10.0, 0.0));
        assert_eq!(t.map_point(pos2(1.0, 1.0)), pos2(22.0, 2.0));
    }

    #[test]
    fn uniform_about_keeps_pivot_fixed() {
        let pivot = pos2(50.0, 50.0);
        let t = Transform::uniform_about(pivot, 1.5);
        assert_eq!(t.map_point(pivot), pivot);
        assert_eq!(t.map_point(pos2(100.0, 100.0)), pos2(125.0, 125.0));
        assert_eq!(t.map_point(pos2(0.0, 0.0)), pos2(-25.0, -25.0));
    }

    #[test]
    fn inverse_round_trips_and_rejects_singular() {
        let t = Transform::translate(vec2(3.0, -4.0)) * Transform::scale(2.0, 0.5);
        let inv = t.inverse().unwrap();
        let p = pos2(7.0, 9.0);
        let back = inv.map_point(t.map_point(p));
        assert!((back - p).length() < 1e-5);

        assert!(Transform::scale(0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn map_rect_normalizes_mirrored_output() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 20.0));
        let mapped = Transform::scale(-1.0, 1.0).map_rect(rect);
        assert_eq!(mapped.min, pos2(-10.0, 0.0));
        assert_eq!(mapped.max, pos2(0.0, 20.0));
    }
}
