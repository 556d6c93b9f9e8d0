use glam::*;

use crate::ray::Ray;

pub type Color = Vec3;

/// One light path in flight. The scatter step only touches `ray` and `color`;
/// the bounce budget and pixel index belong to the outer loop.
#[derive(Debug, Clone, Copy)]
pub struct PathSegment {
    pub ray: Ray,
    pub color: Color,
    pub remaining_bounces: u32,
    pub pixel_index: usize,
}

impl PathSegment {
    pub fn new(ray: Ray, pixel_index: usize, remaining_bounces: u32) -> PathSegment {
        PathSegment { ray, color: Color::ONE, remaining_bounces, pixel_index }
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_bounces > 0
    }
}
