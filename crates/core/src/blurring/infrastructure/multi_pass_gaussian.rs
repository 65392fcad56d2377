use crate::shared::constants::{THREE_PASS_RADIUS, TWO_PASS_RADIUS};

use super::line_pass::LineScratch;
use super::stack_blur;

/// How many stack blur passes a Premium blur runs, and at what radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassPlan {
    pub passes: usize,
    pub pass_radius: usize,
}

/// Split `radius` into 1-3 smaller passes. Repeated triangular passes
/// converge on a Gaussian profile.
pub fn plan_passes(radius: f32) -> PassPlan {
    let passes = if radius < TWO_PASS_RADIUS {
        1
    } else if radius < THREE_PASS_RADIUS {
        2
    } else {
        3
    };
    let pass_radius = ((radius / passes as f32) as usize).max(1);
    PassPlan {
        passes,
        pass_radius,
    }
}

/// Apply the planned stack blur passes in place.
pub fn multi_pass_gaussian(pixels: &mut [u32], width: usize, height: usize, plan: PassPlan) {
    if width == 0 || height == 0 {
        return;
    }
    let mut scratch = LineScratch::with_capacity(width.max(height));
    let mut stack = Vec::with_capacity(2 * plan.pass_radius + 1);
    for _ in 0..plan.passes {
        stack_blur::stack_blur_horizontal(
            pixels,
            width,
            height,
            plan.pass_radius,
            &mut scratch,
            &mut stack,
        );
        stack_blur::stack_blur_vertical(
            pixels,
            width,
            height,
            plan.pass_radius,
            &mut scratch,
            &mut stack,
        );
    }
}
