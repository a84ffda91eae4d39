use std::fmt;

use crate::paint::{GradientStop, Rgba};

/// Rounds to the nearest integer and clamps to `0..=100`.
///
/// NaN maps to `0`.
#[inline]
pub fn clamp_percent(position: f32) -> u8 {
    if position.is_nan() {
        return 0;
    }
    position.round().clamp(0.0, 100.0) as u8
}

/// Interpolation between two stops that sit at the same position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DegenerateInterpolation {
    pub position: u8,
}

impl fmt::Display for DegenerateInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot interpolate between two stops at {}%", self.position)
    }
}

impl std::error::Error for DegenerateInterpolation {}

/// Color at `target` on the line through `left` and `right`.
///
/// `scale = (target - left.position) / (right.position - left.position)`,
/// applied per channel. Targets outside the pair extrapolate, with channels
/// clamped to their valid range.
pub fn try_interpolate_color(
    left: &GradientStop,
    right: &GradientStop,
    target: f32,
) -> Result<Rgba, DegenerateInterpolation> {
    if left.position == right.position {
        return Err(DegenerateInterpolation { position: left.position });
    }
    let from = left.position as f32;
    let scale = (target - from) / (right.position as f32 - from);
    Ok(left.color.lerp(right.color, scale))
}

/// Like [`try_interpolate_color`], but stops sharing a position resolve to
/// the earlier stop's color.
pub fn interpolate_color(left: &GradientStop, right: &GradientStop, target: f32) -> Rgba {
    try_interpolate_color(left, right, target).unwrap_or_else(|e| {
        log::trace!("{e}; using left stop color");
        left.color
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: u8, color: Rgba) -> GradientStop {
        GradientStop::new(color, position)
    }

    #[test]
    fn clamp_rounds_and_bounds() {
        assert_eq!(clamp_percent(-5.0), 0);
        assert_eq!(clamp_percent(0.4), 0);
        assert_eq!(clamp_percent(49.5), 50);
        assert_eq!(clamp_percent(100.2), 100);
        assert_eq!(clamp_percent(1e9), 100);
        assert_eq!(clamp_percent(f32::NAN), 0);
    }

    #[test]
    fn quarter_way() {
        let a = stop(0, Rgba::new(0, 0, 0, 1.0));
        let b = stop(100, Rgba::new(200, 100, 40, 0.0));
        assert_eq!(interpolate_color(&a, &b, 25.0), Rgba::new(50, 25, 10, 0.75));
    }

    #[test]
    fn offsets_are_relative_to_left_stop() {
        let a = stop(20, Rgba::new(0, 0, 0, 1.0));
        let b = stop(60, Rgba::new(100, 0, 0, 1.0));
        assert_eq!(interpolate_color(&a, &b, 30.0).r, 25);
    }

    #[test]
    fn equal_positions_use_left_color() {
        let a = stop(40, Rgba::new(1, 2, 3, 1.0));
        let b = stop(40, Rgba::new(9, 9, 9, 1.0));
        assert_eq!(
            try_interpolate_color(&a, &b, 40.0),
            Err(DegenerateInterpolation { position: 40 })
        );
        assert_eq!(interpolate_color(&a, &b, 40.0), a.color);
    }
}
