use std::fmt;

use crate::paint::{Direction, GradientKind, GradientModel, GradientStop};

/// Serializes the model in canonical form:
/// `{kind}-gradient({direction}, {color} {position}%, ...)`.
///
/// A model without stops is written as `""` ("no gradient").
pub fn to_text(model: &GradientModel) -> String {
    let text = GradientText { kind: model.kind, direction: model.direction(), stops: &model.stops };
    text.to_string()
}

/// The same stops as a left-to-right linear gradient, for the stop track.
pub fn preview_text(model: &GradientModel) -> String {
    let text = GradientText {
        kind: GradientKind::Linear,
        direction: Direction::Angle(90),
        stops: &model.stops,
    };
    text.to_string()
}

struct GradientText<'a> {
    kind: GradientKind,
    direction: Direction,
    stops: &'a [GradientStop],
}

impl fmt::Display for GradientText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stops.is_empty() {
            return Ok(());
        }
        write!(f, "{}-gradient({}", self.kind.css_prefix(), self.direction)?;
        for stop in self.stops {
            write!(f, ", {} {}%", stop.color, stop.position)?;
        }
        f.write_str(")")
    }
}
