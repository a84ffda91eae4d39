use swatch_grammar::ast::{
    ColorStop, Distance, GradientDefinition, LinearOrientation, Orientation, RadialOrientation,
    Shape,
};
use swatch_grammar::{SyntaxError, parse};

use crate::paint::{DEFAULT_ANGLE, GradientKind, GradientModel, GradientStop, RadialShape, Rgba};
use crate::stops::{clamp_percent, sort_stops};

/// Builds the canonical model from parsed definitions.
///
/// Only the first definition is used; an empty list gives the default
/// model. Stops are sorted by position once loaded.
pub fn to_model(definitions: &[GradientDefinition]) -> GradientModel {
    let Some(definition) = definitions.first() else {
        return GradientModel::default();
    };
    if definitions.len() > 1 {
        log::debug!("ignoring {} extra gradient definition(s)", definitions.len() - 1);
    }

    if definition.function.is_repeating() {
        log::debug!("{} loaded as a non-repeating gradient", definition.function.css_name());
    }

    let kind = if definition.function.is_radial() {
        GradientKind::Radial
    } else {
        GradientKind::Linear
    };

    let mut model = GradientModel::new(kind, resolve_stops(&definition.stops));
    match &definition.orientation {
        Some(Orientation::Linear(orientation)) => model.angle = linear_angle(orientation),
        Some(Orientation::Radial(clauses)) => {
            model.shape = clauses.first().map(radial_shape).unwrap_or_default();
        }
        None => {}
    }
    sort_stops(&mut model.stops);
    model
}

/// Parses gradient text into the canonical model.
///
/// Blank text and `none` mean "no gradient" and give the default model.
pub fn parse_model(text: &str) -> Result<GradientModel, SyntaxError> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("none") {
        return Ok(GradientModel::default());
    }
    Ok(to_model(&parse(text)?))
}

/// Like [`parse_model`], but never fails.
///
/// Malformed text, or text with fewer than two stops, falls back to the
/// default model so stored state can never keep the editor from opening.
pub fn load_model(text: &str) -> GradientModel {
    match parse_model(text) {
        Ok(model) if model.is_valid() => model,
        Ok(model) => {
            log::warn!(
                "gradient {:?} has {} stop(s); using default gradient",
                text,
                model.stops.len()
            );
            GradientModel::default()
        }
        Err(e) => {
            log::warn!("{e}; using default gradient");
            GradientModel::default()
        }
    }
}

fn linear_angle(orientation: &LinearOrientation) -> i32 {
    match orientation {
        LinearOrientation::Angle(deg) if deg.is_finite() => deg.round() as i32,
        LinearOrientation::Angle(_) => DEFAULT_ANGLE,
        LinearOrientation::SideOrCorner(side) => side_angle(side),
    }
}

/// `to <side>` keywords as the angle they stand for.
fn side_angle(side: &str) -> i32 {
    match side {
        "top" => 0,
        "right top" | "top right" => 45,
        "right" => 90,
        "right bottom" | "bottom right" => 135,
        "bottom" => 180,
        "left bottom" | "bottom left" => 225,
        "left" => 270,
        "left top" | "top left" => 315,
        _ => DEFAULT_ANGLE,
    }
}

/// Only an explicit `circle`/`ellipse` clause picks the shape.
fn radial_shape(clause: &RadialOrientation) -> RadialShape {
    match clause {
        RadialOrientation::Shape { shape: Shape::Circle, .. } => RadialShape::Circle,
        RadialOrientation::Shape { shape: Shape::Ellipse, .. }
        | RadialOrientation::Extent { .. }
        | RadialOrientation::DefaultRadial { .. } => RadialShape::Ellipse,
    }
}

/// Resolves colors and positions, left to right.
///
/// A stop without a percentage takes the position of the stop before it
/// (0 for the first one). Colors that cannot be resolved become opaque
/// white.
///
/// `px` and `em` lengths are carried forward the same way. Their number is
/// not reused as a percentage, so `black 10px` does not land at 10%.
fn resolve_stops(stops: &[ColorStop]) -> Vec<GradientStop> {
    let mut carried = 0;
    stops
        .iter()
        .map(|stop| {
            let position = match &stop.length {
                Some(Distance::Percentage(p)) => clamp_percent(*p),
                Some(other) => {
                    log::debug!("non-percentage stop distance {other:?}; carrying {carried}%");
                    carried
                }
                None => carried,
            };
            carried = position;

            let color = Rgba::from_value(&stop.color).unwrap_or_else(|e| {
                log::warn!("{e}; using opaque white");
                Rgba::opaque_white()
            });
            GradientStop::new(color, position)
        })
        .collect()
}
