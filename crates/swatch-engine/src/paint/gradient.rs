use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Rgba;

/// Angle used when a linear gradient does not state one.
pub const DEFAULT_ANGLE: i32 = 90;

// ── StopId ────────────────────────────────────────────────────────────────

static NEXT_STOP_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a gradient stop.
///
/// Ids are unique for the lifetime of the process. Two stops may share a
/// color or a position, never an id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StopId(u64);

impl StopId {
    pub fn fresh() -> Self {
        Self(NEXT_STOP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop-{}", self.0)
    }
}

// ── GradientStop ──────────────────────────────────────────────────────────

/// A color pinned at an integer percentage along the gradient axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub id: StopId,
    pub color: Rgba,
    /// Always in `0..=100`.
    pub position: u8,
}

impl GradientStop {
    /// Creates a stop with a fresh id. Positions above 100 are capped.
    pub fn new(color: Rgba, position: u8) -> Self {
        Self { id: StopId::fresh(), color, position: position.min(100) }
    }
}

// ── Kind / shape / direction ──────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl GradientKind {
    /// `linear` or `radial`, as in `linear-gradient(...)`.
    pub fn css_prefix(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_prefix())
    }
}

impl FromStr for GradientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            other => Err(format!("unknown gradient kind {other:?}")),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RadialShape {
    #[default]
    Ellipse,
    Circle,
}

impl RadialShape {
    pub fn keyword(self) -> &'static str {
        match self {
            RadialShape::Ellipse => "ellipse",
            RadialShape::Circle => "circle",
        }
    }
}

impl fmt::Display for RadialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for RadialShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ellipse" => Ok(RadialShape::Ellipse),
            "circle" => Ok(RadialShape::Circle),
            other => Err(format!("unknown radial shape {other:?}")),
        }
    }
}

/// Active orientation of a model: an angle for linear, a shape for radial.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Angle(i32),
    Shape(RadialShape),
}

/// `90deg` or `circle`.
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Angle(deg) => write!(f, "{deg}deg"),
            Direction::Shape(shape) => write!(f, "{shape}"),
        }
    }
}

// ── GradientModel ─────────────────────────────────────────────────────────

/// Canonical, editable gradient.
///
/// The linear angle and the radial shape are both kept so that switching
/// `kind` back and forth restores the previous choice; [`direction`] exposes
/// whichever one is active.
///
/// Invariants:
/// - `stops` is sorted by ascending position after every structural edit.
/// - positions are integers in `0..=100`.
///
/// [`direction`]: GradientModel::direction
#[derive(Debug, Clone, PartialEq)]
pub struct GradientModel {
    pub kind: GradientKind,
    /// Degrees, not normalized.
    pub angle: i32,
    pub shape: RadialShape,
    pub stops: Vec<GradientStop>,
}

impl GradientModel {
    pub fn new(kind: GradientKind, stops: Vec<GradientStop>) -> Self {
        Self { kind, angle: DEFAULT_ANGLE, shape: RadialShape::default(), stops }
    }

    /// Two transparent white stops at 0% and 50%.
    pub fn default_stops() -> Vec<GradientStop> {
        vec![
            GradientStop::new(Rgba::transparent_white(), 0),
            GradientStop::new(Rgba::transparent_white(), 50),
        ]
    }

    pub fn direction(&self) -> Direction {
        match self.kind {
            GradientKind::Linear => Direction::Angle(self.angle),
            GradientKind::Radial => Direction::Shape(self.shape),
        }
    }

    /// Sets the direction and switches `kind` to match it.
    pub fn set_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Angle(deg) => {
                self.kind = GradientKind::Linear;
                self.angle = deg;
            }
            Direction::Shape(shape) => {
                self.kind = GradientKind::Radial;
                self.shape = shape;
            }
        }
    }

    pub fn stop(&self, id: StopId) -> Option<&GradientStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    pub fn stop_mut(&mut self, id: StopId) -> Option<&mut GradientStop> {
        self.stops.iter_mut().find(|s| s.id == id)
    }

    /// True when the model has enough stops to be written out as a gradient.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
    }
}

impl Default for GradientModel {
    fn default() -> Self {
        Self::new(GradientKind::Linear, Self::default_stops())
    }
}
