// ── Function ──────────────────────────────────────────────────────────────

/// Which gradient function a definition was written with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientFunction {
    Linear,
    RepeatingLinear,
    Radial,
    RepeatingRadial,
}

impl GradientFunction {
    pub fn css_name(self) -> &'static str {
        match self {
            GradientFunction::Linear => "linear-gradient",
            GradientFunction::RepeatingLinear => "repeating-linear-gradient",
            GradientFunction::Radial => "radial-gradient",
            GradientFunction::RepeatingRadial => "repeating-radial-gradient",
        }
    }

    pub fn is_repeating(self) -> bool {
        matches!(self, GradientFunction::RepeatingLinear | GradientFunction::RepeatingRadial)
    }

    pub fn is_radial(self) -> bool {
        matches!(self, GradientFunction::Radial | GradientFunction::RepeatingRadial)
    }
}

// ── Distance / Position ───────────────────────────────────────────────────

/// A length-like value: color-stop distance, radial size or coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum Distance {
    /// `25%`
    Percentage(f32),
    /// `left`, `center`, `right`, `top`, `bottom`
    PositionKeyword(String),
    /// `12px`
    Px(f32),
    /// `1.5em`
    Em(f32),
}

/// `at <x> <y>` coordinates. At least one axis is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub x: Option<Distance>,
    pub y: Option<Distance>,
}

// ── Orientation ───────────────────────────────────────────────────────────

/// `to right` style keywords or an explicit angle.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearOrientation {
    /// Words after `to`, e.g. `"left top"`.
    SideOrCorner(String),
    /// Degrees, as written. Wide enough to hold any whole-degree `i32`.
    Angle(f64),
}

/// `circle` or `ellipse`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shape {
    Circle,
    Ellipse,
}

/// Optional size that may follow a shape keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSize {
    Length(Distance),
    Extent(String),
}

/// One radial orientation clause.
#[derive(Debug, Clone, PartialEq)]
pub enum RadialOrientation {
    /// `circle 10px at center`, `ellipse`
    Shape { shape: Shape, size: Option<ShapeSize>, at: Option<Position> },
    /// `farthest-corner at left top`
    Extent { keyword: String, at: Option<Position> },
    /// A bare position with no shape or extent: `center`, `10% 20%`
    DefaultRadial { at: Position },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    Linear(LinearOrientation),
    /// One or two comma-separated clauses.
    Radial(Vec<RadialOrientation>),
}

// ── Color ─────────────────────────────────────────────────────────────────

/// Color as written. Channel values are not range-checked here.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Digits after `#`, any count.
    Hex(String),
    Rgb(Vec<f32>),
    Rgba(Vec<f32>),
    /// A bare word such as `red` or `transparent`.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: ColorValue,
    pub length: Option<Distance>,
}

// ── Definition ────────────────────────────────────────────────────────────

/// One `xxx-gradient(...)` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDefinition {
    pub function: GradientFunction,
    pub orientation: Option<Orientation>,
    pub stops: Vec<ColorStop>,
}
