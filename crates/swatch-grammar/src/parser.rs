use std::str::FromStr;

use regex::Regex;

use crate::ast::{
    ColorStop, ColorValue, Distance, GradientDefinition, GradientFunction, LinearOrientation,
    Orientation, Position, RadialOrientation, Shape, ShapeSize,
};
use crate::error::SyntaxError;
use crate::scanner::{Scanner, terminals::*};

type PResult<T> = Result<T, SyntaxError>;
type OrientationRule<'s> = fn(&mut Parser<'s>) -> PResult<Option<Orientation>>;

// ── Parser ────────────────────────────────────────────────────────────────

/// Recursive-descent parser over a [`Scanner`].
///
/// Productions returning `PResult<Option<T>>` are optional: `Ok(None)` means
/// "not here" and leaves the decision to the caller, `Err` aborts the parse.
pub struct Parser<'s> {
    scanner: Scanner<'s>,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { scanner: Scanner::new(src) }
    }

    fn err(&self, msg: impl Into<String>) -> SyntaxError {
        SyntaxError::new(msg, self.scanner.offset(), self.scanner.remaining())
    }

    fn number<T: FromStr>(&self, text: &str) -> PResult<T> {
        text.parse::<T>()
            .map_err(|_| self.err(format!("invalid number {:?}", text)))
    }

    // ── Document ──────────────────────────────────────────────────────────

    /// Parse every comma-separated definition and require end of input.
    pub fn parse_definitions(&mut self) -> PResult<Vec<GradientDefinition>> {
        let definitions = self.listing(Self::definition)?;
        if !self.scanner.is_at_end() {
            return Err(self.err("Invalid input not EOF"));
        }
        Ok(definitions)
    }

    /// A single color with nothing after it, as delivered by a color picker.
    pub fn parse_standalone_color(&mut self) -> PResult<ColorValue> {
        let Some(color) = self.color()? else {
            return Err(self.err("Expected color definition"));
        };
        self.scanner.skip_blank();
        if !self.scanner.is_at_end() {
            return Err(self.err("Invalid input not EOF"));
        }
        Ok(color)
    }

    /// `item (',' item)*`. An empty list is fine; a dangling comma is not.
    fn listing<T>(
        &mut self,
        mut matcher: impl FnMut(&mut Self) -> PResult<Option<T>>,
    ) -> PResult<Vec<T>> {
        let mut items = Vec::new();
        let Some(first) = matcher(self)? else {
            return Ok(items);
        };
        items.push(first);
        while self.scanner.scan(&COMMA).is_some() {
            match matcher(self)? {
                Some(item) => items.push(item),
                None => return Err(self.err("One extra comma")),
            }
        }
        Ok(items)
    }

    /// `keyword '(' body ')'`
    fn call<T>(
        &mut self,
        keyword: &Regex,
        body: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<Option<T>> {
        if self.scanner.scan(keyword).is_none() {
            return Ok(None);
        }
        if self.scanner.scan(&START_CALL).is_none() {
            return Err(self.err("Missing ("));
        }
        let result = body(self)?;
        if self.scanner.scan(&END_CALL).is_none() {
            return Err(self.err("Missing )"));
        }
        Ok(Some(result))
    }

    // ── Definition ────────────────────────────────────────────────────────

    fn definition(&mut self) -> PResult<Option<GradientDefinition>> {
        use GradientFunction::*;
        let candidates: [(GradientFunction, &Regex, OrientationRule<'s>); 4] = [
            (Linear, &LINEAR_GRADIENT, Self::linear_orientation),
            (RepeatingLinear, &REPEATING_LINEAR_GRADIENT, Self::linear_orientation),
            (Radial, &RADIAL_GRADIENT, Self::radial_orientations),
            (RepeatingRadial, &REPEATING_RADIAL_GRADIENT, Self::radial_orientations),
        ];
        for (function, keyword, orientation) in candidates {
            if let Some(definition) = self.gradient(function, keyword, orientation)? {
                return Ok(Some(definition));
            }
        }
        Ok(None)
    }

    fn gradient(
        &mut self,
        function: GradientFunction,
        keyword: &Regex,
        orientation: OrientationRule<'s>,
    ) -> PResult<Option<GradientDefinition>> {
        self.call(keyword, |p| {
            let orientation = orientation(p)?;
            if orientation.is_some() && p.scanner.scan(&COMMA).is_none() {
                return Err(p.err("Missing comma before color stops"));
            }
            let stops = p.listing(Self::color_stop)?;
            Ok(GradientDefinition { function, orientation, stops })
        })
    }

    // ── Linear orientation ────────────────────────────────────────────────

    fn linear_orientation(&mut self) -> PResult<Option<Orientation>> {
        if let Some(words) = self.scanner.scan_group(&SIDE_OR_CORNER, 1) {
            let side = LinearOrientation::SideOrCorner(words.to_ascii_lowercase());
            return Ok(Some(Orientation::Linear(side)));
        }
        match self.scanner.scan_group(&ANGLE_VALUE, 1) {
            Some(deg) => {
                let angle = self.number::<f64>(deg)?;
                Ok(Some(Orientation::Linear(LinearOrientation::Angle(angle))))
            }
            None => Ok(None),
        }
    }

    // ── Radial orientation ────────────────────────────────────────────────

    /// Up to two clauses. When a comma follows the first clause but no second
    /// clause does, the comma is handed back to the stop list.
    fn radial_orientations(&mut self) -> PResult<Option<Orientation>> {
        let Some(first) = self.radial_orientation()? else {
            return Ok(None);
        };
        let mut clauses = vec![first];

        let lookahead = self.scanner.checkpoint();
        if self.scanner.scan(&COMMA).is_some() {
            match self.radial_orientation()? {
                Some(second) => clauses.push(second),
                None => self.scanner.restore(lookahead),
            }
        }
        Ok(Some(Orientation::Radial(clauses)))
    }

    fn radial_orientation(&mut self) -> PResult<Option<RadialOrientation>> {
        if let Some((shape, size)) = self.shape()? {
            let at = self.at_position()?;
            return Ok(Some(RadialOrientation::Shape { shape, size, at }));
        }
        if let Some(keyword) = self.extent_keyword() {
            let at = self.at_position()?;
            return Ok(Some(RadialOrientation::Extent { keyword, at }));
        }
        Ok(self.positioning().map(|at| RadialOrientation::DefaultRadial { at }))
    }

    fn shape(&mut self) -> PResult<Option<(Shape, Option<ShapeSize>)>> {
        if self.scanner.scan(&CIRCLE).is_some() {
            let size = self.length()?.map(ShapeSize::Length)
                .or_else(|| self.extent_keyword().map(ShapeSize::Extent));
            return Ok(Some((Shape::Circle, size)));
        }
        if self.scanner.scan(&ELLIPSE).is_some() {
            let size = self.distance()?.map(ShapeSize::Length)
                .or_else(|| self.extent_keyword().map(ShapeSize::Extent));
            return Ok(Some((Shape::Ellipse, size)));
        }
        Ok(None)
    }

    fn extent_keyword(&mut self) -> Option<String> {
        self.scanner.scan_group(&EXTENT_KEYWORD, 1).map(str::to_string)
    }

    fn at_position(&mut self) -> PResult<Option<Position>> {
        if self.scanner.scan(&AT).is_none() {
            return Ok(None);
        }
        match self.positioning() {
            Some(position) => Ok(Some(position)),
            None => Err(self.err("Missing positioning value")),
        }
    }

    fn positioning(&mut self) -> Option<Position> {
        // Coordinates never fail hard: a malformed number cannot match the
        // distance terminals in the first place.
        let x = self.distance().ok().flatten();
        let y = self.distance().ok().flatten();
        if x.is_none() && y.is_none() {
            return None;
        }
        Some(Position { x, y })
    }

    // ── Color stops ───────────────────────────────────────────────────────

    fn color_stop(&mut self) -> PResult<Option<ColorStop>> {
        let Some(color) = self.color()? else {
            return Err(self.err("Expected color definition"));
        };
        let length = self.distance()?;
        Ok(Some(ColorStop { color, length }))
    }

    fn color(&mut self) -> PResult<Option<ColorValue>> {
        if let Some(digits) = self.scanner.scan_group(&HEX_COLOR, 1) {
            return Ok(Some(ColorValue::Hex(digits.to_string())));
        }
        if let Some(channels) = self.call(&RGBA_COLOR, |p| p.listing(Self::channel))? {
            return Ok(Some(ColorValue::Rgba(channels)));
        }
        if let Some(channels) = self.call(&RGB_COLOR, |p| p.listing(Self::channel))? {
            return Ok(Some(ColorValue::Rgb(channels)));
        }
        Ok(self
            .scanner
            .scan_group(&LITERAL_COLOR, 1)
            .map(|name| ColorValue::Literal(name.to_string())))
    }

    fn channel(&mut self) -> PResult<Option<f32>> {
        match self.scanner.scan_group(&NUMBER_VALUE, 1) {
            Some(text) => self.number(text).map(Some),
            None => Ok(None),
        }
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Percentage, then position keyword, then length; first match wins.
    fn distance(&mut self) -> PResult<Option<Distance>> {
        if let Some(value) = self.scanner.scan_group(&PERCENTAGE_VALUE, 1) {
            return Ok(Some(Distance::Percentage(self.number(value)?)));
        }
        if let Some(keyword) = self.scanner.scan_group(&POSITION_KEYWORD, 1) {
            return Ok(Some(Distance::PositionKeyword(keyword.to_ascii_lowercase())));
        }
        self.length()
    }

    fn length(&mut self) -> PResult<Option<Distance>> {
        if let Some(value) = self.scanner.scan_group(&PIXEL_VALUE, 1) {
            return Ok(Some(Distance::Px(self.number(value)?)));
        }
        if let Some(value) = self.scanner.scan_group(&EM_VALUE, 1) {
            return Ok(Some(Distance::Em(self.number(value)?)));
        }
        Ok(None)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse gradient source text into its definitions.
///
/// Several comma-separated definitions are accepted. An empty (or blank)
/// source yields an empty list.
pub fn parse(src: &str) -> Result<Vec<GradientDefinition>, SyntaxError> {
    Parser::new(src).parse_definitions()
}

/// Parse one color value (`#rrggbbaa`, `rgb(...)`, `rgba(...)` or a name).
pub fn parse_color(src: &str) -> Result<ColorValue, SyntaxError> {
    Parser::new(src).parse_standalone_color()
}
