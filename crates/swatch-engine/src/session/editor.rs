use crate::adapter::{load_model, preview_text, to_text};
use crate::paint::{GradientKind, GradientModel, GradientStop, RadialShape, Rgba, StopId};
use crate::stops;

use super::{EditError, MIN_STOPS};

/// Drag in progress: which stop, and where it was when the drag began.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Drag {
    id: StopId,
    start_position: u8,
}

// ── GradientEditor ────────────────────────────────────────────────────────

/// One editing session over a [`GradientModel`].
///
/// This is the policy layer on top of [`crate::stops`]: it refuses to drop
/// below [`MIN_STOPS`], normalizes picker colors, and tracks the selected
/// stop and the single active drag. Every method runs to completion; call
/// [`value`](Self::value) after any change to get the text to render or
/// persist.
#[derive(Debug, Clone, Default)]
pub struct GradientEditor {
    model: GradientModel,
    selected: Option<StopId>,
    drag: Option<Drag>,
}

impl GradientEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_model(mut model: GradientModel) -> Self {
        stops::sort_stops(&mut model.stops);
        Self { model, selected: None, drag: None }
    }

    /// Opens stored or user text; malformed input gives the default model.
    pub fn load(text: &str) -> Self {
        Self::from_model(load_model(text))
    }

    pub fn model(&self) -> &GradientModel {
        &self.model
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.model.stops
    }

    /// Canonical gradient text.
    pub fn value(&self) -> String {
        to_text(&self.model)
    }

    /// Stops rendered as `linear-gradient(90deg, ...)` for the stop track.
    pub fn preview_value(&self) -> String {
        preview_text(&self.model)
    }

    /// Stop currently being edited or dragged, if any.
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<StopId>) -> Result<(), EditError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.selected = id;
        Ok(())
    }

    // ── Kind / direction ──────────────────────────────────────────────────

    pub fn set_kind(&mut self, kind: GradientKind) {
        self.model.kind = kind;
    }

    /// Sets the linear angle. It is used whenever the kind is linear.
    pub fn set_angle(&mut self, degrees: i32) {
        self.model.angle = degrees;
    }

    /// Sets the radial shape. It is used whenever the kind is radial.
    pub fn set_shape(&mut self, shape: RadialShape) {
        self.model.shape = shape;
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// The "+" action: a copy of the last stop, a little further along.
    pub fn append_stop(&mut self) -> StopId {
        stops::append_stop(&mut self.model.stops)
    }

    /// Click on an empty part of the track at `raw_position` percent.
    pub fn insert_stop_at(&mut self, raw_position: f32) -> StopId {
        stops::insert_stop(&mut self.model.stops, raw_position)
    }

    /// Removes a stop, keeping at least [`MIN_STOPS`].
    pub fn remove_stop(&mut self, id: StopId) -> Result<GradientStop, EditError> {
        self.require(id)?;
        let count = self.model.stops.len();
        if count <= MIN_STOPS {
            return Err(EditError::TooFewStops { remaining: count });
        }
        let removed =
            stops::remove_stop(&mut self.model.stops, id).ok_or(EditError::UnknownStop(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        Ok(removed)
    }

    /// Sets a stop's color from picker text (`#rrggbbaa`, `rgb()`, ...).
    pub fn recolor_stop(&mut self, id: StopId, color: &str) -> Result<Rgba, EditError> {
        let color = Rgba::parse(color)?;
        self.set_stop_color(id, color)?;
        Ok(color)
    }

    pub fn set_stop_color(&mut self, id: StopId, color: Rgba) -> Result<(), EditError> {
        let stop = self.model.stop_mut(id).ok_or(EditError::UnknownStop(id))?;
        stop.color = color;
        self.selected = Some(id);
        Ok(())
    }

    /// Numeric position entry: clamps, stores and resorts.
    pub fn set_stop_position(&mut self, id: StopId, raw_position: f32) -> Result<u8, EditError> {
        let position = stops::reposition_stop(&mut self.model.stops, id, raw_position)
            .ok_or(EditError::UnknownStop(id))?;
        self.selected = Some(id);
        Ok(position)
    }

    /// Color the gradient shows at `position` percent.
    pub fn sample(&self, position: f32) -> Rgba {
        stops::find_color_at_position(&self.model.stops, position)
    }

    // ── Drag ──────────────────────────────────────────────────────────────

    /// Starts dragging `id`, remembering its current position.
    ///
    /// A drag that is already running is replaced.
    pub fn begin_drag(&mut self, id: StopId) -> Result<(), EditError> {
        let start_position = self.require(id)?.position;
        if let Some(previous) = self.drag.replace(Drag { id, start_position }) {
            log::debug!("drag of {} replaced by {}", previous.id, id);
        }
        self.selected = Some(id);
        log::trace!("begin drag {id} at {start_position}%");
        Ok(())
    }

    /// Moves the dragged stop to `start + delta`, where `delta` is the pointer
    /// travel as a percentage of the track width.
    pub fn drag_by(&mut self, delta: f32) -> Result<u8, EditError> {
        let drag = self.drag.ok_or(EditError::NoActiveDrag)?;
        let target = drag.start_position as f32 + delta;
        let position = stops::reposition_stop(&mut self.model.stops, drag.id, target)
            .ok_or(EditError::UnknownStop(drag.id))?;
        log::trace!("drag {} to {position}%", drag.id);
        Ok(position)
    }

    /// Ends the drag and clears the selection. Returns the dragged stop.
    pub fn end_drag(&mut self) -> Option<StopId> {
        self.selected = None;
        self.drag.take().map(|d| d.id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn require(&self, id: StopId) -> Result<&GradientStop, EditError> {
        self.model.stop(id).ok_or(EditError::UnknownStop(id))
    }
}
