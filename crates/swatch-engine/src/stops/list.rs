use crate::paint::{GradientStop, Rgba, StopId};

use super::interpolate::{clamp_percent, interpolate_color};

/// Gap between the last stop and one added with [`append_stop`].
pub const APPEND_STEP: u8 = 10;

/// Stable sort by ascending position; equal positions keep their order.
pub fn sort_stops(stops: &mut [GradientStop]) {
    stops.sort_by_key(|s| s.position);
}

pub fn is_sorted(stops: &[GradientStop]) -> bool {
    stops.windows(2).all(|w| w[0].position <= w[1].position)
}

/// Inserts a stop at `raw_position` and returns its id.
///
/// The new color comes from the neighbors: the left stop's color at or
/// before it, the right stop's color at or after it, otherwise the
/// interpolation of the two. The stop is spliced in before the first stop
/// with a strictly greater position, so the list stays sorted.
///
/// On an empty list the stop is opaque white.
pub fn insert_stop(stops: &mut Vec<GradientStop>, raw_position: f32) -> StopId {
    let position = clamp_percent(raw_position);
    let target = position as f32;
    let index = stops.iter().position(|s| s.position > position).unwrap_or(stops.len());

    let color = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => {
            let left = if index > 0 { &stops[index - 1] } else { first };
            let right = stops.get(index).unwrap_or(last);
            if position <= left.position {
                left.color
            } else if position >= right.position {
                right.color
            } else {
                interpolate_color(left, right, target)
            }
        }
        _ => Rgba::opaque_white(),
    };

    let stop = GradientStop::new(color, position);
    log::debug!("insert {} at {}% (index {index}) color {}", stop.id, position, color);
    stops.insert(index, stop);
    stop.id
}

/// Moves stop `id` to `raw_position` (clamped) and resorts the list.
///
/// Returns the stored position, or `None` when no stop has that id.
pub fn reposition_stop(stops: &mut [GradientStop], id: StopId, raw_position: f32) -> Option<u8> {
    let position = clamp_percent(raw_position);
    let stop = stops.iter_mut().find(|s| s.id == id)?;
    stop.position = position;
    sort_stops(stops);
    Some(position)
}

/// Removes stop `id`. No minimum count is enforced here.
pub fn remove_stop(stops: &mut Vec<GradientStop>, id: StopId) -> Option<GradientStop> {
    let index = stops.iter().position(|s| s.id == id)?;
    Some(stops.remove(index))
}

/// Adds a stop after the last one, copying its color.
///
/// The new stop sits [`APPEND_STEP`] points past the last stop, capped at
/// 100. With no stops it is opaque white at 60%.
pub fn append_stop(stops: &mut Vec<GradientStop>) -> StopId {
    let (color, last) = stops
        .last()
        .map(|s| (s.color, s.position))
        .unwrap_or((Rgba::opaque_white(), 50));
    let stop = GradientStop::new(color, last.saturating_add(APPEND_STEP).min(100));
    stops.push(stop);
    sort_stops(stops);
    stop.id
}

/// Color shown at `position` on the stop track.
///
/// Before the first stop this is the first color, after the last stop the
/// last color. Otherwise the stop nearest to `position` (first one on a
/// tie) is interpolated with its predecessor; the first stop has no
/// predecessor and gives its own color.
pub fn find_color_at_position(stops: &[GradientStop], position: f32) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::opaque_white();
    };
    if position < first.position as f32 {
        return first.color;
    }
    if position > last.position as f32 {
        return last.color;
    }

    let mut nearest = 0;
    let mut min_distance = (position - first.position as f32).abs();
    for (i, stop) in stops.iter().enumerate().skip(1) {
        let distance = (position - stop.position as f32).abs();
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }

    if nearest == 0 {
        return first.color;
    }
    interpolate_color(&stops[nearest - 1], &stops[nearest], position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_to_black() -> Vec<GradientStop> {
        vec![
            GradientStop::new(Rgba::opaque_white(), 0),
            GradientStop::new(Rgba::black(), 100),
        ]
    }

    fn positions(stops: &[GradientStop]) -> Vec<u8> {
        stops.iter().map(|s| s.position).collect()
    }

    // ── insert_stop ───────────────────────────────────────────────────────

    #[test]
    fn insert_midpoint_blends_neighbors() {
        let mut stops = white_to_black();
        let id = insert_stop(&mut stops, 50.0);
        assert_eq!(positions(&stops), [0, 50, 100]);
        assert_eq!(stops[1].id, id);
        assert_eq!(stops[1].color, Rgba::new(128, 128, 128, 1.0));
    }

    #[test]
    fn insert_before_first_copies_first_color() {
        let mut stops = vec![
            GradientStop::new(Rgba::new(10, 20, 30, 1.0), 20),
            GradientStop::new(Rgba::black(), 80),
        ];
        insert_stop(&mut stops, 5.0);
        assert_eq!(positions(&stops), [5, 20, 80]);
        assert_eq!(stops[0].color, Rgba::new(10, 20, 30, 1.0));
    }

    #[test]
    fn insert_after_last_copies_last_color() {
        let mut stops = vec![
            GradientStop::new(Rgba::opaque_white(), 20),
            GradientStop::new(Rgba::new(1, 2, 3, 0.5), 80),
        ];
        insert_stop(&mut stops, 97.0);
        assert_eq!(positions(&stops), [20, 80, 97]);
        assert_eq!(stops[2].color, Rgba::new(1, 2, 3, 0.5));
    }

    #[test]
    fn insert_on_existing_position_goes_after_it() {
        let mut stops = white_to_black();
        let id = insert_stop(&mut stops, 0.0);
        assert_eq!(stops[1].id, id);
        assert_eq!(stops[1].color, Rgba::opaque_white());
    }

    #[test]
    fn insert_clamps_raw_position() {
        let mut stops = white_to_black();
        insert_stop(&mut stops, -40.0);
        insert_stop(&mut stops, 250.7);
        assert_eq!(positions(&stops), [0, 0, 100, 100]);
        assert!(is_sorted(&stops));
    }

    #[test]
    fn insert_into_empty_list() {
        let mut stops = Vec::new();
        insert_stop(&mut stops, 30.0);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].color, Rgba::opaque_white());
    }

    // ── reposition_stop ───────────────────────────────────────────────────

    #[test]
    fn reposition_resorts() {
        let mut stops = white_to_black();
        let id = insert_stop(&mut stops, 30.0);
        assert_eq!(reposition_stop(&mut stops, id, 130.0), Some(100));
        assert_eq!(positions(&stops), [0, 100, 100]);
        // Stable: the moved stop was ahead of the stop already at 100.
        assert_eq!(stops[1].id, id);

        let first = stops[0].id;
        reposition_stop(&mut stops, first, 60.4);
        assert_eq!(positions(&stops), [60, 100, 100]);
    }

    #[test]
    fn reposition_unknown_id() {
        let mut stops = white_to_black();
        assert_eq!(reposition_stop(&mut stops, StopId::fresh(), 10.0), None);
        assert_eq!(positions(&stops), [0, 100]);
    }

    // ── remove_stop / append_stop ─────────────────────────────────────────

    #[test]
    fn raw_remove_has_no_minimum() {
        let mut stops = white_to_black();
        let ids: Vec<_> = stops.iter().map(|s| s.id).collect();
        assert!(remove_stop(&mut stops, ids[0]).is_some());
        assert!(remove_stop(&mut stops, ids[1]).is_some());
        assert!(stops.is_empty());
        assert!(remove_stop(&mut stops, ids[1]).is_none());
    }

    #[test]
    fn append_steps_past_last_and_caps() {
        let mut stops = vec![
            GradientStop::new(Rgba::opaque_white(), 0),
            GradientStop::new(Rgba::new(5, 5, 5, 1.0), 85),
        ];
        append_stop(&mut stops);
        append_stop(&mut stops);
        assert_eq!(positions(&stops), [0, 85, 95, 100]);
        assert_eq!(stops[3].color, Rgba::new(5, 5, 5, 1.0));

        let mut empty = Vec::new();
        append_stop(&mut empty);
        assert_eq!(positions(&empty), [60]);
    }

    // ── find_color_at_position ────────────────────────────────────────────

    #[test]
    fn find_color_outside_range() {
        let stops = vec![
            GradientStop::new(Rgba::new(10, 0, 0, 1.0), 20),
            GradientStop::new(Rgba::new(90, 0, 0, 1.0), 80),
        ];
        assert_eq!(find_color_at_position(&stops, 5.0).r, 10);
        assert_eq!(find_color_at_position(&stops, 95.0).r, 90);
    }

    #[test]
    fn find_color_interpolates_with_predecessor() {
        let stops = vec![
            GradientStop::new(Rgba::new(0, 0, 0, 1.0), 0),
            GradientStop::new(Rgba::new(100, 0, 0, 1.0), 50),
            GradientStop::new(Rgba::new(100, 100, 0, 1.0), 100),
        ];
        // Nearest is the middle stop; blend with the first.
        assert_eq!(find_color_at_position(&stops, 40.0).r, 80);
        // Nearest is the last stop; blend with the middle.
        assert_eq!(find_color_at_position(&stops, 90.0), Rgba::new(100, 80, 0, 1.0));
    }

    #[test]
    fn find_color_near_first_stop() {
        let stops = white_to_black();
        assert_eq!(find_color_at_position(&stops, 10.0), Rgba::opaque_white());
        assert_eq!(find_color_at_position(&[], 10.0), Rgba::opaque_white());
    }
}
