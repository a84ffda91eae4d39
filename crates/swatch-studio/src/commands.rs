use anyhow::{Context, bail};
use clap::ArgMatches;
use swatch_engine::paint::{GradientKind, RadialShape, StopId};
use swatch_engine::session::GradientEditor;

/// One editor action, as picked on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Normalize,
    Inspect,
    Sample { position: f32 },
    Insert { position: f32 },
    Append,
    Move { index: usize, position: f32 },
    Drag { index: usize, delta: f32 },
    Remove { index: usize },
    Recolor { index: usize, color: String },
    Kind(GradientKind),
    Angle(i32),
    Shape(RadialShape),
}

impl Action {
    pub fn from_matches(name: &str, m: &ArgMatches) -> anyhow::Result<Self> {
        let action = match name {
            "normalize" => Action::Normalize,
            "inspect" => Action::Inspect,
            "append" => Action::Append,
            "sample" => Action::Sample { position: arg(m, "position")? },
            "insert" => Action::Insert { position: arg(m, "position")? },
            "move" => Action::Move { index: arg(m, "index")?, position: arg(m, "position")? },
            "drag" => Action::Drag { index: arg(m, "index")?, delta: arg(m, "delta")? },
            "remove" => Action::Remove { index: arg(m, "index")? },
            "recolor" => Action::Recolor { index: arg(m, "index")?, color: arg(m, "color")? },
            "kind" => Action::Kind(arg(m, "kind")?),
            "angle" => Action::Angle(arg(m, "degrees")?),
            "shape" => Action::Shape(arg(m, "shape")?),
            other => bail!("unknown command {other:?}"),
        };
        Ok(action)
    }

    /// Whether the action changes the gradient (and so gets saved).
    pub fn mutates(&self) -> bool {
        !matches!(self, Action::Normalize | Action::Inspect | Action::Sample { .. })
    }
}

fn arg<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> anyhow::Result<T> {
    m.get_one::<T>(id).cloned().with_context(|| format!("missing <{id}>"))
}

/// Stop ids are session-local, so the command line addresses stops by their
/// index in the sorted list.
fn stop_at(editor: &GradientEditor, index: usize) -> anyhow::Result<StopId> {
    match editor.stops().get(index) {
        Some(stop) => Ok(stop.id),
        None => bail!("no stop at index {index} ({} stops)", editor.stops().len()),
    }
}

/// Runs `action` against the editor and returns the text to print.
pub fn apply(editor: &mut GradientEditor, action: &Action) -> anyhow::Result<String> {
    match action {
        Action::Normalize => {}
        Action::Inspect => return Ok(inspect(editor)),
        Action::Sample { position } => return Ok(editor.sample(*position).to_string()),
        Action::Insert { position } => {
            editor.insert_stop_at(*position);
        }
        Action::Append => {
            editor.append_stop();
        }
        Action::Move { index, position } => {
            let id = stop_at(editor, *index)?;
            editor.set_stop_position(id, *position)?;
        }
        Action::Drag { index, delta } => {
            let id = stop_at(editor, *index)?;
            editor.begin_drag(id)?;
            editor.drag_by(*delta)?;
            editor.end_drag();
        }
        Action::Remove { index } => {
            let id = stop_at(editor, *index)?;
            editor.remove_stop(id).with_context(|| format!("cannot remove stop {index}"))?;
        }
        Action::Recolor { index, color } => {
            let id = stop_at(editor, *index)?;
            editor
                .recolor_stop(id, color)
                .with_context(|| format!("cannot recolor stop {index} to {color:?}"))?;
        }
        Action::Kind(kind) => editor.set_kind(*kind),
        Action::Angle(degrees) => editor.set_angle(*degrees),
        Action::Shape(shape) => editor.set_shape(*shape),
    }
    Ok(editor.value())
}

fn inspect(editor: &GradientEditor) -> String {
    let model = editor.model();
    let mut lines = vec![
        format!("kind:      {}", model.kind),
        format!("direction: {}", model.direction()),
        format!("track:     {}", editor.preview_value()),
    ];
    for (i, stop) in editor.stops().iter().enumerate() {
        lines.push(format!("  [{i}] {:>3}%  {}", stop.position, stop.color));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "linear-gradient(90deg, rgba(255,255,255,1) 0%, rgba(0,0,0,1) 100%)";

    fn run(text: &str, action: Action) -> anyhow::Result<String> {
        apply(&mut GradientEditor::load(text), &action)
    }

    #[test]
    fn normalize_rewrites_to_canonical() {
        let out = run("linear-gradient(to left, #fff, black 100%)", Action::Normalize).unwrap();
        assert_eq!(out, "linear-gradient(270deg, rgba(255,255,255,1) 0%, rgba(0,0,0,1) 100%)");
    }

    #[test]
    fn vendor_prefix_is_dropped_on_normalize() {
        let out = run("-webkit-linear-gradient(red, blue 100%)", Action::Normalize).unwrap();
        assert_eq!(out, "linear-gradient(90deg, rgba(255,0,0,1) 0%, rgba(0,0,255,1) 100%)");
    }

    #[test]
    fn insert_prints_new_text() {
        let out = run(SAMPLE, Action::Insert { position: 50.0 }).unwrap();
        assert!(out.contains("rgba(128,128,128,1) 50%"));
    }

    #[test]
    fn drag_is_relative_to_current_position() {
        let out = run(SAMPLE, Action::Drag { index: 0, delta: 25.0 }).unwrap();
        assert!(out.contains("rgba(255,255,255,1) 25%"));
    }

    #[test]
    fn remove_keeps_two_stops() {
        let err = run(SAMPLE, Action::Remove { index: 0 }).unwrap_err();
        assert!(format!("{err:#}").contains("at least 2 stops"));
    }

    #[test]
    fn bad_index_is_reported() {
        let err = run(SAMPLE, Action::Move { index: 7, position: 1.0 }).unwrap_err();
        assert_eq!(err.to_string(), "no stop at index 7 (2 stops)");
    }

    #[test]
    fn recolor_and_switch_kind() {
        let mut editor = GradientEditor::load(SAMPLE);
        apply(&mut editor, &Action::Recolor { index: 1, color: "#f00".into() }).unwrap();
        let out = apply(&mut editor, &Action::Kind(GradientKind::Radial)).unwrap();
        assert_eq!(out, "radial-gradient(ellipse, rgba(255,255,255,1) 0%, rgba(255,0,0,1) 100%)");
    }

    #[test]
    fn inspect_lists_stops() {
        let out = run(SAMPLE, Action::Inspect).unwrap();
        assert!(out.contains("direction: 90deg"));
        assert!(out.contains("[1] 100%  rgba(0,0,0,1)"));
    }

    #[test]
    fn only_edits_mutate() {
        assert!(!Action::Sample { position: 3.0 }.mutates());
        assert!(Action::Angle(10).mutates());
    }
}
