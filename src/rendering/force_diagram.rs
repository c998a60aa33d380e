use serde::Serialize;
use std::path::Path;
use tiny_skia::*;

use super::RenderError;
use crate::resources::ForceState;

const MIN_ARROW_LENGTH: f32 = 12.0; // px
const MAX_ARROW_FRACTION: f32 = 0.4; // of the smaller canvas dimension
const ARROW_WIDTH: f32 = 4.0;
const HEAD_LENGTH: f32 = 10.0;
const HEAD_HALF_WIDTH: f32 = 6.0;

const BACKGROUND: [u8; 4] = [245, 247, 250, 255];
const BODY: [u8; 4] = [90, 98, 110, 255];
const STALL_RED: [u8; 4] = [231, 76, 60, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceKind {
    Lift,
    Weight,
    Thrust,
    Drag,
}

impl ForceKind {
    /// Unit direction in canvas coordinates (y grows downwards).
    fn direction(&self) -> (f32, f32) {
        match self {
            ForceKind::Lift => (0.0, -1.0),
            ForceKind::Weight => (0.0, 1.0),
            ForceKind::Thrust => (1.0, 0.0),
            ForceKind::Drag => (-1.0, 0.0),
        }
    }

    fn color(&self) -> [u8; 4] {
        match self {
            ForceKind::Lift => [46, 204, 113, 255],
            ForceKind::Weight => [52, 73, 94, 255],
            ForceKind::Thrust => [243, 156, 18, 255],
            ForceKind::Drag => [142, 68, 173, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceArrow {
    pub kind: ForceKind,
    /// Newtons
    pub magnitude: f64,
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub color: [u8; 4],
}

impl ForceArrow {
    pub fn length(&self) -> f32 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The 2D force-vector picture: four arrows from the aircraft's centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceDiagram {
    pub width: u32,
    pub height: u32,
    pub stalled: bool,
    pub arrows: Vec<ForceArrow>,
}

impl ForceDiagram {
    /// Lays out arrows scaled against the largest force. Zero forces get no arrow.
    pub fn from_state(state: &ForceState, width: u32, height: u32) -> Self {
        let forces = &state.forces;
        let entries = [
            (ForceKind::Lift, forces.lift),
            (ForceKind::Weight, forces.weight),
            (ForceKind::Thrust, forces.thrust),
            (ForceKind::Drag, forces.drag),
        ];

        let largest = entries.iter().map(|(_, f)| f.abs()).fold(0.0_f64, f64::max);
        let max_length = width.min(height) as f32 * MAX_ARROW_FRACTION;
        let centre = (width as f32 / 2.0, height as f32 / 2.0);

        let mut arrows = Vec::with_capacity(entries.len());
        if largest > 0.0 {
            for (kind, magnitude) in entries {
                if magnitude <= 0.0 {
                    continue;
                }
                let length = (max_length * (magnitude / largest) as f32)
                    .max(MIN_ARROW_LENGTH.min(max_length));
                let (dx, dy) = kind.direction();
                let color = if kind == ForceKind::Lift && state.stalled {
                    STALL_RED
                } else {
                    kind.color()
                };
                arrows.push(ForceArrow {
                    kind,
                    magnitude,
                    start: centre,
                    end: (centre.0 + dx * length, centre.1 + dy * length),
                    color,
                });
            }
        }

        Self {
            width,
            height,
            stalled: state.stalled,
            arrows,
        }
    }

    pub fn arrow(&self, kind: ForceKind) -> Option<&ForceArrow> {
        self.arrows.iter().find(|a| a.kind == kind)
    }

    pub fn render(&self) -> Result<Pixmap, RenderError> {
        let mut pixmap = Pixmap::new(self.width, self.height).ok_or(RenderError::InvalidCanvas {
            width: self.width,
            height: self.height,
        })?;
        pixmap.fill(Color::from_rgba8(
            BACKGROUND[0],
            BACKGROUND[1],
            BACKGROUND[2],
            BACKGROUND[3],
        ));

        self.draw_body(&mut pixmap)?;
        for arrow in &self.arrows {
            draw_arrow(&mut pixmap, arrow)?;
        }
        Ok(pixmap)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.render()?
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.render()?
            .save_png(path)
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn draw_body(&self, pixmap: &mut Pixmap) -> Result<(), RenderError> {
        let size = self.width.min(self.height) as f32;
        let (body_w, body_h) = (size * 0.3, size * 0.08);
        let rect = Rect::from_xywh(
            (self.width as f32 - body_w) / 2.0,
            (self.height as f32 - body_h) / 2.0,
            body_w,
            body_h,
        )
        .ok_or_else(|| RenderError::Path("aircraft body".to_string()))?;
        let path = PathBuilder::from_oval(rect)
            .ok_or_else(|| RenderError::Path("aircraft body".to_string()))?;

        pixmap.fill_path(
            &path,
            &paint_for(BODY),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

fn paint_for(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

fn draw_arrow(pixmap: &mut Pixmap, arrow: &ForceArrow) -> Result<(), RenderError> {
    let length = arrow.length();
    if length <= 0.0 {
        return Ok(());
    }
    let ux = (arrow.end.0 - arrow.start.0) / length;
    let uy = (arrow.end.1 - arrow.start.1) / length;
    let head = HEAD_LENGTH.min(length / 2.0);
    let base = (arrow.end.0 - ux * head, arrow.end.1 - uy * head);
    let paint = paint_for(arrow.color);

    let mut shaft = PathBuilder::new();
    shaft.move_to(arrow.start.0, arrow.start.1);
    shaft.line_to(base.0, base.1);
    let shaft = shaft
        .finish()
        .ok_or_else(|| RenderError::Path(format!("{:?} shaft", arrow.kind)))?;
    let stroke = Stroke {
        width: ARROW_WIDTH,
        line_cap: LineCap::Butt,
        ..Default::default()
    };
    pixmap.stroke_path(&shaft, &paint, &stroke, Transform::identity(), None);

    // Perpendicular to the arrow for the head's base corners.
    let (px, py) = (-uy * HEAD_HALF_WIDTH, ux * HEAD_HALF_WIDTH);
    let mut tip = PathBuilder::new();
    tip.move_to(arrow.end.0, arrow.end.1);
    tip.line_to(base.0 + px, base.1 + py);
    tip.line_to(base.0 - px, base.1 - py);
    tip.close();
    let tip = tip
        .finish()
        .ok_or_else(|| RenderError::Path(format!("{:?} head", arrow.kind)))?;
    pixmap.fill_path(&tip, &paint, FillRule::Winding, Transform::identity(), None);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Forces;
    use approx::assert_relative_eq;

    fn state(lift: f64, weight: f64, thrust: f64, drag: f64, stalled: bool) -> ForceState {
        ForceState {
            forces: Forces {
                lift,
                drag,
                thrust,
                weight,
            },
            stalled,
            ..Default::default()
        }
    }

    #[test]
    fn test_arrow_directions() {
        let diagram = ForceDiagram::from_state(&state(100.0, 100.0, 50.0, 50.0, false), 200, 200);
        let lift = diagram.arrow(ForceKind::Lift).unwrap();
        let weight = diagram.arrow(ForceKind::Weight).unwrap();
        let thrust = diagram.arrow(ForceKind::Thrust).unwrap();
        let drag = diagram.arrow(ForceKind::Drag).unwrap();

        assert_eq!(lift.start, (100.0, 100.0));
        assert!(lift.end.1 < lift.start.1);
        assert!(weight.end.1 > weight.start.1);
        assert!(thrust.end.0 > thrust.start.0);
        assert!(drag.end.0 < drag.start.0);
    }

    #[test]
    fn test_lengths_scale_with_largest_force() {
        let diagram = ForceDiagram::from_state(&state(1000.0, 500.0, 250.0, 1.0, false), 200, 100);
        assert_relative_eq!(diagram.arrow(ForceKind::Lift).unwrap().length(), 40.0);
        assert_relative_eq!(diagram.arrow(ForceKind::Weight).unwrap().length(), 20.0);
        assert_relative_eq!(diagram.arrow(ForceKind::Thrust).unwrap().length(), 12.0);
        // Tiny forces still get a visible arrow.
        assert_relative_eq!(diagram.arrow(ForceKind::Drag).unwrap().length(), 12.0);
    }

    #[test]
    fn test_zero_forces_draw_nothing() {
        let diagram = ForceDiagram::from_state(&state(0.0, 0.0, 0.0, 0.0, false), 100, 100);
        assert!(diagram.arrows.is_empty());

        let diagram = ForceDiagram::from_state(&state(10.0, 10.0, 0.0, 5.0, false), 100, 100);
        assert!(diagram.arrow(ForceKind::Thrust).is_none());
        assert_eq!(diagram.arrows.len(), 3);
    }

    #[test]
    fn test_stalled_lift_is_red() {
        let normal = ForceDiagram::from_state(&state(10.0, 10.0, 1.0, 1.0, false), 100, 100);
        let stalled = ForceDiagram::from_state(&state(3.0, 10.0, 1.0, 1.0, true), 100, 100);
        assert_ne!(normal.arrow(ForceKind::Lift).unwrap().color, STALL_RED);
        assert_eq!(stalled.arrow(ForceKind::Lift).unwrap().color, STALL_RED);
        assert!(stalled.stalled);
    }

    #[test]
    fn test_render_draws_lift_arrow() {
        let diagram = ForceDiagram::from_state(&state(200.0, 100.0, 10.0, 10.0, false), 200, 200);
        let pixmap = diagram.render().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (200, 200));

        // Along the lift shaft, clear of the body and the arrow head.
        let pixel = pixmap.pixel(100, 40).unwrap();
        let [r, g, b, a] = ForceKind::Lift.color();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()), (r, g, b, a));

        let corner = pixmap.pixel(2, 2).unwrap();
        assert_eq!(corner.red(), BACKGROUND[0]);
    }

    #[test]
    fn test_encode_png_has_signature() {
        let diagram = ForceDiagram::from_state(&state(1.0, 1.0, 1.0, 1.0, false), 64, 64);
        let png = diagram.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_empty_canvas_is_an_error() {
        let diagram = ForceDiagram::from_state(&state(1.0, 1.0, 1.0, 1.0, false), 0, 10);
        assert!(matches!(
            diagram.render(),
            Err(RenderError::InvalidCanvas { width: 0, height: 10 })
        ));
    }
}
