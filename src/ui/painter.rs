//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reiner Beobachter: liest die Szene, verändert keinen Zustand.

use crate::shared::RenderScene;
use egui::{Color32, Pos2, Shape, Stroke};
use glam::Vec2;

const DASH_LENGTH_PX: f32 = 6.0;
const GAP_LENGTH_PX: f32 = 4.0;

fn color(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn to_screen(origin: Pos2, p: Vec2) -> Pos2 {
    Pos2::new(origin.x + p.x, origin.y + p.y)
}

/// Zeichnet Hilfslinien, Kurve, Kontrollpunkte und Anker (in dieser Reihenfolge).
pub fn paint_scene(painter: &egui::Painter, canvas: egui::Rect, scene: &RenderScene) {
    let origin = canvas.min;
    let opts = &scene.options;

    let guide_stroke = Stroke::new(1.0, color(opts.guide_line_color));
    for (a, b) in scene.guide_lines() {
        painter.extend(Shape::dashed_line(
            &[to_screen(origin, a), to_screen(origin, b)],
            guide_stroke,
            DASH_LENGTH_PX,
            GAP_LENGTH_PX,
        ));
    }

    if let Some(path) = scene.path.as_deref() {
        let points: Vec<Pos2> = path
            .flatten(opts.samples_per_segment)
            .into_iter()
            .map(|p| to_screen(origin, p))
            .collect();
        painter.add(Shape::line(
            points,
            Stroke::new(opts.curve_width_px, color(opts.curve_color)),
        ));
    }

    if opts.show_control_handles {
        let handle_stroke = Stroke::new(1.0, color(opts.handle_line_color));
        for (anchor, control) in scene.handle_lines() {
            painter.extend(Shape::dashed_line(
                &[to_screen(origin, anchor), to_screen(origin, control)],
                handle_stroke,
                DASH_LENGTH_PX,
                GAP_LENGTH_PX,
            ));
        }
        let cp_stroke = Stroke::new(1.0, color(opts.control_point_color));
        for pair in scene.control_pairs() {
            painter.circle_stroke(
                to_screen(origin, pair.c1),
                opts.control_point_radius_px,
                cp_stroke,
            );
            painter.circle_stroke(
                to_screen(origin, pair.c2),
                opts.control_point_radius_px,
                cp_stroke,
            );
        }
    }

    let anchor_stroke = Stroke::new(1.0, color(opts.anchor_color));
    for (index, anchor) in scene.anchors.iter().enumerate() {
        let center = to_screen(origin, *anchor);
        if scene.dragged_index == Some(index) {
            painter.circle_filled(
                center,
                opts.anchor_radius_px,
                color(opts.anchor_color_dragged),
            );
        } else {
            painter.circle_stroke(center, opts.anchor_radius_px, anchor_stroke);
        }
    }
}
