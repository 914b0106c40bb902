use nannou::Draw;
use nannou::geom::Rect;
use nannou::glam::Vec2;

use super::layout::OverlayLayout;
use super::style::{self, Justify, white};
use crate::catalog::{BreathPattern, CREDIT};
use crate::core::util::night;
use crate::render::{Primitive, Surface};
use crate::session::FrameState;
use crate::ternary;

pub const BACK_LABEL: &str = "← Back to Dashboard";

pub fn clear(draw: &Draw) {
    draw.background().color(night(1.0));
}

/// Paints a rendered scene followed by the overlay
pub fn draw(
    draw: &Draw,
    window: Rect,
    pattern: &BreathPattern,
    scene: &[Primitive],
    state: &FrameState,
    pointer: Vec2,
) {
    let mut surface = draw.clone();
    surface.paint_all(scene);
    draw_overlay(draw, window, pattern, state, pointer);
}

pub fn draw_overlay(
    draw: &Draw,
    window: Rect,
    pattern: &BreathPattern,
    state: &FrameState,
    pointer: Vec2,
) {
    let layout = OverlayLayout::new(window);
    let hovered = layout.hits_back(pointer);

    style::panel(
        draw,
        layout.back_button,
        white(ternary!(hovered, 0.2, 0.1)),
        white(0.2),
    );
    style::text(
        draw,
        BACK_LABEL,
        layout.back_button,
        14,
        white(1.0),
        Justify::Center,
    );

    let cycles = layout.cycles_box;
    style::panel(draw, cycles, white(0.1), white(0.2));
    style::text(
        draw,
        "Cycles",
        style::centered_row(cycles.x(), cycles.top() - 16.0, cycles.w(), 16.0),
        11,
        white(0.6),
        Justify::Center,
    );
    style::text(
        draw,
        &state.cycle_count.to_string(),
        style::centered_row(cycles.x(), cycles.y() - 8.0, cycles.w(), 32.0),
        28,
        white(1.0),
        Justify::Center,
    );

    style::text(
        draw,
        state.label(),
        style::centered_row(layout.label.x, layout.label.y, window.w(), 64.0),
        48,
        white(state.label_opacity()),
        Justify::Center,
    );

    style::text(
        draw,
        pattern.name,
        style::centered_row(layout.name.x, layout.name.y, window.w(), 30.0),
        22,
        white(1.0),
        Justify::Center,
    );
    style::text(
        draw,
        &pattern.timing.breakdown(),
        style::centered_row(
            layout.breakdown.x,
            layout.breakdown.y,
            window.w(),
            20.0,
        ),
        13,
        white(0.6),
        Justify::Center,
    );

    let credit = layout.credit;
    for (i, line) in CREDIT.iter().enumerate() {
        style::text(
            draw,
            line,
            style::centered_row(
                credit.x(),
                credit.top() - 8.0 - i as f32 * 17.0,
                credit.w(),
                16.0,
            ),
            10,
            white(0.3),
            Justify::Right,
        );
    }
}
