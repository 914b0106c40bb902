use nannou::Draw;
use nannou::color::Srgba;
use nannou::geom::Rect;
use nannou::glam::vec2;

use crate::core::util::{rgb_from_hex, with_opacity};

pub const SLATE: u32 = 0x0f172a;
pub const PURPLE: u32 = 0x581c87;
pub const WHITE: u32 = 0xffffff;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

pub fn white(alpha: f32) -> Srgba {
    with_opacity(rgb_from_hex(WHITE), alpha)
}

/// Diagonal slate/purple/slate gradient behind the dashboard
pub fn backdrop(draw: &Draw, window: Rect) {
    let slate = with_opacity(rgb_from_hex(SLATE), 1.0);
    let purple = with_opacity(rgb_from_hex(PURPLE), 1.0);
    draw.polygon().points_colored([
        (window.top_left(), slate),
        (window.top_right(), purple),
        (window.bottom_right(), slate),
        (window.bottom_left(), purple),
    ]);
}

/// Translucent panel with a hairline border
pub fn panel(draw: &Draw, rect: Rect, fill: Srgba, border: Srgba) {
    draw.rect()
        .xy(rect.xy())
        .wh(rect.wh())
        .color(fill)
        .stroke(border)
        .stroke_weight(1.0);
}

/// Draws one block of text inside `rect`, vertically centered
pub fn text(
    draw: &Draw,
    content: &str,
    rect: Rect,
    font_size: u32,
    color: Srgba,
    justify: Justify,
) {
    let drawing = draw
        .text(content)
        .xy(rect.xy())
        .wh(rect.wh())
        .font_size(font_size)
        .color(color)
        .align_text_middle_y();

    match justify {
        Justify::Left => drawing.left_justify(),
        Justify::Center => drawing.center_justify(),
        Justify::Right => drawing.right_justify(),
    };
}

/// A `height` tall text row of `width` whose left edge is at `x`
pub fn row(x: f32, top: f32, width: f32, height: f32) -> Rect {
    Rect::from_x_y_w_h(
        x + width / 2.0,
        top - height / 2.0,
        width.max(0.0),
        height,
    )
}

/// Row centered horizontally on `center_x`
pub fn centered_row(center_x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_xy_wh(vec2(center_x, y), vec2(width.max(0.0), height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn white_keeps_channels_and_applies_alpha() {
        let c = white(0.35);
        assert_approx_eq!(c.red, 1.0);
        assert_approx_eq!(c.green, 1.0);
        assert_approx_eq!(c.blue, 1.0);
        assert_approx_eq!(c.alpha, 0.35);
    }

    #[test]
    fn rows_are_anchored_by_left_edge_and_top() {
        let r = row(-100.0, 50.0, 80.0, 20.0);
        assert_approx_eq!(r.left(), -100.0);
        assert_approx_eq!(r.top(), 50.0);
        assert_approx_eq!(r.w(), 80.0);
    }
}
