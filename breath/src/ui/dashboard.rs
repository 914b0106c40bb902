use nannou::Draw;
use nannou::geom::Rect;
use nannou::glam::{Vec2, vec2};

use super::layout::{CARD_PADDING, DashboardLayout, ICON_SIZE};
use super::style::{self, Justify, white};
use crate::catalog::{
    BreathPattern, CREDIT, FOOTER, QUICK_GUIDE, TAGLINE, TITLE, patterns,
};
use crate::core::util::with_opacity;
use crate::render::{Primitive, Surface, thumbnail};
use crate::ternary;

/// Lines scrolled per wheel notch
const LINE_HEIGHT: f32 = 40.0;

/// Selection screen state. Only the scroll offset changes while the
/// dashboard is shown; icons are rendered once.
pub struct Dashboard {
    scroll: f32,
    icons: Vec<Vec<Primitive>>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        let icon_bounds = Rect::from_w_h(ICON_SIZE, ICON_SIZE);
        Self {
            scroll: 0.0,
            icons: patterns()
                .iter()
                .map(|pattern| thumbnail(pattern, icon_bounds))
                .collect(),
        }
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn layout(&self, window: Rect) -> DashboardLayout {
        DashboardLayout::new(
            window,
            patterns().len(),
            QUICK_GUIDE.len(),
            self.scroll,
        )
    }

    /// Positive `lines` scroll the page down (content moves up)
    pub fn scroll_lines(&mut self, lines: f32, window: Rect) {
        self.scroll_pixels(lines * LINE_HEIGHT, window);
    }

    pub fn scroll_pixels(&mut self, pixels: f32, window: Rect) {
        self.scroll = self.layout(window).clamp_scroll(self.scroll + pixels);
    }

    /// Re-clamps after the window changed size
    pub fn fit(&mut self, window: Rect) {
        self.scroll_pixels(0.0, window);
    }

    pub fn pattern_at(
        &self,
        window: Rect,
        point: Vec2,
    ) -> Option<&'static BreathPattern> {
        self.layout(window)
            .card_at(point)
            .and_then(|i| patterns().get(i))
    }

    pub fn draw(&self, draw: &Draw, window: Rect, pointer: Vec2) {
        let layout = self.layout(window);
        let hovered = layout.card_at(pointer);

        style::backdrop(draw, window);

        let content_w = layout.guide.w();
        style::text(
            draw,
            TITLE,
            style::centered_row(layout.title.x, layout.title.y, content_w, 64.0),
            48,
            white(1.0),
            Justify::Center,
        );
        style::text(
            draw,
            TAGLINE,
            style::centered_row(
                layout.tagline.x,
                layout.tagline.y,
                content_w,
                28.0,
            ),
            18,
            white(0.6),
            Justify::Center,
        );

        for (i, (card, pattern)) in
            layout.cards.iter().zip(patterns()).enumerate()
        {
            if card.top() < window.bottom() || card.bottom() > window.top() {
                continue;
            }
            self.draw_card(draw, *card, pattern, i, hovered == Some(i));
        }

        draw_guide(draw, &layout);
        draw_footer(draw, layout.footer);
    }

    fn draw_card(
        &self,
        draw: &Draw,
        card: Rect,
        pattern: &BreathPattern,
        index: usize,
        hovered: bool,
    ) {
        let color = pattern.rgb();

        if hovered {
            let halo = card.pad(-6.0);
            draw.rect()
                .xy(halo.xy())
                .wh(halo.wh())
                .color(with_opacity(color, 0.12));
        }
        style::panel(
            draw,
            card,
            white(ternary!(hovered, 0.1, 0.05)),
            ternary!(hovered, with_opacity(color, 0.6), white(0.1)),
        );

        let left = card.left() + CARD_PADDING;
        let inner_w = card.w() - CARD_PADDING * 2.0;
        let mut top = card.top() - CARD_PADDING;

        let icon_center = vec2(left + ICON_SIZE / 2.0, top - ICON_SIZE / 2.0);
        draw.rect()
            .xy(icon_center)
            .w_h(ICON_SIZE, ICON_SIZE)
            .color(with_opacity(color, 0.15));
        if let Some(icon) = self.icons.get(index) {
            let mut surface = draw.xy(icon_center);
            surface.paint_all(icon);
        }
        top -= ICON_SIZE + 16.0;

        style::text(
            draw,
            pattern.name,
            style::row(left, top, inner_w, 28.0),
            20,
            white(1.0),
            Justify::Left,
        );
        top -= 28.0 + 6.0;

        style::text(
            draw,
            pattern.description,
            style::row(left, top, inner_w, 22.0),
            14,
            white(0.6),
            Justify::Left,
        );
        top -= 22.0 + 10.0;

        style::text(
            draw,
            &pattern.timing.summary(),
            style::row(left, top, inner_w, 20.0),
            12,
            with_opacity(color, 0.9),
            Justify::Left,
        );
    }
}

fn draw_guide(draw: &Draw, layout: &DashboardLayout) {
    let guide = layout.guide;
    style::panel(draw, guide, white(0.04), white(0.1));
    style::text(
        draw,
        "Quick Guide",
        style::row(
            guide.left() + CARD_PADDING,
            guide.top() - CARD_PADDING,
            guide.w() - CARD_PADDING * 2.0,
            28.0,
        ),
        22,
        white(1.0),
        Justify::Left,
    );

    for (section, rect) in QUICK_GUIDE.iter().zip(&layout.guide_sections) {
        let mut top = rect.top();
        style::text(
            draw,
            section.title,
            style::row(rect.left(), top, rect.w(), 24.0),
            16,
            white(0.9),
            Justify::Left,
        );
        top -= 28.0;
        for line in section.lines {
            style::text(
                draw,
                &format!("• {}", line),
                style::row(rect.left(), top, rect.w(), 20.0),
                13,
                white(0.65),
                Justify::Left,
            );
            top -= 22.0;
        }
    }
}

fn draw_footer(draw: &Draw, footer: Rect) {
    let mut y = footer.top() - 12.0;
    for line in FOOTER {
        style::text(
            draw,
            line,
            style::centered_row(footer.x(), y, footer.w(), 20.0),
            12,
            white(0.45),
            Justify::Center,
        );
        y -= 22.0;
    }
    style::text(
        draw,
        &CREDIT.join(" · "),
        style::centered_row(footer.x(), y, footer.w(), 20.0),
        11,
        white(0.3),
        Justify::Center,
    );
}
