//! Pure geometry for both screens. Everything here is in window
//! coordinates (origin at the window center, y up) so results can be hit
//! tested directly against mouse positions.

use nannou::geom::Rect;
use nannou::glam::{Vec2, vec2};

pub const PAGE_PADDING: f32 = 32.0;
pub const MAX_CONTENT_WIDTH: f32 = 1152.0;
pub const CARD_GAP: f32 = 24.0;
pub const CARD_HEIGHT: f32 = 230.0;
pub const CARD_PADDING: f32 = 24.0;
pub const ICON_SIZE: f32 = 64.0;

const HEADER_HEIGHT: f32 = 150.0;
const GUIDE_MARGIN: f32 = 48.0;
const GUIDE_HEADING: f32 = 72.0;
const GUIDE_SECTION_HEIGHT: f32 = 120.0;
const FOOTER_MARGIN: f32 = 40.0;
const FOOTER_HEIGHT: f32 = 90.0;

pub const TABLET_WIDTH: f32 = 768.0;
pub const DESKTOP_WIDTH: f32 = 1024.0;

pub const BACK_BUTTON_SIZE: (f32, f32) = (220.0, 44.0);
pub const CYCLES_BOX_SIZE: (f32, f32) = (112.0, 68.0);
const OVERLAY_MARGIN: f32 = 24.0;

pub fn card_columns(window_width: f32) -> usize {
    if window_width >= DESKTOP_WIDTH {
        4
    } else if window_width >= TABLET_WIDTH {
        2
    } else {
        1
    }
}

/// Dashboard geometry for a window, with content shifted up by `scroll`
#[derive(Clone, Debug)]
pub struct DashboardLayout {
    pub columns: usize,
    pub title: Vec2,
    pub tagline: Vec2,
    pub cards: Vec<Rect>,
    pub guide: Rect,
    pub guide_sections: Vec<Rect>,
    pub footer: Rect,
    pub content_height: f32,
    window: Rect,
}

impl DashboardLayout {
    pub fn new(
        window: Rect,
        card_count: usize,
        section_count: usize,
        scroll: f32,
    ) -> Self {
        let columns = card_columns(window.w());
        let content_w =
            (window.w() - PAGE_PADDING * 2.0).clamp(0.0, MAX_CONTENT_WIDTH);
        let left = window.x() - content_w / 2.0;
        let top = window.top() - PAGE_PADDING + scroll;

        let title = vec2(window.x(), top - 40.0);
        let tagline = vec2(window.x(), top - 96.0);
        let mut cursor = top - HEADER_HEIGHT;

        let card_w =
            (content_w - CARD_GAP * (columns - 1) as f32) / columns as f32;
        let cards = (0..card_count)
            .map(|i| {
                let col = (i % columns) as f32;
                let row = (i / columns) as f32;
                Rect::from_x_y_w_h(
                    left + col * (card_w + CARD_GAP) + card_w / 2.0,
                    cursor - row * (CARD_HEIGHT + CARD_GAP) - CARD_HEIGHT / 2.0,
                    card_w,
                    CARD_HEIGHT,
                )
            })
            .collect();
        cursor -= stack_height(rows(card_count, columns), CARD_HEIGHT);
        cursor -= GUIDE_MARGIN;

        let guide_columns = if columns >= 2 { 2 } else { 1 };
        let guide_rows = rows(section_count, guide_columns);
        let guide_h = GUIDE_HEADING
            + guide_rows as f32 * GUIDE_SECTION_HEIGHT
            + CARD_PADDING;
        let guide = Rect::from_x_y_w_h(
            window.x(),
            cursor - guide_h / 2.0,
            content_w,
            guide_h,
        );
        let section_w = (content_w
            - CARD_PADDING * 2.0
            - CARD_GAP * (guide_columns - 1) as f32)
            / guide_columns as f32;
        let sections_top = guide.top() - GUIDE_HEADING;
        let guide_sections = (0..section_count)
            .map(|i| {
                let col = (i % guide_columns) as f32;
                let row = (i / guide_columns) as f32;
                Rect::from_x_y_w_h(
                    guide.left()
                        + CARD_PADDING
                        + col * (section_w + CARD_GAP)
                        + section_w / 2.0,
                    sections_top
                        - row * GUIDE_SECTION_HEIGHT
                        - GUIDE_SECTION_HEIGHT / 2.0,
                    section_w,
                    GUIDE_SECTION_HEIGHT,
                )
            })
            .collect();
        cursor -= guide_h + FOOTER_MARGIN;

        let footer = Rect::from_x_y_w_h(
            window.x(),
            cursor - FOOTER_HEIGHT / 2.0,
            content_w,
            FOOTER_HEIGHT,
        );
        cursor -= FOOTER_HEIGHT;

        Self {
            columns,
            title,
            tagline,
            cards,
            guide,
            guide_sections,
            footer,
            content_height: top - cursor + PAGE_PADDING * 2.0,
            window,
        }
    }

    /// How far the page can scroll before the footer leaves the bottom edge
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.window.h()).max(0.0)
    }

    pub fn clamp_scroll(&self, scroll: f32) -> f32 {
        scroll.clamp(0.0, self.max_scroll())
    }

    pub fn card_at(&self, point: Vec2) -> Option<usize> {
        if !self.window.contains(point) {
            return None;
        }
        self.cards.iter().position(|card| card.contains(point))
    }
}

fn rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

fn stack_height(rows: usize, height: f32) -> f32 {
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * height + (rows - 1) as f32 * CARD_GAP
}

/// Positions of the elements drawn over the visualization
#[derive(Clone, Debug)]
pub struct OverlayLayout {
    pub back_button: Rect,
    pub cycles_box: Rect,
    pub label: Vec2,
    pub name: Vec2,
    pub breakdown: Vec2,
    pub credit: Rect,
}

impl OverlayLayout {
    pub fn new(window: Rect) -> Self {
        let (back_w, back_h) = BACK_BUTTON_SIZE;
        let (cycles_w, cycles_h) = CYCLES_BOX_SIZE;
        Self {
            back_button: Rect::from_x_y_w_h(
                window.left() + OVERLAY_MARGIN + back_w / 2.0,
                window.top() - OVERLAY_MARGIN - back_h / 2.0,
                back_w,
                back_h,
            ),
            cycles_box: Rect::from_x_y_w_h(
                window.right() - OVERLAY_MARGIN - cycles_w / 2.0,
                window.top() - OVERLAY_MARGIN - cycles_h / 2.0,
                cycles_w,
                cycles_h,
            ),
            label: window.xy(),
            name: vec2(window.x(), window.bottom() + 72.0),
            breakdown: vec2(window.x(), window.bottom() + 44.0),
            credit: Rect::from_x_y_w_h(
                window.right() - 16.0 - 90.0,
                window.bottom() + 16.0 + 17.0,
                180.0,
                34.0,
            ),
        }
    }

    pub fn hits_back(&self, point: Vec2) -> bool {
        self.back_button.contains(point)
    }
}
