use raylib::prelude::*;

use crate::constants::*;
use crate::rotator::Frame;

const BACKDROP: Color = Color::new(24, 20, 16, 255);
const OVERLAY: Color = Color::new(0, 0, 0, 140);
const ACCENT: Color = Color::new(214, 137, 16, 255);
const BODY_TEXT: Color = Color::new(225, 218, 206, 255);
const CONTROL_FILL: Color = Color::new(0, 0, 0, 110);
const DOT_IDLE: Color = Color::new(255, 255, 255, 120);

/// Hit boxes of the controls drawn for the last frame. The main loop routes
/// mouse presses through this before treating them as swipe starts.
#[derive(Debug, Default)]
pub struct ControlLayout {
    pub prev_arrow: Option<Rectangle>,
    pub next_arrow: Option<Rectangle>,
    pub dots: Vec<Rectangle>,
    pub play_pause: Option<Rectangle>,
    pub cta: Option<Rectangle>,
}

impl ControlLayout {
    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots
            .iter()
            .position(|rect| rect.check_collision_point_rec(point))
    }

    pub fn on_prev(&self, point: Vector2) -> bool {
        hits(self.prev_arrow, point)
    }

    pub fn on_next(&self, point: Vector2) -> bool {
        hits(self.next_arrow, point)
    }

    pub fn on_play_pause(&self, point: Vector2) -> bool {
        hits(self.play_pause, point)
    }

    pub fn on_cta(&self, point: Vector2) -> bool {
        hits(self.cta, point)
    }
}

fn hits(rect: Option<Rectangle>, point: Vector2) -> bool {
    rect.is_some_and(|r| r.check_collision_point_rec(point))
}

/// Draw one frame and report where its controls landed.
pub fn draw(
    d: &mut RaylibDrawHandle,
    frame: &Frame,
    texture: Option<&Texture2D>,
) -> ControlLayout {
    let sw = d.get_screen_width() as f32;
    let sh = d.get_screen_height() as f32;
    let mut controls = ControlLayout::default();

    draw_background(d, texture, sw, sh);

    let announcement = frame.announcement;
    let max_text_width = (sw - 2.0 * CONTENT_MARGIN) as i32;
    let x = CONTENT_MARGIN as i32;
    let mut y = (sh * 0.22) as i32;

    if let Some(badge) = &announcement.badge {
        let width = measure_text(badge, BADGE_FONT_SIZE) + 24;
        let rect = Rectangle::new(
            x as f32,
            y as f32,
            width as f32,
            (BADGE_FONT_SIZE + 14) as f32,
        );
        d.draw_rectangle_rounded(rect, 0.5, 8, ACCENT);
        d.draw_text(badge, x + 12, y + 7, BADGE_FONT_SIZE, Color::BLACK);
        y += BADGE_FONT_SIZE + 36;
    }

    for line in wrap_text(&announcement.title, TITLE_FONT_SIZE, max_text_width) {
        d.draw_text(&line, x, y, TITLE_FONT_SIZE, Color::RAYWHITE);
        y += TITLE_FONT_SIZE + 8;
    }
    y += 12;

    for line in wrap_text(&announcement.description, DESCRIPTION_FONT_SIZE, max_text_width) {
        d.draw_text(&line, x, y, DESCRIPTION_FONT_SIZE, BODY_TEXT);
        y += DESCRIPTION_FONT_SIZE + 6;
    }
    y += 18;

    if let Some(features) = &announcement.features {
        for feature in features {
            d.draw_circle(x + 5, y + FEATURE_FONT_SIZE / 2, 4.0, ACCENT);
            d.draw_text(&feature.text, x + 20, y, FEATURE_FONT_SIZE, BODY_TEXT);
            y += FEATURE_FONT_SIZE + 10;
        }
        y += 14;
    }

    if announcement.link.is_some() {
        let label = announcement.button_label();
        let width = measure_text(label, BUTTON_FONT_SIZE) + 48;
        let rect = Rectangle::new(
            x as f32,
            y as f32,
            width as f32,
            (BUTTON_FONT_SIZE + 24) as f32,
        );
        d.draw_rectangle_rounded(rect, 0.35, 8, ACCENT);
        d.draw_text(label, x + 24, y + 12, BUTTON_FONT_SIZE, Color::BLACK);
        controls.cta = Some(rect);
    }

    if frame.show_arrows {
        controls.prev_arrow = Some(draw_arrow(d, sw, sh, true));
        controls.next_arrow = Some(draw_arrow(d, sw, sh, false));
    }

    if frame.show_dots {
        controls.dots = draw_dots(d, frame.index, frame.count, sw, sh);
    }

    if frame.show_play_pause {
        controls.play_pause = Some(draw_play_pause(d, frame.paused, sw, sh));
    }

    controls
}

fn draw_background(d: &mut RaylibDrawHandle, texture: Option<&Texture2D>, sw: f32, sh: f32) {
    match texture {
        Some(texture) => {
            // Scale to cover the window, cropping the overflow.
            let tw = texture.width() as f32;
            let th = texture.height() as f32;
            let scale = (sw / tw).max(sh / th);
            let dest = Rectangle::new(
                (sw - tw * scale) / 2.0,
                (sh - th * scale) / 2.0,
                tw * scale,
                th * scale,
            );
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tw, th),
                dest,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
        None => d.draw_rectangle(0, 0, sw as i32, sh as i32, BACKDROP),
    }
    d.draw_rectangle(0, 0, sw as i32, sh as i32, OVERLAY);
}

fn draw_arrow(d: &mut RaylibDrawHandle, sw: f32, sh: f32, left: bool) -> Rectangle {
    let x = if left {
        ARROW_MARGIN
    } else {
        sw - ARROW_MARGIN - ARROW_SIZE
    };
    let rect = Rectangle::new(x, (sh - ARROW_SIZE) / 2.0, ARROW_SIZE, ARROW_SIZE);
    d.draw_rectangle_rounded(rect, 0.3, 8, CONTROL_FILL);

    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    let half = ARROW_SIZE * 0.18;
    let spread = half * 1.5;
    // Vertices in counter-clockwise order.
    if left {
        d.draw_triangle(
            Vector2::new(cx - half, cy),
            Vector2::new(cx + half, cy + spread),
            Vector2::new(cx + half, cy - spread),
            Color::RAYWHITE,
        );
    } else {
        d.draw_triangle(
            Vector2::new(cx + half, cy),
            Vector2::new(cx - half, cy - spread),
            Vector2::new(cx - half, cy + spread),
            Color::RAYWHITE,
        );
    }
    rect
}

fn draw_dots(
    d: &mut RaylibDrawHandle,
    current: usize,
    count: usize,
    sw: f32,
    sh: f32,
) -> Vec<Rectangle> {
    let row_width = (count.saturating_sub(1)) as f32 * DOT_SPACING;
    let start_x = (sw - row_width) / 2.0;
    let cy = sh - DOT_BOTTOM_MARGIN;

    let mut rects = Vec::with_capacity(count);
    for i in 0..count {
        let cx = start_x + i as f32 * DOT_SPACING;
        if i == current {
            d.draw_circle(cx as i32, cy as i32, DOT_RADIUS + 2.0, ACCENT);
        } else {
            d.draw_circle(cx as i32, cy as i32, DOT_RADIUS, DOT_IDLE);
        }
        // Hit box slightly larger than the dot itself.
        let pad = DOT_RADIUS + 5.0;
        rects.push(Rectangle::new(cx - pad, cy - pad, pad * 2.0, pad * 2.0));
    }
    rects
}

fn draw_play_pause(d: &mut RaylibDrawHandle, paused: bool, sw: f32, sh: f32) -> Rectangle {
    let rect = Rectangle::new(
        sw - PLAY_PAUSE_MARGIN - PLAY_PAUSE_SIZE,
        sh - PLAY_PAUSE_MARGIN - PLAY_PAUSE_SIZE,
        PLAY_PAUSE_SIZE,
        PLAY_PAUSE_SIZE,
    );
    d.draw_rectangle_rounded(rect, 0.3, 8, CONTROL_FILL);

    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    if paused {
        // Play glyph: triangle pointing right.
        let half = PLAY_PAUSE_SIZE * 0.18;
        let spread = half * 1.4;
        d.draw_triangle(
            Vector2::new(cx + half, cy),
            Vector2::new(cx - half, cy - spread),
            Vector2::new(cx - half, cy + spread),
            Color::RAYWHITE,
        );
    } else {
        // Pause glyph: two bars.
        let bar_w = PLAY_PAUSE_SIZE * 0.12;
        let bar_h = PLAY_PAUSE_SIZE * 0.45;
        d.draw_rectangle_rec(
            Rectangle::new(cx - bar_w * 1.8, cy - bar_h / 2.0, bar_w, bar_h),
            Color::RAYWHITE,
        );
        d.draw_rectangle_rec(
            Rectangle::new(cx + bar_w * 0.8, cy - bar_h / 2.0, bar_w, bar_h),
            Color::RAYWHITE,
        );
    }
    rect
}

// Greedy word wrap against the measured pixel width. A single word wider
// than the limit gets its own line rather than being split.
fn wrap_text(text: &str, font_size: i32, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && measure_text(&candidate, font_size) > max_width {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
