use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

use carousel::announcement::load_announcements;
use carousel::constants::*;
use carousel::launcher::open_link;
use carousel::renderer::{self, ControlLayout};
use carousel::rotator::{Rotator, RotatorConfig};
use carousel::texture_loader::SlideTextures;

/// Auto-advancing announcement carousel.
#[derive(Parser)]
#[command(name = "carousel", version, about)]
struct Cli {
    /// Path to the announcements JSON file
    announcements: PathBuf,

    /// Auto-advance delay in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval: u64,

    /// Disable timed auto-advance
    #[arg(long)]
    no_autoplay: bool,

    /// Hide the previous/next arrows
    #[arg(long)]
    no_arrows: bool,

    /// Hide the per-slide dot indicators
    #[arg(long)]
    no_dots: bool,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    swipe_threshold: f32,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_window_size, default_value = "1280x720")]
    window: (i32, i32),
}

fn parse_window_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w = w.parse().map_err(|_| format!("bad width in {s:?}"))?;
    let h = h.parse().map_err(|_| format!("bad height in {s:?}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let announcements = load_announcements(&cli.announcements)?;
    if announcements.is_empty() {
        warn!(
            file = %cli.announcements.display(),
            "announcements file is empty, showing a blank window"
        );
    } else {
        info!(count = announcements.len(), "loaded announcements");
    }
    let base_dir = cli
        .announcements
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let (window_width, window_height) = cli.window;
    let (mut rl, thread) = raylib::init()
        .size(window_width, window_height)
        .title("Announcements Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = SlideTextures::load(&mut rl, &thread, &announcements, &base_dir);

    let config = RotatorConfig {
        auto_play: !cli.no_autoplay,
        interval_ms: cli.interval,
        show_arrows: !cli.no_arrows,
        show_dots: !cli.no_dots,
        swipe_threshold: cli.swipe_threshold,
    };
    let mut rotator = Rotator::new(announcements, config);

    // Control hit boxes from the previous frame; presses are routed through
    // these before falling back to a swipe start.
    let mut controls = ControlLayout::default();
    let mut hovered = false;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // Keyboard navigation, only while the window has focus.
        if rl.is_window_focused() {
            if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                rotator.retreat();
            }
            if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                rotator.advance();
            }
            if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
                rotator.toggle_pause();
            }
        }

        // Hovering over the carousel pauses auto-advance, leaving resumes it.
        let on_window = rl.is_cursor_on_screen();
        if on_window != hovered {
            hovered = on_window;
            rotator.set_paused(hovered);
        }

        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(i) = controls.dot_at(mouse) {
                rotator.go_to(i);
            } else if controls.on_prev(mouse) {
                rotator.retreat();
            } else if controls.on_next(mouse) {
                rotator.advance();
            } else if controls.on_play_pause(mouse) {
                rotator.toggle_pause();
            } else if controls.on_cta(mouse) {
                if let Some(frame) = rotator.frame() {
                    if let Some(link) = &frame.announcement.link {
                        open_link(link, frame.announcement.external.unwrap_or(false));
                    }
                }
            } else {
                rotator.gesture_start(mouse.x);
            }
        }
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            rotator.gesture_move(mouse.x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            rotator.gesture_end();
        }

        rotator.tick(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        controls = match rotator.frame() {
            Some(frame) => renderer::draw(&mut d, &frame, textures.get(frame.index)),
            None => ControlLayout::default(),
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_size() {
        assert_eq!(parse_window_size("1280x720"), Ok((1280, 720)));
        assert_eq!(parse_window_size("1920X1080"), Ok((1920, 1080)));
        assert!(parse_window_size("1280").is_err());
        assert!(parse_window_size("axb").is_err());
    }
}
