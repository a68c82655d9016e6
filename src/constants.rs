pub const FPS: u32 = 60;                        // Frames per second

pub const DEFAULT_INTERVAL_MS: u64 = 4000;      // Auto-advance delay between slides (milliseconds)
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;  // Minimum horizontal drag that counts as a swipe (pixels)

pub const CONTENT_MARGIN: f32 = 80.0;           // Left/right inset of the slide text block
pub const ARROW_SIZE: f32 = 48.0;               // Square hit box around each navigation arrow
pub const ARROW_MARGIN: f32 = 24.0;             // Arrow inset from the window edge
pub const DOT_RADIUS: f32 = 7.0;                // Dot indicator radius
pub const DOT_SPACING: f32 = 28.0;              // Center-to-center distance between dots
pub const DOT_BOTTOM_MARGIN: f32 = 36.0;        // Dot row inset from the bottom edge
pub const PLAY_PAUSE_SIZE: f32 = 40.0;          // Square hit box around the play/pause control
pub const PLAY_PAUSE_MARGIN: f32 = 24.0;        // Play/pause inset from the bottom-right corner

pub const BADGE_FONT_SIZE: i32 = 18;
pub const TITLE_FONT_SIZE: i32 = 48;
pub const DESCRIPTION_FONT_SIZE: i32 = 24;
pub const FEATURE_FONT_SIZE: i32 = 20;
pub const BUTTON_FONT_SIZE: i32 = 22;
