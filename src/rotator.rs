use crate::announcement::Announcement;
use crate::constants::{DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD};
use crate::gesture::{SwipeDirection, SwipeTracker};

#[derive(Debug, Clone, Copy)]
pub struct RotatorConfig {
    pub auto_play: bool,
    pub interval_ms: u64,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub swipe_threshold: f32,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            show_arrows: true,
            show_dots: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Declarative description of one rendered carousel frame.
///
/// The rotator produces this; the renderer consumes it. Control visibility
/// is resolved here so the renderer never looks at rotator state.
#[derive(Debug)]
pub struct Frame<'a> {
    pub announcement: &'a Announcement,
    pub index: usize,
    pub count: usize,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub show_play_pause: bool,
    pub paused: bool,
}

/// The carousel state machine.
///
/// Owns the announcement list, the current index, the pause flag, the
/// auto-advance countdown and the swipe tracker. All methods are total:
/// every index mutation wraps or clamps into `[0, count)`, so `frame()`
/// can never read past the end of the list.
pub struct Rotator {
    announcements: Vec<Announcement>,
    config: RotatorConfig,
    current_index: usize,
    paused: bool,
    countdown: Option<f32>, // seconds until the next auto-advance; None when idle
    swipe: SwipeTracker,
}

impl Rotator {
    pub fn new(announcements: Vec<Announcement>, config: RotatorConfig) -> Self {
        let mut rotator = Self {
            announcements,
            config,
            current_index: 0,
            paused: false,
            countdown: None,
            swipe: SwipeTracker::new(),
        };
        rotator.rearm();
        rotator
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn count(&self) -> usize {
        self.announcements.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move one slide forward, wrapping at the end of the list.
    pub fn advance(&mut self) {
        let count = self.announcements.len();
        if count > 1 {
            self.current_index = (self.current_index + 1) % count;
        }
        self.rearm();
    }

    /// Move one slide backward, wrapping at the start of the list.
    pub fn retreat(&mut self) {
        let count = self.announcements.len();
        if count > 1 {
            self.current_index = if self.current_index == 0 {
                count - 1
            } else {
                self.current_index - 1
            };
        }
        self.rearm();
    }

    /// Jump straight to a slide. Out-of-range input is clamped.
    pub fn go_to(&mut self, index: usize) {
        let count = self.announcements.len();
        if count > 0 {
            self.current_index = index.min(count - 1);
        }
        self.rearm();
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            self.rearm();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.rearm();
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.config.auto_play = auto_play;
        self.rearm();
    }

    pub fn set_interval(&mut self, interval_ms: u64) {
        self.config.interval_ms = interval_ms;
        self.rearm();
    }

    /// Replace the announcement list. The current index is clamped into the
    /// new range so a shrinking list can never leave it dangling.
    pub fn set_announcements(&mut self, announcements: Vec<Announcement>) {
        self.announcements = announcements;
        self.current_index = self
            .current_index
            .min(self.announcements.len().saturating_sub(1));
        self.rearm();
    }

    /// Advance the auto-advance countdown by `dt` seconds. Fires at most one
    /// `advance()` per call; the fire itself re-arms the countdown.
    pub fn tick(&mut self, dt: f32) {
        if let Some(remaining) = self.countdown.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.advance();
            }
        }
    }

    pub fn gesture_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn gesture_move(&mut self, x: f32) {
        self.swipe.update(x);
    }

    pub fn gesture_end(&mut self) {
        match self.swipe.finish(self.config.swipe_threshold) {
            Some(SwipeDirection::Left) => self.advance(),
            Some(SwipeDirection::Right) => self.retreat(),
            None => {}
        }
    }

    /// The declarative output for the current tick. `None` means an empty
    /// render: nothing to draw, no controls.
    pub fn frame(&self) -> Option<Frame<'_>> {
        let announcement = self.announcements.get(self.current_index)?;
        let count = self.announcements.len();
        let many = count > 1;
        Some(Frame {
            announcement,
            index: self.current_index,
            count,
            show_arrows: many && self.config.show_arrows,
            show_dots: many && self.config.show_dots,
            show_play_pause: many && self.config.auto_play,
            paused: self.paused,
        })
    }

    // Cancel the pending countdown and, when auto-advance conditions still
    // hold, start a fresh full interval. Sole writer of `countdown`.
    fn rearm(&mut self) {
        self.countdown = if self.config.auto_play && !self.paused && self.announcements.len() > 1 {
            Some(self.config.interval_ms as f32 / 1000.0)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(title: &str) -> Announcement {
        Announcement {
            title: title.to_string(),
            description: format!("{title} description"),
            image: None,
            badge: None,
            features: None,
            link: None,
            button_text: None,
            external: None,
        }
    }

    fn rotator(count: usize, config: RotatorConfig) -> Rotator {
        let announcements = (0..count).map(|i| ann(&format!("a{i}"))).collect();
        Rotator::new(announcements, config)
    }

    #[test]
    fn test_advance_cycles_without_skipping() {
        let mut r = rotator(3, RotatorConfig::default());
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(r.current_index());
            r.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let mut r = rotator(4, RotatorConfig::default());
        r.retreat();
        assert_eq!(r.current_index(), 3);
        r.retreat();
        assert_eq!(r.current_index(), 2);
    }

    #[test]
    fn test_single_slide_navigation_is_a_no_op() {
        let mut r = rotator(1, RotatorConfig::default());
        r.advance();
        assert_eq!(r.current_index(), 0);
        r.retreat();
        assert_eq!(r.current_index(), 0);
    }

    #[test]
    fn test_go_to_jumps_and_clamps() {
        let mut r = rotator(3, RotatorConfig::default());
        r.go_to(2);
        assert_eq!(r.current_index(), 2);
        r.go_to(99);
        assert_eq!(r.current_index(), 2);
    }

    #[test]
    fn test_tick_advances_exactly_once_per_interval() {
        let mut r = rotator(3, RotatorConfig::default());
        r.tick(3.9);
        assert_eq!(r.current_index(), 0);
        r.tick(0.2);
        assert_eq!(r.current_index(), 1);

        // The fire re-armed a full interval.
        r.tick(3.9);
        assert_eq!(r.current_index(), 1);
        r.tick(0.2);
        assert_eq!(r.current_index(), 2);
    }

    #[test]
    fn test_pause_suspends_auto_advance() {
        let mut r = rotator(3, RotatorConfig::default());
        r.set_paused(true);
        r.tick(60.0);
        assert_eq!(r.current_index(), 0);

        // Resuming restarts a full interval, not the leftover one.
        r.set_paused(false);
        r.tick(3.9);
        assert_eq!(r.current_index(), 0);
        r.tick(0.2);
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn test_auto_play_off_never_advances() {
        let config = RotatorConfig {
            auto_play: false,
            ..RotatorConfig::default()
        };
        let mut r = rotator(3, config);
        r.tick(60.0);
        assert_eq!(r.current_index(), 0);
    }

    #[test]
    fn test_disabling_auto_play_cancels_the_countdown() {
        let mut r = rotator(3, RotatorConfig::default());
        r.tick(3.9);
        r.set_auto_play(false);
        r.tick(60.0);
        assert_eq!(r.current_index(), 0);

        // Re-enabling starts from a full interval again.
        r.set_auto_play(true);
        r.tick(3.9);
        assert_eq!(r.current_index(), 0);
        r.tick(0.2);
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn test_manual_navigation_rearms_the_countdown() {
        let mut r = rotator(3, RotatorConfig::default());
        r.tick(3.9);
        r.advance();
        assert_eq!(r.current_index(), 1);

        // Without the re-arm this tick would fire a second advance.
        r.tick(0.2);
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn test_interval_change_rearms_the_countdown() {
        let mut r = rotator(3, RotatorConfig::default());
        r.tick(3.9);
        r.set_interval(1000);
        r.tick(0.5);
        assert_eq!(r.current_index(), 0);
        r.tick(0.6);
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn test_single_slide_has_no_live_countdown() {
        let mut r = rotator(1, RotatorConfig::default());
        r.tick(60.0);
        assert_eq!(r.current_index(), 0);
    }

    #[test]
    fn test_swipe_left_advances_swipe_right_retreats() {
        let mut r = rotator(3, RotatorConfig::default());

        r.gesture_start(200.0);
        r.gesture_move(140.0);
        r.gesture_end();
        assert_eq!(r.current_index(), 1);

        r.gesture_start(140.0);
        r.gesture_move(200.0);
        r.gesture_end();
        assert_eq!(r.current_index(), 0);
    }

    #[test]
    fn test_short_drag_does_not_navigate() {
        let mut r = rotator(3, RotatorConfig::default());
        r.gesture_start(200.0);
        r.gesture_move(160.0);
        r.gesture_end();
        assert_eq!(r.current_index(), 0);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let r = rotator(0, RotatorConfig::default());
        assert!(r.frame().is_none());
    }

    #[test]
    fn test_single_slide_hides_all_controls() {
        let r = rotator(1, RotatorConfig::default());
        let frame = r.frame().unwrap();
        assert!(!frame.show_arrows);
        assert!(!frame.show_dots);
        assert!(!frame.show_play_pause);
    }

    #[test]
    fn test_controls_follow_configuration() {
        let config = RotatorConfig {
            show_arrows: true,
            show_dots: false,
            auto_play: false,
            ..RotatorConfig::default()
        };
        let r = rotator(3, config);
        let frame = r.frame().unwrap();
        assert!(frame.show_arrows);
        assert!(!frame.show_dots);
        assert!(!frame.show_play_pause);
    }

    #[test]
    fn test_frame_exposes_the_current_announcement() {
        let mut r = rotator(3, RotatorConfig::default());
        r.advance();
        let frame = r.frame().unwrap();
        assert_eq!(frame.announcement.title, "a1");
        assert_eq!(frame.index, 1);
        assert_eq!(frame.count, 3);
    }

    #[test]
    fn test_shrinking_list_clamps_the_index() {
        let mut r = rotator(5, RotatorConfig::default());
        r.go_to(4);
        r.set_announcements(vec![ann("a"), ann("b")]);
        assert_eq!(r.current_index(), 1);

        r.set_announcements(Vec::new());
        assert_eq!(r.current_index(), 0);
        assert!(r.frame().is_none());
    }

    #[test]
    fn test_empty_list_tick_is_inert() {
        let mut r = rotator(0, RotatorConfig::default());
        r.tick(60.0);
        assert_eq!(r.current_index(), 0);
        assert!(r.frame().is_none());
    }
}
