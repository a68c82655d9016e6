#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tracks one horizontal drag from press to release.
///
/// `begin` records the starting x coordinate, `update` the latest one, and
/// `finish` resolves the gesture: a net delta beyond the threshold yields a
/// direction, anything else yields nothing. Tracker state is cleared on
/// `finish` regardless of the outcome.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<f32>,
    latest: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.start = Some(x);
        self.latest = None;
    }

    pub fn update(&mut self, x: f32) {
        if self.start.is_some() {
            self.latest = Some(x);
        }
    }

    pub fn finish(&mut self, threshold: f32) -> Option<SwipeDirection> {
        let resolved = match (self.start, self.latest) {
            (Some(start), Some(latest)) => {
                let distance = start - latest;
                if distance > threshold {
                    Some(SwipeDirection::Left)
                } else if distance < -threshold {
                    Some(SwipeDirection::Right)
                } else {
                    None
                }
            }
            _ => None,
        };
        self.start = None;
        self.latest = None;
        resolved
    }
}
