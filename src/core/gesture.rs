//! Horizontal swipe interpretation.
//!
//! A press records the start column, drags record the latest column, and the
//! release turns the pair into a [`Gesture`]. Columns stand in for pixels.

/// Minimum horizontal travel for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Leftward swipe: go to the next card.
    Next,
    /// Rightward swipe: go to the previous card.
    Previous,
    /// Too short to be a swipe: flip the card.
    Tap,
}

impl Gesture {
    /// Classifies `distance = start_x - end_x`.
    pub fn from_distance(distance: i32) -> Self {
        if distance > SWIPE_THRESHOLD {
            Gesture::Next
        } else if distance < -SWIPE_THRESHOLD {
            Gesture::Previous
        } else {
            Gesture::Tap
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    start_x: Option<i32>,
    end_x: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn start(&mut self, x: i32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn move_to(&mut self, x: i32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Finishes the gesture. Returns `None` if no press was recorded.
    /// A release without any movement is a tap.
    pub fn finish(&mut self, x: Option<i32>) -> Option<Gesture> {
        let start = self.start_x.take()?;
        let end = x.or(self.end_x.take()).unwrap_or(start);
        self.end_x = None;
        Some(Gesture::from_distance(start - end))
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Gesture::from_distance(51), Gesture::Next);
        assert_eq!(Gesture::from_distance(50), Gesture::Tap);
        assert_eq!(Gesture::from_distance(49), Gesture::Tap);
        assert_eq!(Gesture::from_distance(0), Gesture::Tap);
        assert_eq!(Gesture::from_distance(-50), Gesture::Tap);
        assert_eq!(Gesture::from_distance(-51), Gesture::Previous);
    }

    #[test]
    fn test_leftward_drag_is_next() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        tracker.move_to(70);
        tracker.move_to(40);
        assert_eq!(tracker.finish(None), Some(Gesture::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_rightward_drag_is_previous() {
        let mut tracker = SwipeTracker::new();
        tracker.start(10);
        assert_eq!(tracker.finish(Some(80)), Some(Gesture::Previous));
    }

    #[test]
    fn test_release_without_move_is_tap() {
        let mut tracker = SwipeTracker::new();
        tracker.start(30);
        assert_eq!(tracker.finish(None), Some(Gesture::Tap));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.move_to(5);
        assert_eq!(tracker.finish(Some(0)), None);
    }

    #[test]
    fn test_new_press_discards_previous_end() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        tracker.move_to(0);
        tracker.cancel();
        tracker.start(20);
        assert_eq!(tracker.finish(None), Some(Gesture::Tap));
    }
}
