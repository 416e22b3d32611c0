use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::{Result, SlideshowError};

/// A manual navigation request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
}

/// The slideshow controller: a fixed playlist, the index being displayed and
/// the time spent on it. The index always stays within `0..len()`.
#[derive(Debug)]
pub struct SlideshowState {
    images: Vec<PathBuf>,
    index: usize,
    interval: Duration,
    elapsed: Duration,
    // The frame that decoded the current image does not count
    skip_next_frame: bool,
}

impl SlideshowState {
    pub fn new(images: Vec<PathBuf>, interval: Duration) -> Result<Self> {
        if images.is_empty() {
            return Err(SlideshowError::EmptySlideshow);
        }
        Ok(Self {
            images,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
            skip_next_frame: false,
        })
    }

    pub fn current(&self) -> &Path {
        &self.images[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
        self.reset_timer();
    }

    pub fn previous(&mut self) {
        self.index = match self.index {
            0 => self.images.len() - 1,
            i => i - 1,
        };
        self.reset_timer();
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    /// Advances the timer by one frame. Returns true when the interval ran out
    /// and the slideshow moved to the next image.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if std::mem::take(&mut self.skip_next_frame) {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.next();
            return true;
        }
        false
    }

    pub fn reset_timer(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Called once the current image is decoded and about to be drawn. The
    /// interval restarts here, and the next frame time, which includes the
    /// blocking decode, is ignored.
    pub fn slide_shown(&mut self) {
        self.reset_timer();
        self.skip_next_frame = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow(count: usize) -> SlideshowState {
        let images = (0..count).map(|i| PathBuf::from(format!("content/{i}.jpg"))).collect();
        SlideshowState::new(images, Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn starts_at_first_image() {
        let state = slideshow(3);
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(), Path::new("content/0.jpg"));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let err = SlideshowState::new(Vec::new(), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, SlideshowError::EmptySlideshow));
    }

    #[test]
    fn next_wraps_at_end() {
        let mut state = slideshow(3);
        let visited: Vec<usize> = (0..7)
            .map(|_| {
                state.next();
                state.index()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn previous_wraps_at_start() {
        let mut state = slideshow(3);
        state.previous();
        assert_eq!(state.index(), 2);
        state.previous();
        state.previous();
        assert_eq!(state.index(), 0);
        state.previous();
        assert_eq!(state.current(), Path::new("content/2.jpg"));
    }

    #[test]
    fn single_image_stays_in_bounds() {
        let mut state = slideshow(1);
        state.next();
        assert_eq!(state.index(), 0);
        state.previous();
        assert_eq!(state.index(), 0);
        assert!(state.tick(Duration::from_secs(10)));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_any_command_sequence() {
        let mut state = slideshow(4);
        let commands = [
            Command::Previous, Command::Previous, Command::Next, Command::Previous,
            Command::Next, Command::Next, Command::Next, Command::Next, Command::Next,
        ];
        for command in commands {
            state.apply(command);
            assert!(state.index() < state.len());
        }
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn timer_fires_once_per_interval() {
        let mut state = slideshow(5);
        let frame = Duration::from_millis(500);

        let fired: usize = (0..40).filter(|_| state.tick(frame)).count();
        // 40 frames of 0.5s at a 10s interval
        assert_eq!(fired, 2);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn timer_does_not_fire_before_interval() {
        let mut state = slideshow(2);
        assert!(!state.tick(Duration::from_secs(9)));
        assert_eq!(state.index(), 0);
        assert!(state.tick(Duration::from_secs(1)));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let mut state = slideshow(3);
        assert!(!state.tick(Duration::from_secs(8)));

        state.apply(Command::Next);
        assert_eq!(state.index(), 1);

        // Only 8s since the key press, the original 10s deadline has passed
        assert!(!state.tick(Duration::from_secs(8)));
        assert_eq!(state.index(), 1);
        assert!(state.tick(Duration::from_secs(2)));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn decode_time_does_not_shorten_the_interval() {
        let mut state = slideshow(3);
        state.apply(Command::Next);
        state.slide_shown();

        // A slow decode makes the following frame last longer than the interval
        assert!(!state.tick(Duration::from_secs(25)));
        assert_eq!(state.index(), 1);

        assert!(!state.tick(Duration::from_secs(9)));
        assert!(state.tick(Duration::from_secs(1)));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn first_slide_gets_a_full_interval() {
        let mut state = slideshow(2);
        state.slide_shown();
        assert!(!state.tick(Duration::from_secs(12)));
        assert!(!state.tick(Duration::from_secs(9)));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn reset_timer_postpones_the_next_slide() {
        let mut state = slideshow(2);
        state.tick(Duration::from_secs(9));
        state.reset_timer();
        assert!(!state.tick(Duration::from_secs(9)));
        assert_eq!(state.index(), 0);
    }
}
