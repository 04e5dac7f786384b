//! Rotating index for the landing-page widgets
//!
//! Hero slides, testimonials, featured stories and the "this day in
//! history" card all cycle through a list on a timer, and the user can
//! step forwards or backwards. Both directions wrap around.

use crate::config::CarouselConfig;
use std::time::Duration;

/// The rotating widgets and their configured intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    Hero,
    Testimonials,
    Stories,
    ThisDay,
}

impl CarouselKind {
    pub fn interval(&self, config: &CarouselConfig) -> Duration {
        let ms = match self {
            CarouselKind::Hero => config.hero_interval_ms,
            CarouselKind::Testimonials => config.testimonial_interval_ms,
            CarouselKind::Stories => config.story_interval_ms,
            CarouselKind::ThisDay => config.this_day_interval_ms,
        };
        Duration::from_millis(ms)
    }
}

/// A list of items with a wrapping cursor
///
/// An empty carousel is valid: stepping does nothing and `current`
/// returns `None`.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    interval: Duration,
    elapsed: Duration,
}

impl<T> Carousel<T> {
    /// A carousel advancing every five seconds
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            interval: Duration::from_secs(5),
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn for_kind(items: Vec<T>, kind: CarouselKind, config: &CarouselConfig) -> Self {
        Self::new(items).with_interval(kind.interval(config))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.elapsed = Duration::ZERO;
    }

    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
        self.elapsed = Duration::ZERO;
    }

    /// Jump to a slide (the dot indicators); out-of-range is ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.items.len() {
            self.index = index;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Let time pass; advances once per full interval
    ///
    /// Returns the number of steps taken.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if self.items.is_empty() || self.interval.is_zero() {
            return 0;
        }

        self.elapsed += elapsed;
        let mut steps = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.items.len();
            steps += 1;
        }
        steps
    }
}
