//! Presentation state that outlives a single render

pub mod carousel;

pub use carousel::{Carousel, CarouselKind};
