//! Post-mix effects.

pub mod delay;

pub use delay::FeedbackDelay;
