#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod random;
pub mod time;

pub use error::Error;
pub use random::{RandomSource, shuffle};
pub use time::Clock;
