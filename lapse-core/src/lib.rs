pub mod duration;
pub mod elements;
pub mod format;
pub mod ratio;
pub mod resolution;
pub mod stopwatch;

pub use duration::TickDuration;
pub use elements::TimeElements;
pub use format::render;
pub use ratio::{Ratio, RatioError};
pub use resolution::Resolution;
pub use stopwatch::Stopwatch;
