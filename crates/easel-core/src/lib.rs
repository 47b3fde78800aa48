pub mod confetti;
pub mod constants;
pub mod drift;
pub mod paint;
pub mod reveal;
pub mod story;

pub use confetti::*;
pub use constants::*;
pub use drift::*;
pub use paint::*;
pub use reveal::*;
pub use story::*;
