//! The shared draft pools: factory displays and the center of the table.

mod center;
mod display;

pub use center::CenterPool;
pub use display::{FactoryDisplay, DISPLAY_CAPACITY};
