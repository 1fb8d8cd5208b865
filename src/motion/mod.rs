// motion/ - Small per-frame helpers for the page chrome

pub mod marquee;
pub mod pointer;

pub use marquee::Marquee;
pub use pointer::{Rect, card_offset};
