//! Renderers for special fenced blocks.

pub mod collapsible;
pub mod diagram;
pub mod direction;
pub mod video;
