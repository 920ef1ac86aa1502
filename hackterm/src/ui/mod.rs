//! UI module for the terminal frontend

pub mod render;
pub mod theme;
pub mod widgets;
