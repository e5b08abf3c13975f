//! UI components.

pub mod background;
