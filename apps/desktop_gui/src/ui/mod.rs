//! UI layer: app shell, host page state, and heart textures.

pub mod app;
pub mod hearts;
pub mod page;

pub use app::{HeartlistApp, StartupConfig};
