//! Proxy services between the widgets and the generative model.

pub mod advisor;
pub mod visualizer;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use advisor::request_advice;
pub use visualizer::request_image;
pub use widgets::{SharedWidget, WidgetStore};
