//! Bubble Progress
//!
//! An animated download-progress widget: a horizontal track that bends down
//! at the current position, with a speech bubble riding above the bend.
//! Geometry is pure and integer-based, animation is driven by the host's
//! frame loop, and drawing goes through tiny-skia.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod path;
pub mod renderer;
pub mod theme;
pub mod widget;

pub use animation::{duration_for, Animator, Easing, Transition};
pub use config::WidgetConfig;
pub use error::{ConfigError, RenderError, WidgetError};
pub use geometry::{build_paths, BubbleShape, PathSet};
pub use path::{Oval, Path, PathCommand};
pub use renderer::{Paints, Renderer, Style};
pub use theme::Color;
pub use widget::{ProgressDownload, Widget};
