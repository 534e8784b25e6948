//! The progress widget
//!
//! `ProgressDownload` owns the progress value, the current path set and the
//! animator. The host drives it through the [`Widget`] trait: resize when the
//! surface changes, tick once per frame, draw when a redraw was requested.

use std::time::Duration;

use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::animation::{duration_for, Animator, Easing};
use crate::config::WidgetConfig;
use crate::error::{ConfigError, WidgetError};
use crate::geometry::{self, BubbleShape, PathSet};
use crate::renderer::{Paints, Renderer};

/// A drawable, host-driven widget holding a single integer value.
pub trait Widget {
    /// The drawing surface changed size.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Draw the current state. Returns `false` if there was nothing to draw.
    fn on_draw(&self, renderer: &mut Renderer) -> bool;

    /// Set the displayed value, possibly animated.
    fn set_value(&mut self, value: i32) -> Result<(), WidgetError>;

    /// Advance animations by `dt`. Returns `true` if the value changed.
    fn tick(&mut self, dt: Duration) -> bool;
}

pub struct ProgressDownload {
    config: WidgetConfig,
    paints: Paints,
    progress: i32,
    /// Surface size as last reported by the host.
    size: Option<(u32, u32)>,
    paths: Option<PathSet>,
    animator: Animator,
    redraw_requested: bool,
}

impl ProgressDownload {
    pub fn new() -> Self {
        Self::from_valid_config(WidgetConfig::default())
    }

    /// Build with a custom config, rejecting values the geometry or the
    /// animator cannot use.
    pub fn with_config(config: WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WidgetConfig) -> Self {
        Self {
            paints: Paints::from_config(&config),
            config,
            progress: 0,
            size: None,
            paths: None,
            animator: Animator::new(),
            redraw_requested: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Last committed progress, possibly mid-transition.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Where the current transition is heading, or the progress when idle.
    pub fn target_progress(&self) -> i32 {
        self.animator.target().unwrap_or(self.progress)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Current paths; `None` until the first resize.
    pub fn paths(&self) -> Option<&PathSet> {
        self.paths.as_ref()
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Animate to `percentage`.
    pub fn set_percentage(&mut self, percentage: i32) -> Result<(), WidgetError> {
        self.request_transition(percentage)
    }

    /// Start a transition from the current progress to `target`, replacing
    /// any transition already running.
    pub fn request_transition(&mut self, target: i32) -> Result<(), WidgetError> {
        if !(0..=100).contains(&target) {
            warn!(value = target, "rejected percentage outside 0..=100");
            return Err(WidgetError::InvalidArgument { value: target });
        }
        let duration = duration_for(self.progress, target, &self.config);
        let easing = Easing::Decelerate {
            factor: self.config.decelerate_factor,
        };
        self.animator.start(self.progress, target, duration, easing);
        Ok(())
    }

    /// Commit a progress value and rebuild. Not validated; only the
    /// animator and resize path call this.
    fn commit_progress(&mut self, progress: i32) {
        self.progress = progress;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let Some((width, height)) = self.size else {
            return;
        };
        let padding = i64::from(self.config.padding);
        let track_end = (i64::from(width) - padding).max(0);
        self.paths = Some(geometry::build_paths(
            self.progress,
            track_end,
            i64::from(height),
            padding,
            self.bubble_shape(),
        ));
        self.redraw_requested = true;
    }

    fn bubble_shape(&self) -> BubbleShape {
        BubbleShape {
            width: self.config.bubble_width,
            height: self.config.bubble_height,
            corner_radius: self.config.corner_radius,
        }
    }

    fn bubble_offset(&self, paths: &PathSet) -> Vec2 {
        if self.config.bubble_follows_marker {
            paths.bubble_offset(self.config.stroke_width)
        } else {
            Vec2::ZERO
        }
    }
}

impl Default for ProgressDownload {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressDownload {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        debug!(
            "width and height measured are {} and {}",
            (i64::from(width) - i64::from(self.config.padding)).max(0),
            height
        );
        self.commit_progress(self.progress);
    }

    fn on_draw(&self, renderer: &mut Renderer) -> bool {
        let Some(paths) = &self.paths else {
            return false;
        };
        renderer.clear(self.config.background_color);
        renderer.draw_path_set(paths, &self.paints, self.bubble_offset(paths));
        true
    }

    fn set_value(&mut self, value: i32) -> Result<(), WidgetError> {
        self.set_percentage(value)
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let Some(value) = self.animator.tick(dt) else {
            return false;
        };
        if value == self.progress {
            return false;
        }
        trace!(progress = value, "tick");
        self.commit_progress(value);
        true
    }
}
