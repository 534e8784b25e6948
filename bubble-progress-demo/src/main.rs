//! Bubble Progress demo host
//!
//! Drives a `ProgressDownload` widget through a list of target percentages
//! without a window: resize once, then run a frame loop per target and write
//! the frames as PNG files.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bubble_progress::{ProgressDownload, Renderer, Widget, WidgetConfig};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bubble-progress-demo", about = "Render bubble-progress animations to PNG frames")]
struct Args {
    /// Target percentages, animated in order.
    #[arg(required = true, allow_negative_numbers = true)]
    targets: Vec<i32>,

    #[arg(long, default_value_t = 600)]
    width: u32,

    #[arg(long, default_value_t = 200)]
    height: u32,

    /// JSON widget config.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output directory for frames.
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Write every n-th frame (the last frame of each target is always written).
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Pace frames in real time instead of rendering as fast as possible.
    #[arg(long)]
    realtime: bool,

    #[arg(short, long)]
    verbose: bool,
}

/// Frame counter and output naming.
struct FrameSink {
    dir: PathBuf,
    every: u32,
    index: u32,
    written: u32,
}

impl FrameSink {
    fn new(dir: PathBuf, every: u32) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        Ok(Self {
            dir,
            every: every.max(1),
            index: 0,
            written: 0,
        })
    }

    fn frame(&mut self, renderer: &Renderer, force: bool) -> Result<()> {
        if force || self.index % self.every == 0 {
            let path = self.dir.join(format!("frame_{:05}.png", self.index));
            renderer
                .save_png(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            self.written += 1;
        }
        self.index += 1;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WidgetConfig::default(),
    };

    let mut renderer = Renderer::new(args.width, args.height)?;
    let mut widget = ProgressDownload::with_config(config)?;
    let mut sink = FrameSink::new(args.out.clone(), args.every)?;

    widget.on_resize(args.width, args.height);
    info!("Surface: {}x{}", args.width, args.height);
    if widget.take_redraw_request() && widget.on_draw(&mut renderer) {
        sink.frame(&renderer, true)?;
    }

    let fps = args.fps.max(1);
    let frame_duration = Duration::from_secs_f64(1.0 / f64::from(fps));

    for &target in &args.targets {
        if let Err(e) = widget.set_percentage(target) {
            warn!("Skipping target: {}", e);
            continue;
        }
        info!("Animating {} -> {}", widget.progress(), target);

        let started = instant::Instant::now();
        let mut last_frame = instant::Instant::now();
        let mut frames = 0u32;

        while widget.is_animating() {
            let now = instant::Instant::now();
            let dt = if args.realtime {
                now.duration_since(last_frame)
            } else {
                frame_duration
            };
            last_frame = now;

            widget.tick(dt);

            if widget.take_redraw_request() && widget.on_draw(&mut renderer) {
                sink.frame(&renderer, !widget.is_animating())?;
                frames += 1;
            }

            // Frame rate limiting
            if args.realtime {
                let elapsed = now.elapsed();
                if elapsed < frame_duration {
                    std::thread::sleep(frame_duration - elapsed);
                }
            }
        }

        info!(
            "Reached {} in {} frames ({:.1?} wall)",
            widget.progress(),
            frames,
            started.elapsed()
        );
    }

    info!("Wrote {} frames to {}", sink.written, args.out.display());
    Ok(())
}
