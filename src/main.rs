//! modest-raster demo - renders a large synthetic image through the
//! resolution-adaptive pipeline and reports per-frame timing and cache
//! behavior. Optionally dumps the final displayed frame as a PNG.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use image::{GrayImage, Luma};
use ndarray::Array2;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modest_raster::{
    imshow, Axes, DisplayedArray, Extent, HostRenderer, ImageOptions, RenderError, RenderStats,
};

// =============================================================================
// Configuration
// =============================================================================

/// Default synthetic image size (square).
const DEFAULT_SIZE: usize = 2000;

/// Default viewport size in device pixels (square).
const DEFAULT_VIEWPORT: u32 = 500;

/// modest-raster demo - resolution-adaptive rendering of a large image.
///
/// Builds a sin/cos interference pattern, attaches it to a set of axes,
/// and sweeps the viewport from the full image down to a deep zoom,
/// timing every redraw.
#[derive(Parser, Debug, Clone)]
#[command(name = "modest-raster")]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Number of rows in the synthetic image.
    #[arg(long, default_value_t = DEFAULT_SIZE, env = "MODEST_ROWS")]
    rows: usize,

    /// Number of columns in the synthetic image.
    #[arg(long, default_value_t = DEFAULT_SIZE, env = "MODEST_COLS")]
    cols: usize,

    /// Viewport width in device pixels.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT, env = "MODEST_VIEWPORT_WIDTH")]
    viewport_width: u32,

    /// Viewport height in device pixels.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT, env = "MODEST_VIEWPORT_HEIGHT")]
    viewport_height: u32,

    /// Number of zoom frames to render.
    #[arg(long, default_value_t = 6, env = "MODEST_FRAMES")]
    frames: u32,

    /// Write the final displayed frame to this PNG path.
    #[arg(short, long, env = "MODEST_OUTPUT")]
    output: Option<PathBuf>,

    /// Print per-frame statistics as JSON on stdout.
    #[arg(long, default_value_t = false)]
    stats_json: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Config {
    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("image size must be non-zero on both axes".to_string());
        }
        if self.frames == 0 {
            return Err("frames must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =============================================================================
// PNG renderer
// =============================================================================

/// Renderer that rasterizes the displayed sub-array to grayscale.
///
/// Keeps only the most recent frame; masked samples come out black.
struct PngRenderer {
    last: Option<GrayImage>,
}

impl PngRenderer {
    fn new() -> Self {
        Self { last: None }
    }
}

impl HostRenderer for PngRenderer {
    fn draw_image(
        &mut self,
        image: &DisplayedArray,
        _extent: &Extent,
        options: &ImageOptions,
    ) -> Result<(), RenderError> {
        let vmin = options.norm.vmin.unwrap_or(0.0);
        let vmax = options.norm.vmax.unwrap_or(1.0);
        let span = if vmax > vmin { vmax - vmin } else { 1.0 };

        let (rows, cols) = (image.rows(), image.cols());
        let mut out = GrayImage::new(cols as u32, rows as u32);
        for y in 0..rows {
            for x in 0..cols {
                let value = if image.mask()[[y, x]] {
                    0.0
                } else {
                    ((image.data()[[y, x]] - vmin) / span).clamp(0.0, 1.0)
                };
                out.put_pixel(x as u32, y as u32, Luma([(value * 255.0) as u8]));
            }
        }
        self.last = Some(out);
        Ok(())
    }
}

// =============================================================================
// Entry point
// =============================================================================

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Building {}x{} synthetic image...",
        config.rows, config.cols
    );
    let data = Array2::from_shape_fn((config.rows, config.cols), |(y, x)| {
        (x as f64 / 10.0).sin() * (y as f64 / 30.0).cos()
    })
    .into_dyn();

    let mut axes = Axes::new(config.viewport_width, config.viewport_height);
    if let Err(e) = imshow(&mut axes, data, ImageOptions::default().with_clim(-1.0, 1.0)) {
        error!("Failed to attach image: {}", e);
        return ExitCode::FAILURE;
    }

    let mut renderer = PngRenderer::new();
    let mut frames: Vec<(f64, RenderStats)> = Vec::new();

    // Zoom sweep: halve the visible window each frame, centered on the
    // image middle, then redraw the last viewport once more to show the
    // cache taking over.
    let (cx, cy) = (config.cols as f64 / 2.0, config.rows as f64 / 2.0);
    let mut half_x = cx;
    let mut half_y = cy;
    for frame in 0..config.frames {
        axes.set_xlim(cx - half_x, cx + half_x);
        axes.set_ylim(cy + half_y, cy - half_y);

        match timed_draw(&mut axes, &mut renderer) {
            Ok((ms, stats)) => {
                info!(
                    "frame {}: {:7.2} ms  {}x{} samples, stride ({}, {}), cache_hit={}",
                    frame, ms, stats.rows, stats.cols, stats.sy, stats.sx, stats.cache_hit
                );
                frames.push((ms, stats));
            }
            Err(e) => {
                error!("Render failed on frame {}: {}", frame, e);
                return ExitCode::FAILURE;
            }
        }

        half_x /= 2.0;
        half_y /= 2.0;
    }

    match timed_draw(&mut axes, &mut renderer) {
        Ok((ms, stats)) => {
            info!(
                "replay : {:7.2} ms  cache_hit={}",
                ms, stats.cache_hit
            );
            frames.push((ms, stats));
        }
        Err(e) => {
            error!("Render failed on replay frame: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if let Some(ref path) = config.output {
        match &renderer.last {
            Some(frame) => {
                if let Err(e) = frame.save(path) {
                    error!("Failed to write {}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
                info!("Wrote final frame to {}", path.display());
            }
            None => {
                error!("No frame rendered, nothing to write");
                return ExitCode::FAILURE;
            }
        }
    }

    if config.stats_json {
        let entries: Vec<serde_json::Value> = frames
            .iter()
            .map(|(ms, stats)| {
                serde_json::json!({
                    "millis": ms,
                    "stats": stats,
                })
            })
            .collect();
        let report = serde_json::json!({
            "image": { "rows": config.rows, "cols": config.cols },
            "viewport": {
                "width": config.viewport_width,
                "height": config.viewport_height,
            },
            "frames": entries,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize stats: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Draw the axes once and report wall time in milliseconds.
fn timed_draw(
    axes: &mut Axes,
    renderer: &mut PngRenderer,
) -> Result<(f64, RenderStats), RenderError> {
    let start = Instant::now();
    let stats = axes.draw(renderer)?;
    let ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((ms, stats[0]))
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "modest_raster=debug"
    } else {
        "modest_raster=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
