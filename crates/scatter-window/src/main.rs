// File: crates/scatter-window/src/main.rs
// Summary: Windowed viewer that renders scatter-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Controls: hover a marker for its tooltip, click an axis title (or press X / Y) to switch fields, Esc quits.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{AxisSide, ChartConfig, Dataset, ScatterChart};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{CursorIcon, WindowBuilder};

mod viewer;

use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(name = "health-scatter-window", version, about = "Interactive smoking vs. age scatter plot")]
struct Args {
    /// Input CSV with state, abbr, smokes and age columns
    #[arg(default_value = "assets/data.csv")]
    input: PathBuf,

    /// TOML file overriding the default chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long)]
    theme: Option<String>,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    let path = resolve_path(&args.input);
    let dataset = Dataset::from_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(path = %path.display(), records = dataset.len(), "loaded dataset");

    let (w, h) = (config.width as u32, config.height as u32);
    let mut viewer = Viewer::new(ScatterChart::new(dataset, config)?);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Health Scatter")
        .with_inner_size(PhysicalSize::new(w, h))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    window.set_cursor_icon(if viewer.over_title(position.x, position.y) {
                        CursorIcon::Hand
                    } else {
                        CursorIcon::Default
                    });
                    if viewer.pointer_moved(position.x, position.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    if viewer.pointer_left() {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        match viewer.click(x, y) {
                            Ok(true) => {
                                let sel = viewer.chart().selection();
                                info!(x = %sel.x, y = %sel.y, "axis switched");
                                window.request_redraw();
                            }
                            Ok(false) => {}
                            Err(e) => error!("axis switch failed: {e}"),
                        }
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let side = match key {
                        VirtualKeyCode::Escape => {
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        VirtualKeyCode::X => AxisSide::Bottom,
                        VirtualKeyCode::Y => AxisSide::Left,
                        _ => return,
                    };
                    match viewer.cycle_axis(side, cursor) {
                        Ok(true) => window.request_redraw(),
                        Ok(false) => {}
                        Err(e) => error!("axis switch failed: {e}"),
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                debug!(hovered = ?viewer.hovered(), "redraw");
                if let Err(e) = present(&viewer, &mut surface) {
                    error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn present(viewer: &Viewer, surface: &mut softbuffer::Surface) -> Result<()> {
    let (pixels, w, h) = viewer.frame()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        anyhow::bail!("empty frame {w}x{h}");
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    let n = frame.len().min(pixels.len());
    if n < pixels.len() {
        warn!(have = frame.len(), want = pixels.len(), "surface smaller than frame; clipping");
    }
    frame[..n].copy_from_slice(&pixels[..n]);
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path(p: &Path) -> PathBuf {
    if p.exists() {
        return p.to_path_buf();
    }
    match swap_ext(p) {
        Some(alt) if alt.exists() => {
            info!(path = %alt.display(), "extension swapped between .csv/.cvs");
            alt
        }
        _ => p.to_path_buf(),
    }
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let swapped = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(swapped))
}
