//! Desktop window that stands in for the panel.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::config::KgfxConfig;
use crate::error::Result;
use crate::{DrawCommand, Kgfx};

/// Shows a [`Kgfx`] screen in a window, scaled up by an integer factor.
#[derive(Debug, Clone)]
pub struct Preview {
    title: String,
    scale: u32,
    max_framerate: f64,
}

impl Preview {
    pub fn from_config(config: &KgfxConfig) -> Self {
        Self {
            title: config.window_title.clone(),
            scale: config.window_scale.max(1),
            max_framerate: config.max_framerate,
        }
    }

    /// Shows the current screen until the window is closed.
    pub fn show(self, kgfx: Kgfx) -> Result<()> {
        self.run_window(kgfx, None)
    }

    /// Like [`Preview::show`], replaying every command received before each frame.
    pub fn show_with_commands(self, kgfx: Kgfx, receiver: Receiver<DrawCommand>) -> Result<()> {
        self.run_window(kgfx, Some(receiver))
    }

    fn run_window(self, mut kgfx: Kgfx, receiver: Option<Receiver<DrawCommand>>) -> Result<()> {
        let screen_width = kgfx.screen().width() as u32;
        let screen_height = kgfx.screen().height() as u32;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(
                f64::from(screen_width * self.scale),
                f64::from(screen_height * self.scale),
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(screen_width, screen_height, surface_texture)?;

        let frame_duration = Duration::from_secs_f64(1.0 / self.max_framerate.max(1.0));
        let mut last_frame = Instant::now();

        log::info!(
            "preview window {}x{} at {}x scale",
            screen_width,
            screen_height,
            self.scale
        );

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("could not resize surface: {err}");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(ref receiver) = receiver {
                            while let Ok(command) = receiver.try_recv() {
                                if let Err(err) = kgfx.apply(command) {
                                    log::warn!("draw command failed: {err}");
                                }
                            }
                        }

                        kgfx.screen().rgba_into(pixels.frame_mut());
                        if let Err(err) = pixels.render() {
                            log::error!("render failed: {err}");
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
