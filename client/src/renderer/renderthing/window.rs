use std::sync::Arc;

use anyhow::{Context, anyhow};
use log::error;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub type DrawCallback = Box<dyn FnMut(RenderFrame) -> anyhow::Result<()>>;

pub struct RendererWindowConfig {
    pub title: String,
    /// Size of the pixel buffer, which is also the window's logical size.
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: DrawCallback,
}

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    failure: Option<anyhow::Error>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::from_fps(config.target_fps);

        Self {
            config,
            resumed_window: None,
            sleeper,
            failure: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn open(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width, self.config.height);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            // The buffer stays at board resolution; pixels scales it to the surface.
            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        window.request_redraw();

        Ok(ResumedWindow { window, pixels })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let ResumedWindow { window, pixels } = self
            .resumed_window
            .as_mut()
            .context("Redraw before the window was created")?;

        let next_frame =
            RenderFrame::new(self.config.width, self.config.height, pixels.frame_mut());
        (self.config.draw_callback)(next_frame)?;

        pixels
            .render()
            .map_err(|e| anyhow!("Rendering with pixels: {e}"))?;

        // FIXME: Sleeping here holds up the whole event loop, so resizes are handled late.
        self.sleeper.sleep();
        window.request_redraw();

        Ok(())
    }

    fn resize(&mut self, PhysicalSize { width, height }: PhysicalSize<u32>) -> anyhow::Result<()> {
        if width == 0 || height == 0 {
            // Minimized.
            return Ok(());
        }

        if let Some(ResumedWindow { window, pixels }) = &mut self.resumed_window {
            pixels
                .resize_surface(width, height)
                .map_err(|e| anyhow!("Resizing surface: {e}"))?;
            window.request_redraw();
        }

        Ok(())
    }
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.open(event_loop) {
            Ok(resumed_window) => self.resumed_window = Some(resumed_window),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let result = match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state.is_pressed() && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.fail(event_loop, e);
        }
    }
}
