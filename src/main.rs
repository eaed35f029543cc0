use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ocean_scene::camera::PerspectiveCamera;
use ocean_scene::cli::Cli;
use ocean_scene::config::SceneConfig;
use ocean_scene::core::{resize_viewport, FrameDriver, ViewportSize, WinitController};
use ocean_scene::error::SceneError;
use ocean_scene::frame::FrameClock;
use ocean_scene::renderer::SceneRenderer;
use ocean_scene::scene::Scene;
use ocean_scene::xr::{self, HeadsetSession};

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: PerspectiveCamera,
    scene: Scene,
    input: WinitController,
    driver: FrameDriver,
    clock: FrameClock,
    config: SceneConfig,
    cli: Cli,
}

impl App {
    fn new(config: SceneConfig, cli: Cli) -> Self {
        let aspect = cli.width as f32 / cli.height.max(1) as f32;
        Self {
            window: None,
            renderer: None,
            camera: PerspectiveCamera::from_config(&config.camera, aspect),
            scene: Scene::from_config(&config),
            input: WinitController::new(),
            driver: FrameDriver::new(&config.movement, &config.frame),
            clock: FrameClock::new(),
            config,
            cli,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            resize_viewport(ViewportSize::new(width, height), &mut self.camera, renderer);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let frame = self.clock.next_frame();
        log::trace!("frame {} dt {:.4}", frame.number, frame.delta);
        renderer.set_fps(self.clock.fps());

        match self
            .driver
            .tick(&self.input, &mut self.camera, &mut self.scene, renderer)
        {
            Ok(()) => {}
            Err(SceneError::Surface(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated))) => {
                warn!("Surface {:?}, reconfiguring", e);
                renderer.reconfigure();
            }
            Err(SceneError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Ocean")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut headset = HeadsetSession::new(xr::probe(), self.config.headset.ipd);
        if self.cli.vr {
            if headset.support().is_available() {
                headset.toggle();
            } else {
                warn!("--vr requested but no headset runtime is available");
            }
        }

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.scene,
            headset,
            !self.cli.no_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.resize(size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(renderer) = &mut self.renderer {
            if renderer.handle_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                self.input.process_event(&event);
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.movement.base_speed = speed;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli);

    info!("Ocean - Controls: WASD to move, ShiftLeft to run, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
