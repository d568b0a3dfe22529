use glutin::config::{Config as SurfaceConfig, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use game_core::{Config, GameState, Score, Side};

use crate::clock::FrameClock;
use crate::gfx::ShaderError;
use crate::input::KeyState;
use crate::renderer::Renderer;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create a display: {0}")]
    Display(String),
    #[error("display created no window")]
    NoWindow,
    #[error("window has zero size")]
    ZeroSize,
    #[error(transparent)]
    Context(#[from] glutin::error::Error),
    #[error("shader setup failed: {0}")]
    Shader(#[from] ShaderError),
}

pub struct App {
    event_loop: EventLoop<()>,
    game: GameState,
    // GL objects go before the context they live in
    renderer: Renderer,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl App {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                config.court_width as u32,
                config.court_height as u32,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_resizable(true)
            .with_title(title(&Score::new()));
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, pick_config)
            .map_err(|e| AppError::Display(e.to_string()))?;
        let window = window.ok_or(AppError::NoWindow)?;

        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        if let Err(e) = gl_window
            .surface
            .set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("vsync unavailable: {e}");
        }

        let game = GameState::new(config);
        let renderer = Renderer::new(&game)?;

        let size = gl_window.window.inner_size();
        renderer.resize(size.width, size.height);

        log::info!("window {}x{} ready", size.width, size.height);

        Ok(Self {
            event_loop,
            game,
            renderer,
            gl_context,
            gl_window,
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            mut game,
            renderer,
            gl_context,
            gl_window,
        } = self;

        let mut keys = KeyState::new();
        let mut clock = FrameClock::new();
        let mut shown_score = game.score;

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::MainEventsCleared => {
                    let dt = clock.tick();
                    for side in Side::BOTH {
                        game.set_input(side, keys.input(side));
                    }
                    game.update(dt);

                    if game.score != shown_score {
                        shown_score = game.score;
                        gl_window.window.set_title(&title(&shown_score));
                    }

                    gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    if let Err(e) = renderer.draw(&game) {
                        log::error!("draw failed: {e}");
                        control_flow.set_exit();
                        return;
                    }
                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        log::error!("swap failed: {e}");
                        control_flow.set_exit();
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, w, h);
                            renderer.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        let Some(key) = input.virtual_keycode else {
                            return;
                        };
                        let pressed = input.state == ElementState::Pressed;
                        match key {
                            VirtualKeyCode::Escape if pressed => control_flow.set_exit(),
                            VirtualKeyCode::R if pressed && game.winner().is_some() => {
                                log::info!("restarting match");
                                game.restart();
                                clock.reset();
                            }
                            _ => {
                                keys.handle_key(key, pressed);
                            }
                        }
                    }
                    WindowEvent::Focused(false) => keys.release_all(),
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    _ => (),
                },
                _ => (),
            }
        })
    }
}

/// Most multisampled config. glutin turns an empty match into a build error
/// before the picker runs, so there is always at least one candidate.
fn pick_config(configs: Box<dyn Iterator<Item = SurfaceConfig> + '_>) -> SurfaceConfig {
    configs
        .max_by_key(|config| config.num_samples())
        .expect("glutin passed an empty config list")
}

fn title(score: &Score) -> String {
    format!("Pong  {} : {}", score.left, score.right)
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &SurfaceConfig) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let (width, height) = NonZeroU32::new(width)
            .zip(NonZeroU32::new(height))
            .ok_or(AppError::ZeroSize)?;
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window.raw_window_handle(),
            width,
            height,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}
