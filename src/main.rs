use torus_life::config::SimConfig;
use torus_life::controller::Simulation;
use torus_life::error::ShellError;
use torus_life::input::{self, PointerState};
use torus_life::state::State;
use torus_life::ticker::Ticker;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};
use std::sync::Arc;
use std::time::Instant;

async fn run(event_loop: EventLoop<()>, window: Arc<Window>, config: SimConfig) -> Result<(), ShellError> {
    let mut state = State::new(window, &config).await?;
    let mut ticker = Ticker::new(config.step_interval, Instant::now());
    let mut simulation = Simulation::new(config);
    let mut pointer = PointerState::default();

    event_loop.run(move |event, window_target| {
        match event {
            Event::WindowEvent { window_id, ref event }
                if window_id == state.window.id() =>
            {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // The overlay has no widgets, so pointer input normally reaches the controller
                let consumed_by_egui = response.consumed && !matches!(event, WindowEvent::Resized(_));
                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        state.resize(state.window.inner_size());
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input::handle_cursor_move(&mut pointer, *position, state.window.scale_factor());
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input::handle_cursor_left(&mut pointer);
                    }
                    WindowEvent::MouseInput { state: element_state, button, .. } => {
                        // Redraw right away so edits don't wait for the next tick
                        if input::handle_mouse_input(&pointer, &mut simulation, *button, *element_state).is_some() {
                            state.window.request_redraw();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        match state.render(&simulation) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of GPU memory, exiting.");
                                window_target.exit();
                            }
                            Err(e) => {
                                // Lost was already reconfigured inside render()
                                log::warn!("Skipping frame due to surface {:?}", e);
                                state.window.request_redraw();
                            }
                        }
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                if ticker.poll(Instant::now()) {
                    simulation.tick();
                    state.window.request_redraw();
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(ticker.deadline()));
            }
            _ => ()
        }
    })?;

    Ok(())
}

fn main() -> Result<(), ShellError> {
    env_logger::init();
    let config = SimConfig::default();
    let event_loop = EventLoop::new()?;

    let surface_size = config.surface_size() as f64;
    let window = Arc::new(winit::window::WindowBuilder::new()
        .with_title(config.window_title)
        .with_inner_size(winit::dpi::LogicalSize::new(surface_size, surface_size))
        .with_resizable(false)
        .build(&event_loop)?);

    pollster::block_on(run(event_loop, window, config))
}
