use glint::{glam::vec2, Context, Vec2};
use winit::{
    event::{ElementState, Event as WinitEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::{select_optimal_backend, Event, KeyEvent, Presenter, Stage};

/// The program driven by [`run`].
pub trait Application {
    /// Called once, before the first frame. Populate the stage and
    /// perform the initial draw here.
    fn init(&mut self, stage: &mut Stage, context: &mut Context);

    /// Called for every input event. Listeners are never unregistered;
    /// events keep arriving for the life of the process.
    fn on_event(&mut self, stage: &mut Stage, context: &mut Context, event: &Event) {
        let _ = (stage, context, event);
    }
}

/// Runs the main event loop, compositing the stage to the window
/// after every batch of events.
pub fn run(
    build_window: impl FnOnce(&EventLoop<()>) -> Window,
    mut application: impl Application + 'static,
) -> ! {
    let event_loop = EventLoop::new();
    let window = build_window(&event_loop);

    let mut context = Context::new(select_optimal_backend());
    let mut stage = Stage::new();

    let mut presenter = Presenter::new(window, &context);

    let window = presenter.window();
    let mut root = context.create_layer(
        window.inner_size().width,
        window.inner_size().height,
        window.scale_factor() as f32,
    );

    application.init(&mut stage, &mut context);

    // Tracked because winit reports mouse presses without a position.
    let mut cursor_position = Vec2::ZERO;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            WinitEvent::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    log::debug!("window resized to {}x{}", new_size.width, new_size.height);
                    root = context.create_layer(
                        new_size.width,
                        new_size.height,
                        presenter.window().scale_factor() as f32,
                    );
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = position.to_logical::<f64>(presenter.window().scale_factor());
                    cursor_position = vec2(logical.x as f32, logical.y as f32);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    ..
                } => {
                    let position = stage.view_box_position(root.logical_size(), cursor_position);
                    application.on_event(&mut stage, &mut context, &Event::Click { position });
                }
                WindowEvent::KeyboardInput { input, .. }
                    if input.state == ElementState::Pressed =>
                {
                    let event = Event::KeyDown(KeyEvent {
                        key: input.virtual_keycode,
                        scancode: input.scancode,
                    });
                    application.on_event(&mut stage, &mut context, &event);
                }
                _ => {}
            },
            WinitEvent::MainEventsCleared => presenter.window().request_redraw(),
            WinitEvent::RedrawRequested(_) => {
                stage.render(&mut context, &mut root);
                presenter.present(&root);
            }
            _ => {}
        }
    });
}
