use anyhow::Result;
use glint::{Context, Vec2};
use glint_app::{
    winit::{dpi::LogicalSize, window::WindowBuilder},
    Application, Event, Stage,
};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::star::StarRenderer;

mod star;

/// Side length of the stage's logical coordinate space.
const VIEW_BOX_SIZE: f32 = 200.;

struct App {
    renderer: Option<StarRenderer>,
    rng: fastrand::Rng,
}

impl App {
    fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            renderer: None,
            rng,
        }
    }
}

impl Application for App {
    fn init(&mut self, stage: &mut Stage, context: &mut Context) {
        stage.set_view_box(Vec2::splat(VIEW_BOX_SIZE));

        let mut renderer = StarRenderer::new(stage, context);
        if let Err(error) = renderer.draw(stage, context, StarRenderer::DEFAULT_ANGLE) {
            log::error!("initial draw failed: {}", error);
        }
        self.renderer = Some(renderer);
    }

    fn on_event(&mut self, stage: &mut Stage, context: &mut Context, event: &Event) {
        match event {
            Event::KeyDown(key) => {
                let renderer = match &mut self.renderer {
                    Some(renderer) => renderer,
                    None => return,
                };

                let angle = self.rng.f32();
                log::info!("{} key={:?}, code={}", angle, key.key, key.scancode);
                if let Err(error) = renderer.draw(stage, context, angle) {
                    log::error!("redraw failed: {}", error);
                }
            }
            Event::Click { position } => log::debug!("click at {}", position),
        }
    }
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    glint_app::run(
        |event_loop| {
            WindowBuilder::new()
                .with_title("keystar")
                .with_inner_size(LogicalSize::new(600., 600.))
                .build(event_loop)
                .expect("failed to create window")
        },
        App::new(),
    )
}

#[cfg(test)]
mod tests {
    use glint_app::{select_optimal_backend, KeyEvent};

    use super::*;

    fn headless() -> (Stage, Context) {
        (Stage::new(), Context::new(select_optimal_backend()))
    }

    #[test]
    fn key_press_triggers_one_redraw_with_a_sampled_angle() {
        let seed = 11;
        let (mut stage, mut context) = headless();
        let mut app = App::with_rng(fastrand::Rng::with_seed(seed));
        app.init(&mut stage, &mut context);
        let node = app.renderer.as_ref().unwrap().node();

        // The handler samples its angle from the injected generator.
        let expected_angle = fastrand::Rng::with_seed(seed).f32();
        assert!((0.0..1.0).contains(&expected_angle));

        app.on_event(
            &mut stage,
            &mut context,
            &Event::KeyDown(KeyEvent {
                key: None,
                scancode: 30,
            }),
        );

        // Drawing the sampled angle directly must produce identical pixels.
        let (mut reference_stage, mut reference_context) = headless();
        let mut reference = StarRenderer::new(&mut reference_stage, &mut reference_context);
        reference
            .draw(&mut reference_stage, &mut reference_context, expected_angle)
            .unwrap();

        let drawn = stage.image(node).unwrap().layer().to_argb();
        let expected = reference_stage
            .image(reference.node())
            .unwrap()
            .layer()
            .to_argb();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn redraws_mutate_the_same_node() {
        let (mut stage, mut context) = headless();
        let mut renderer = StarRenderer::new(&mut stage, &mut context);
        let node = renderer.node();

        for angle in [0., 0.3, 0.9] {
            renderer.draw(&mut stage, &mut context, angle).unwrap();
            assert_eq!(renderer.node(), node);
            assert!(stage.image(node).is_ok());
        }

        let argb = stage.image(node).unwrap().layer().to_argb();
        assert!(argb.iter().any(|&pixel| pixel != 0));
    }

    #[test]
    fn star_is_filled_light_gray_and_centered() {
        let (mut stage, mut context) = headless();
        let mut renderer = StarRenderer::new(&mut stage, &mut context);
        renderer
            .draw(&mut stage, &mut context, StarRenderer::DEFAULT_ANGLE)
            .unwrap();

        let layer = stage.image(renderer.node()).unwrap().layer();
        let argb = layer.to_argb();
        let width = layer.physical_width();
        let center = argb[(60 * width + 60) as usize];
        let corner = argb[(2 * width + 2) as usize];

        assert_eq!(center, 0xffeeeeee);
        assert_eq!(corner, 0);
    }
}
