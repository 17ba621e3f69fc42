use crate::systems::apply_pointer;
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Controller, Driver,
    DriverAction, DriverState, Events, Field, Frame, InputEvent, InputQueue, Paddle, Params,
    Presenter, Score,
};
use glam::Vec2;
use hecs::World;

/// A complete game: entities, pending input and driver state.
///
/// The host calls [`Simulation::frame`] once per display refresh and
/// reschedules itself; the simulation never stops on its own.
pub struct Simulation {
    world: World,
    config: Config,
    field: Field,
    events: Events,
    input_queue: InputQueue,
    driver: Driver,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::spawn(config))
    }

    fn spawn(config: Config) -> Self {
        let mut world = World::new();
        let field = config.field();

        // Create paddles, vertically centred
        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, &config, Controller::Human, spawn_y);
        create_paddle(&mut world, &config, Controller::Heuristic, spawn_y);

        // Create ball
        let (vx, vy) = Params::BALL_VELOCITY_INITIAL;
        create_ball(&mut world, &config, field.ball_spawn(), Vec2::new(vx, vy));

        Self {
            world,
            config,
            field,
            events: Events::new(),
            input_queue: InputQueue::new(),
            driver: Driver::new(),
            ticks: 0,
        }
    }

    /// Queue input for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input_queue.push(event);
    }

    /// One display refresh: apply queued input, tick unless paused, present.
    pub fn frame<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        self.apply_inputs();
        self.tick();
        presenter.present(&self.snapshot());
    }

    /// Run the physics step once, unless paused. Returns whether it ran.
    pub fn tick(&mut self) -> bool {
        self.events.clear();

        if !self.driver.transition(DriverAction::Tick).success() {
            return false;
        }

        step(&mut self.world, &self.field, &mut self.events);
        self.ticks += 1;

        if self.events.scored() {
            let score = self.scores();
            log::debug!(
                "Tick {}: score {} - {}",
                self.ticks,
                score.human,
                score.heuristic
            );
        }
        true
    }

    fn apply_inputs(&mut self) {
        for input in self.input_queue.drain() {
            match input {
                InputEvent::PointerMove { y } => {
                    if !self.driver.is_paused() {
                        apply_pointer(&mut self.world, y);
                    }
                }
                InputEvent::TogglePause => {
                    if !self.driver.transition(DriverAction::TogglePause).success() {
                        log::debug!("Ignoring pause toggle before the first tick");
                    }
                }
            }
        }
    }

    /// Copy of the current state for presentation
    pub fn snapshot(&self) -> Frame {
        // Start from spawn geometry; entities are never despawned so every
        // field is overwritten below
        let spawn_y = self.config.paddle_spawn_y();
        let mut human = Paddle::new(
            Controller::Human,
            self.config.paddle_x(Controller::Human),
            spawn_y,
            self.config.paddle_width,
            self.config.paddle_height,
        );
        let mut heuristic = Paddle {
            controller: Controller::Heuristic,
            x: self.config.paddle_x(Controller::Heuristic),
            ..human
        };
        let mut ball = Ball::new(
            self.field.ball_spawn(),
            Vec2::ZERO,
            self.config.ball_radius,
            Params::BALL_SPEED_BASE,
        );

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.controller {
                Controller::Human => human = *paddle,
                Controller::Heuristic => heuristic = *paddle,
            }
        }
        if let Some((_e, b)) = self.world.query::<&Ball>().iter().next() {
            ball = *b;
        }

        Frame {
            field: self.field,
            human,
            heuristic,
            ball,
            paused: self.driver.is_paused(),
        }
    }

    pub fn scores(&self) -> Score {
        self.snapshot().scores()
    }

    pub fn ball(&self) -> Ball {
        self.snapshot().ball
    }

    pub fn paddle(&self, controller: Controller) -> Paddle {
        let frame = self.snapshot();
        match controller {
            Controller::Human => frame.human,
            Controller::Heuristic => frame.heuristic,
        }
    }

    pub fn state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn is_paused(&self) -> bool {
        self.driver.is_paused()
    }

    pub fn is_started(&self) -> bool {
        self.driver.is_started()
    }

    /// Events from the most recent frame (empty if it did not tick)
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of physics steps run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Direct world access for hosts and tests that set up positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::spawn(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set_ball(sim: &mut Simulation, pos: Vec2, vel: Vec2) {
        for (_e, ball) in sim.world_mut().query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_initial_layout() {
        let sim = Simulation::default();
        let frame = sim.snapshot();

        assert_eq!(frame.human.x, 0.0);
        assert_eq!(frame.human.y, 150.0);
        assert_eq!(frame.heuristic.x, 590.0);
        assert_eq!(frame.heuristic.y, 150.0);
        assert_eq!(frame.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(frame.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(frame.ball.speed, 5.0);
        assert_eq!(sim.scores(), Score::new());
        assert_eq!(sim.state(), DriverState::Idle);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Simulation::new(Config::for_surface(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_first_frame_starts_and_presents() {
        let mut sim = Simulation::default();
        let mut frames = Vec::new();

        sim.frame(&mut |f: &Frame| frames.push(*f));

        assert!(sim.is_started());
        assert_eq!(sim.ticks(), 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].ball.pos, Vec2::new(305.0, 205.0));
    }

    #[test]
    fn test_toggle_before_first_tick_is_ignored() {
        let mut sim = Simulation::default();
        sim.push_input(InputEvent::TogglePause);

        sim.frame(&mut |_: &Frame| {});

        assert_eq!(sim.state(), DriverState::Running);
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn test_toggle_takes_effect_for_the_same_frame() {
        let mut sim = Simulation::default();
        sim.frame(&mut |_: &Frame| {});
        let before = sim.snapshot();

        sim.push_input(InputEvent::TogglePause);
        let mut presented = None;
        sim.frame(&mut |f: &Frame| presented = Some(*f));

        assert_eq!(sim.ticks(), 1, "Paused frame must not tick");
        let presented = presented.expect("paused frames still present");
        assert!(presented.paused);
        assert_eq!(presented.ball, before.ball);
    }

    #[test]
    fn test_pointer_ignored_while_paused() {
        let mut sim = Simulation::default();
        sim.frame(&mut |_: &Frame| {});
        sim.push_input(InputEvent::TogglePause);
        sim.push_input(InputEvent::PointerMove { y: 50.0 });

        sim.frame(&mut |_: &Frame| {});

        assert_eq!(sim.paddle(Controller::Human).y, 150.0);
    }

    #[test]
    fn test_pointer_applies_before_tick() {
        let mut sim = Simulation::default();
        sim.push_input(InputEvent::PointerMove { y: 300.0 });

        sim.frame(&mut |_: &Frame| {});

        assert_eq!(sim.paddle(Controller::Human).y, 250.0);
    }

    #[test]
    fn test_resume_continues_ticking() {
        let mut sim = Simulation::default();
        sim.frame(&mut |_: &Frame| {});
        sim.push_input(InputEvent::TogglePause);
        sim.frame(&mut |_: &Frame| {});
        sim.push_input(InputEvent::TogglePause);
        sim.frame(&mut |_: &Frame| {});

        assert_eq!(sim.state(), DriverState::Running);
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn test_tick_reports_scoring_events() {
        let mut sim = Simulation::default();
        set_ball(&mut sim, Vec2::new(585.0, 30.0), Vec2::new(10.0, 0.0));

        assert!(sim.tick());

        assert!(sim.events().human_scored);
        assert_eq!(sim.scores().human, 1);
    }

    proptest! {
        #[test]
        fn prop_paused_frames_change_nothing(
            frames_before in 1usize..60,
            paused_frames in 1usize..30,
            pointer in proptest::collection::vec(-100.0f32..500.0, 0..10),
        ) {
            let mut sim = Simulation::default();
            for _ in 0..frames_before {
                sim.frame(&mut |_: &Frame| {});
            }
            sim.push_input(InputEvent::TogglePause);
            sim.frame(&mut |_: &Frame| {});
            let frozen = sim.snapshot();

            for _ in 0..paused_frames {
                for y in &pointer {
                    sim.push_input(InputEvent::PointerMove { y: *y });
                }
                sim.frame(&mut |_: &Frame| {});
                prop_assert_eq!(sim.snapshot(), frozen);
            }
        }
    }
}
