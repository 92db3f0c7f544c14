//! Game loop lifecycle
//!
//! `GameLoop` owns the game state and drives it one frame at a time. The
//! host supplies three collaborators:
//! - a `FrameScheduler` that arranges for `on_frame` to be called once on
//!   the next display refresh (`requestAnimationFrame` in the browser)
//! - a `Renderer` for drawing
//! - a `Hud` for the DOM overlay, buttons and messages
//!
//! At most one frame is ever pending: `frame_scheduled` is set when a frame
//! is requested and cleared when it runs, and nothing requests another
//! while it is set.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, InputState, Key, MoveIntent, Side, step};
use crate::tuning::Tuning;

/// Host hook for scheduling the next frame callback
pub trait FrameScheduler {
    /// Arrange for `GameLoop::on_frame` to run once on the next frame
    fn request_frame(&mut self);
}

/// Presentation outside the court: overlay, buttons, messages
pub trait Hud {
    /// A new match began; hide any end-of-game overlay
    fn match_started(&mut self);
    /// Pause state flipped
    fn pause_changed(&mut self, paused: bool);
    /// A side won; show the end-of-game overlay with a restart control
    fn match_over(&mut self, winner: Side, message: &str);
}

/// The simulation loop: state machine plus frame bookkeeping
pub struct GameLoop {
    tuning: Tuning,
    settings: Settings,
    state: GameState,
    input: InputState,
    rng: Pcg32,
    frame_scheduled: bool,
}

impl GameLoop {
    /// Build an idle loop. `seed` only feeds serve directions.
    pub fn new(tuning: Tuning, settings: Settings, seed: u64) -> Self {
        let state = GameState::idle(&tuning);
        Self {
            tuning,
            settings,
            state,
            input: InputState::new(),
            rng: Pcg32::seed_from_u64(seed),
            frame_scheduled: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// True while a frame callback is pending
    pub fn is_frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    /// Begin a fresh match from any phase
    pub fn start(&mut self, hud: &mut dyn Hud, scheduler: &mut dyn FrameScheduler) {
        self.state = GameState::new_match(&self.tuning, &mut self.rng);
        // A touch from the previous match must not move the new paddles
        self.input.discard_pointer_target();
        log::info!(
            "Match started, serve velocity ({}, {})",
            self.state.ball_vel.x,
            self.state.ball_vel.y
        );
        hud.match_started();
        hud.pause_changed(false);
        self.ensure_scheduled(scheduler);
    }

    /// Same full reinitialization as `start`
    pub fn restart(&mut self, hud: &mut dyn Hud, scheduler: &mut dyn FrameScheduler) {
        self.start(hud, scheduler);
    }

    /// Flip between Running and Paused. No-op in any other phase.
    pub fn toggle_pause(&mut self, hud: &mut dyn Hud, scheduler: &mut dyn FrameScheduler) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            phase => {
                log::debug!("Pause toggle ignored in {:?}", phase);
                return;
            }
        };
        let paused = self.state.is_paused();
        log::info!("{}", if paused { "Paused" } else { "Resumed" });
        hud.pause_changed(paused);

        // A paused frame still renders the indicator, so always make sure
        // one more frame runs after the flip.
        self.ensure_scheduled(scheduler);
    }

    /// Teardown: any pending frame becomes a no-op
    pub fn stop(&mut self) {
        if self.state.phase != GamePhase::Idle {
            log::info!("Game loop stopped");
        }
        self.state.phase = GamePhase::Idle;
        self.input.clear();
    }

    /// On-screen direction control pressed.
    ///
    /// Accepted in every phase: `pending_move_intent` mirrors the controls,
    /// so a release while paused is not lost. Only a running step reads it.
    pub fn start_move(&mut self, intent: MoveIntent) {
        self.state.pending_move_intent = intent;
    }

    /// On-screen direction control released
    pub fn stop_move(&mut self) {
        self.state.pending_move_intent = MoveIntent::Neutral;
    }

    /// Pointer/touch at `court_y`; the paddle center follows it on the next step
    pub fn pointer_moved(&mut self, court_y: f32) {
        let clamped = court_y.clamp(0.0, self.tuning.court_height);
        self.input.set_pointer_target(clamped);
    }

    /// Key pressed. Space toggles pause on the initial press.
    pub fn key_down(&mut self, key: Key, hud: &mut dyn Hud, scheduler: &mut dyn FrameScheduler) {
        let fresh = self.input.press(key);
        if key == Key::Space && fresh {
            self.toggle_pause(hud, scheduler);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Forget held keys and pending pointer input (window blur)
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Frame callback: step if running, draw, and keep the chain alive
    pub fn on_frame(
        &mut self,
        renderer: &mut dyn Renderer,
        hud: &mut dyn Hud,
        scheduler: &mut dyn FrameScheduler,
    ) {
        self.frame_scheduled = false;

        match self.state.phase {
            GamePhase::Idle | GamePhase::Finished => {}
            GamePhase::Paused => {
                draw_frame(&self.state, &self.tuning, &self.settings, renderer);
            }
            GamePhase::Running => {
                let input = self.input.snapshot();
                let events = step(&mut self.state, &input, &self.tuning, &mut self.rng);
                for event in events {
                    self.handle_event(event, hud);
                }
                draw_frame(&self.state, &self.tuning, &self.settings, renderer);

                if self.state.phase == GamePhase::Running {
                    self.ensure_scheduled(scheduler);
                }
            }
        }
    }

    fn handle_event(&mut self, event: GameEvent, hud: &mut dyn Hud) {
        match event {
            GameEvent::WallBounce => log::debug!("Wall bounce at {:?}", self.state.ball_pos),
            GameEvent::PaddleHit(side) => log::debug!("{:?} paddle hit", side),
            GameEvent::Scored(side) => log::info!(
                "{:?} scored ({} - {})",
                side,
                self.state.player_score,
                self.state.opponent_score
            ),
            GameEvent::MatchOver(winner) => {
                let message = self.settings.winner_message(winner);
                log::info!("Match over: {}", message);
                hud.match_over(winner, &message);
            }
        }
    }

    fn ensure_scheduled(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.frame_scheduled {
            self.frame_scheduled = true;
            scheduler.request_frame();
        }
    }
}
