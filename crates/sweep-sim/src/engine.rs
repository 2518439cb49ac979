//! The `Engine` struct and its step function.

use sweep_behavior::occupant_step;
use sweep_core::{Cell, RandomSource, SimRng, SweepConfig, Tick};
use sweep_layout::{FloorPlan, Layout};
use sweep_patrol::{PatrolController, Responder};
use tracing::{info, trace};

use crate::{EngineBuilder, Event, EventDetail, SimObserver, SimResult, Snapshot};

/// The simulation engine.
///
/// Holds the immutable floor plan, the shared random stream, and every piece
/// of mutable agent state.  Only [`reset`][Self::reset] and
/// [`step`][Self::step] mutate it.
///
/// Construction always ends with a `reset`, so every accessor is valid on
/// any engine value.  Create via [`Engine::new`] or [`EngineBuilder`].
pub struct Engine<R: RandomSource = SimRng> {
    pub(crate) config:          SweepConfig,
    pub(crate) plan:            FloorPlan,
    pub(crate) rng:             R,
    pub(crate) controller:      PatrolController,
    pub(crate) tick:            Tick,
    pub(crate) responder:       Responder,
    pub(crate) occupants:       Vec<Cell>,
    pub(crate) events:          Vec<Event>,
    pub(crate) responder_track: Vec<Cell>,
    pub(crate) occupant_tracks: Vec<Vec<Cell>>,
}

impl Engine<SimRng> {
    /// Build an engine seeded from `config.seed`.
    ///
    /// Fails if the configuration is structurally invalid or a start cell
    /// is not walkable.
    pub fn new(config: SweepConfig) -> SimResult<Self> {
        EngineBuilder::new(config).build()
    }
}

impl<R: RandomSource> Engine<R> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Put every agent back at its start, clear flags and logs, and rewind
    /// the tick counter.  The random stream is NOT re-seeded.
    pub fn reset(&mut self) {
        self.tick = Tick::ZERO;
        self.responder = Responder::new(self.plan.exits()[0], self.plan.door_count());
        self.occupants = self.plan.occupant_starts().to_vec();
        self.events.clear();
        self.responder_track.clear();
        self.occupant_tracks = vec![Vec::new(); self.occupants.len()];
    }

    /// Advance the whole system by exactly one tick.
    pub fn step(&mut self) {
        self.tick = self.tick.next();
        let now = self.tick;

        // ── ① Responder: patrol transition ────────────────────────────────
        if let Some(outcome) = self.controller.advance(&mut self.responder, &self.plan, now) {
            if let Some(clear) = outcome.cleared {
                self.events.push(Event {
                    tick:   now,
                    detail: EventDetail::Clear { door: clear.door, room_cell: clear.room_cell },
                });
            }
        }

        // ── ② Occupants, ascending OccupantId ─────────────────────────────
        //
        // Order matters: it fixes which random draws each occupant consumes.
        let layout = self.plan.layout();
        let exits = self.plan.exits();
        let hesitation = self.config.hesitation;
        for pos in self.occupants.iter_mut() {
            *pos = occupant_step(layout, *pos, exits, hesitation, &mut self.rng).destination(*pos);
        }

        // ── ③ Trajectories ────────────────────────────────────────────────
        self.responder_track.push(self.responder.position);
        for (track, &pos) in self.occupant_tracks.iter_mut().zip(&self.occupants) {
            track.push(pos);
        }

        trace!(%now, responder = %self.responder.position, "step");
    }

    /// Step until the tick counter reaches `config.max_steps`, then call
    /// `on_sim_end`.  Returns immediately (still calling `on_sim_end`) if the
    /// budget is already used up.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let remaining = self.config.max_steps.saturating_sub(self.tick.0);
        self.run_ticks(remaining, observer);
        info!(
            tick    = self.tick.0,
            cleared = self.cleared_count(),
            doors   = self.plan.door_count(),
            events  = self.events.len(),
            "run finished",
        );
        observer.on_sim_end(&self.snapshot());
    }

    /// Run exactly `n` steps, ignoring the step budget.  Calls `on_event`
    /// and `on_step` but never `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let logged = self.events.len();
            self.step();
            for event in &self.events[logged..] {
                observer.on_event(event);
            }
            observer.on_step(&self.snapshot());
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn layout(&self) -> &Layout {
        self.plan.layout()
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn responder_position(&self) -> Cell {
        self.responder.position
    }

    /// Occupant positions, indexed by `OccupantId`.
    pub fn occupants(&self) -> &[Cell] {
        &self.occupants
    }

    /// Cleared flags in declaration (`doors`) order.
    pub fn cleared(&self) -> &[bool] {
        self.responder.cleared()
    }

    pub fn cleared_count(&self) -> usize {
        self.responder.cleared_count()
    }

    pub fn all_cleared(&self) -> bool {
        self.responder.all_cleared()
    }

    /// The patrol cell the responder is heading for (or dwelling on).
    pub fn patrol_target(&self) -> Option<Cell> {
        self.controller.target(&self.responder, &self.plan)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Responder positions after each step (index 0 is T1).
    pub fn responder_track(&self) -> &[Cell] {
        &self.responder_track
    }

    /// Per-occupant positions after each step, indexed by `OccupantId`.
    pub fn occupant_tracks(&self) -> &[Vec<Cell>] {
        &self.occupant_tracks
    }

    /// Borrow a read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick:            self.tick,
            plan:            &self.plan,
            responder:       self.responder.position,
            occupants:       &self.occupants,
            cleared:         self.responder.cleared(),
            events:          &self.events,
            responder_track: &self.responder_track,
            occupant_tracks: &self.occupant_tracks,
        }
    }
}
