//! Fluent builder for constructing an [`Engine`].

use sweep_core::{RandomSource, SimRng, SweepConfig};
use sweep_layout::FloorPlan;
use sweep_patrol::{PatrolController, Responder};
use tracing::info;

use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine<R>`].
///
/// # Inputs
///
/// | Method      | Default                              |
/// |-------------|--------------------------------------|
/// | `new(cfg)`  | required                             |
/// | `.rng(r)`   | `SimRng::new(cfg.seed)`              |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(config).build()?;
/// let scripted = EngineBuilder::new(config).rng(my_source).build()?;
/// ```
pub struct EngineBuilder<R: RandomSource = SimRng> {
    config: SweepConfig,
    rng:    R,
}

impl EngineBuilder<SimRng> {
    pub fn new(config: SweepConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng }
    }
}

impl<R: RandomSource> EngineBuilder<R> {
    /// Replace the random stream.  `config.seed` is then ignored.
    pub fn rng<S: RandomSource>(self, rng: S) -> EngineBuilder<S> {
        EngineBuilder { config: self.config, rng }
    }

    /// Validate the configuration, generate the floor plan, check that every
    /// start cell is walkable, and return a reset engine.
    pub fn build(self) -> SimResult<Engine<R>> {
        self.config.validate()?;
        let plan = FloorPlan::build(&self.config);
        let layout = plan.layout();

        let entry = plan.exits()[0];
        if !layout.is_walkable(entry) {
            return Err(SimError::UnreachableStart { what: "responder", cell: entry });
        }
        if let Some(&cell) = plan.occupant_starts().iter().find(|&&c| !layout.is_walkable(c)) {
            return Err(SimError::UnreachableStart { what: "occupant", cell });
        }

        info!(
            height    = self.config.height,
            width     = self.config.width,
            doors     = plan.door_count(),
            occupants = self.config.occupant_count,
            seed      = self.config.seed,
            "engine built",
        );

        let responder = Responder::new(entry, plan.door_count());
        let mut engine = Engine {
            controller:      PatrolController::new(self.config.dwell_threshold),
            config:          self.config,
            plan,
            rng:             self.rng,
            tick:            Default::default(),
            responder,
            occupants:       Vec::new(),
            events:          Vec::new(),
            responder_track: Vec::new(),
            occupant_tracks: Vec::new(),
        };
        engine.reset();
        Ok(engine)
    }
}
