//! Simulation observer trait for live display and data collection.

use crate::{Event, Snapshot};

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] and
/// [`Engine::run_ticks`][crate::Engine::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only ever see settled
/// state; they cannot mutate the engine.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_event(&mut self, event: &Event) {
///         println!("{}: {}", event.tick, event.kind());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once for every event logged during a step, before `on_step`.
    fn on_event(&mut self, _event: &Event) {}

    /// Called after every step with the post-step state.
    fn on_step(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called once when [`Engine::run`][crate::Engine::run] reaches the step
    /// budget.
    fn on_sim_end(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forward every callback to both observers, `A` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_event(&mut self, event: &Event) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        self.0.on_step(snapshot);
        self.1.on_step(snapshot);
    }

    fn on_sim_end(&mut self, snapshot: &Snapshot<'_>) {
        self.0.on_sim_end(snapshot);
        self.1.on_sim_end(snapshot);
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }

    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        (**self).on_step(snapshot);
    }

    fn on_sim_end(&mut self, snapshot: &Snapshot<'_>) {
        (**self).on_sim_end(snapshot);
    }
}
