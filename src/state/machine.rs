use defmt_or_log as log;

use super::{Context, StateHandle, StateRegistry};
use crate::config::LOGO_DWELL_MS;

/// Driver loop core: owns the registry and the handle of the active
/// screen, and swaps it between ticks.
pub struct StateMachine {
    registry: StateRegistry,
    active: StateHandle,
}

impl StateMachine {
    pub fn new(registry: StateRegistry, start: StateHandle) -> Self {
        Self { registry, active: start }
    }

    /// Fresh registry, starting on the logo splash.
    pub fn boot() -> Self {
        let mut registry = StateRegistry::new();
        let start = registry.logo_state(LOGO_DWELL_MS);
        Self::new(registry, start)
    }

    pub fn active(&self) -> StateHandle {
        self.active
    }

    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    /// Run one tick. Returns the handle that will be active next.
    pub fn step(&mut self, ctx: &mut Context<'_>) -> StateHandle {
        let next = self.registry.tick(self.active, ctx);
        if next != self.active {
            log::info!("Screen: {:?} -> {:?}", self.active.id(), next.id());
        }
        self.active = next;
        next
    }
}
