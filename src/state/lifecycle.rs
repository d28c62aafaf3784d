use defmt_or_log as log;

use super::{Context, NextState, Screen};
use crate::Millis;

/// A long-lived screen plus its activation bookkeeping.
///
/// Gates the variant's hooks so that, per activation, `on_init` succeeds
/// exactly once before any `on_run`, and `on_shutdown` runs exactly once
/// when a tick hands control to another screen.
pub struct StateCell<S> {
    screen: S,
    initialized: bool,
    activation_time: Millis,
}

impl<S: Screen> StateCell<S> {
    pub const fn new(screen: S) -> Self {
        Self {
            screen,
            initialized: false,
            activation_time: 0,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable access for the registry's configure-then-hand-off accessors.
    pub(crate) fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn activation_time(&self) -> Millis {
        self.activation_time
    }

    /// Time spent in this screen. Only meaningful once initialised.
    pub fn elapsed(&self, now: Millis) -> Millis {
        now.wrapping_sub(self.activation_time)
    }

    pub fn tick(&mut self, ctx: &mut Context<'_>) -> NextState {
        if !self.initialized {
            return match self.screen.on_init(ctx) {
                Ok(()) => {
                    self.initialized = true;
                    self.activation_time = ctx.now;
                    NextState::Stay
                }
                Err(e) => {
                    log::warn!("{:?} failed to initialise: {:?}", S::ID, e);
                    NextState::init_failure(e)
                }
            };
        }

        let elapsed = self.elapsed(ctx.now);
        let next = self.screen.on_run(ctx, elapsed);
        if next.leaves(S::ID) {
            self.shutdown(ctx);
        }
        next
    }

    fn shutdown(&mut self, ctx: &mut Context<'_>) {
        if let Err(e) = self.screen.on_shutdown(ctx) {
            log::warn!("{:?} failed to shut down: {:?}", S::ID, e);
        }
        self.initialized = false;
        self.activation_time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScreenId;
    use crate::test_support::Rig;
    use crate::ui::Input;
    use crate::Error;

    /// Counts hook calls and leaves on a scripted tick.
    #[derive(Default)]
    struct Probe {
        inits: u32,
        runs: u32,
        shutdowns: u32,
        fail_init: bool,
        fail_shutdown: bool,
        leave_after: Option<u32>,
    }

    impl Screen for Probe {
        const ID: ScreenId = ScreenId::BadgeInfo;

        fn on_init(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
            self.inits += 1;
            if self.fail_init {
                Err(Error::hardware("probe init"))
            } else {
                Ok(())
            }
        }

        fn on_run(&mut self, _ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
            self.runs += 1;
            match self.leave_after {
                Some(n) if self.runs >= n => NextState::Goto(ScreenId::Menu),
                _ => NextState::Stay,
            }
        }

        fn on_shutdown(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
            self.shutdowns += 1;
            if self.fail_shutdown {
                Err(Error::hardware("probe shutdown"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn first_tick_only_initialises() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe::default());

        let next = cell.tick(&mut rig.ctx(100, Input::key(11)));

        assert_eq!(next, NextState::Stay);
        assert!(cell.is_initialized());
        assert_eq!(cell.activation_time(), 100);
        assert_eq!(cell.screen().inits, 1);
        assert_eq!(cell.screen().runs, 0);
    }

    #[test]
    fn later_ticks_run_without_reinitialising() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe::default());

        for t in 0..5 {
            cell.tick(&mut rig.ctx(t, Input::idle()));
        }

        assert_eq!(cell.screen().inits, 1);
        assert_eq!(cell.screen().runs, 4);
        assert_eq!(cell.screen().shutdowns, 0);
    }

    #[test]
    fn elapsed_counts_from_activation() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe::default());
        cell.tick(&mut rig.ctx(1_000, Input::idle()));
        assert_eq!(cell.elapsed(1_250), 250);
    }

    #[test]
    fn elapsed_survives_tick_counter_wrap() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe::default());
        cell.tick(&mut rig.ctx(u32::MAX - 9, Input::idle()));
        assert_eq!(cell.elapsed(10), 20);
    }

    #[test]
    fn leaving_shuts_down_once_and_resets() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe {
            leave_after: Some(2),
            ..Probe::default()
        });

        cell.tick(&mut rig.ctx(5, Input::idle()));
        assert_eq!(cell.tick(&mut rig.ctx(6, Input::idle())), NextState::Stay);
        assert_eq!(
            cell.tick(&mut rig.ctx(7, Input::idle())),
            NextState::Goto(ScreenId::Menu)
        );

        assert_eq!(cell.screen().shutdowns, 1);
        assert!(!cell.is_initialized());
        assert_eq!(cell.activation_time(), 0);

        // Next activation starts with a fresh init.
        assert_eq!(cell.tick(&mut rig.ctx(8, Input::idle())), NextState::Stay);
        assert_eq!(cell.screen().inits, 2);
    }

    #[test]
    fn goto_self_is_not_a_transition() {
        struct SelfLoop;
        impl Screen for SelfLoop {
            const ID: ScreenId = ScreenId::Menu;
            fn on_run(&mut self, _ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
                NextState::Goto(ScreenId::Menu)
            }
            fn on_shutdown(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
                panic!("shutdown must not run when staying");
            }
        }

        let mut rig = Rig::new();
        let mut cell = StateCell::new(SelfLoop);
        for t in 0..3 {
            cell.tick(&mut rig.ctx(t, Input::idle()));
        }
        assert!(cell.is_initialized());
    }

    #[test]
    fn failed_init_redirects_to_message_and_stays_uninitialised() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe {
            fail_init: true,
            ..Probe::default()
        });

        let next = cell.tick(&mut rig.ctx(0, Input::idle()));

        assert_eq!(next, NextState::init_failure(Error::hardware("probe init")));
        assert!(!cell.is_initialized());
        assert_eq!(cell.screen().runs, 0);
        assert_eq!(cell.screen().shutdowns, 0);

        // Re-entering retries initialisation.
        cell.tick(&mut rig.ctx(1, Input::idle()));
        assert_eq!(cell.screen().inits, 2);
    }

    #[test]
    fn failed_shutdown_still_resets() {
        let mut rig = Rig::new();
        let mut cell = StateCell::new(Probe {
            fail_shutdown: true,
            leave_after: Some(1),
            ..Probe::default()
        });

        cell.tick(&mut rig.ctx(0, Input::idle()));
        let next = cell.tick(&mut rig.ctx(1, Input::idle()));

        assert_eq!(next, NextState::Goto(ScreenId::Menu));
        assert!(!cell.is_initialized());
        assert_eq!(cell.screen().shutdowns, 1);
    }
}
