//! Driver State Machine
//!
//! Decides whether a frame advances the simulation. Pause control only
//! becomes available once the first tick has run.

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Nothing has ticked yet; pause control is not offered
    Idle,
    Running,
    Paused,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAction {
    Tick,
    TogglePause,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: DriverState,
    to_state: DriverState,
    action: DriverAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> DriverState {
        self.from_state
    }

    pub fn to_state(&self) -> DriverState {
        self.to_state
    }

    pub fn action(&self) -> DriverAction {
        self.action
    }
}

/// Simulation driver finite state machine
#[derive(Debug, Clone)]
pub struct Driver {
    state: DriverState,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// True once any tick has run
    pub fn is_started(&self) -> bool {
        self.state != DriverState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == DriverState::Paused
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: DriverAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: DriverAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            if next_state != from_state {
                log::info!("Driver {:?} -> {:?}", from_state, next_state);
            }
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: DriverAction) -> Option<DriverState> {
        match (self.state, action) {
            // First tick starts the game
            (DriverState::Idle, DriverAction::Tick) => Some(DriverState::Running),

            (DriverState::Running, DriverAction::Tick) => Some(DriverState::Running),
            (DriverState::Running, DriverAction::TogglePause) => Some(DriverState::Paused),

            (DriverState::Paused, DriverAction::TogglePause) => Some(DriverState::Running),

            // Paused frames do not tick; Idle has no pause control
            _ => None,
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
