//! State machine trait for lifecycle enums.
//!
//! Gives status enums (currently the dialogue step) a validated transition
//! method on top of an explicit transition table.

use super::ValidationError;

/// Trait for enums whose values form a small state machine.
///
/// Implementors declare which transitions are legal; `transition_to`
/// validates against that table instead of silently accepting any target.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from `self` to `target` is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every legal target state from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a validated transition, failing on an illegal move.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_value(
                "state_transition",
                format!("cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// A state with no outgoing transitions is terminal.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
