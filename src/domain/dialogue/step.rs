//! Dialogue step state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a voice session currently is in its collection loop.
///
/// - `Greeting`: session created, opening line not yet delivered
/// - `CollectingPreferences`: gathering search criteria turn by turn
/// - `Confirming`: every checklist dimension is covered, wrap-up question pending
/// - `Done`: user confirmed, search handed off; terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    #[default]
    Greeting,
    CollectingPreferences,
    Confirming,
    Done,
}

impl DialogueStep {
    /// Returns true if user utterances are processed in this step.
    pub fn accepts_utterances(&self) -> bool {
        matches!(self, Self::CollectingPreferences | Self::Confirming)
    }
}

impl StateMachine for DialogueStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueStep::*;
        matches!(
            (self, target),
            // Greeting delivered, start collecting
            (Greeting, CollectingPreferences) |
            // Checklist exhausted, wrap-up question asked
            (CollectingPreferences, Confirming) |
            // User denies the wrap-up, keep collecting
            (Confirming, CollectingPreferences) |
            // User confirms; valid from anywhere in the collection loop
            (CollectingPreferences, Done) |
            (Confirming, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStep::*;
        match self {
            Greeting => vec![CollectingPreferences],
            CollectingPreferences => vec![Confirming, Done],
            Confirming => vec![CollectingPreferences, Done],
            Done => vec![],
        }
    }
}
