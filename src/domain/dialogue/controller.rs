//! The dialogue controller: one instance per voice session.
//!
//! Owns the conversation state and filter accumulation. Synchronous and
//! infallible per turn; timing (pauses between spoken lines, the delayed
//! search hand-off) belongs to the application layer. Callers must not
//! process two utterances for the same session concurrently.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::{parse, Intent};
use crate::domain::filters::{reconcile, CarFilters};
use crate::domain::foundation::{SessionId, StateMachine};

use super::prompts;
use super::step::DialogueStep;
use super::transcript::Transcript;

/// The turn-spanning conversation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueState {
    pub current_step: DialogueStep,
    pub collected_filters: CarFilters,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pending_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_spoken: Option<String>,
}

/// Everything one processed utterance produces for the embedding layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResult {
    /// Lines to synthesize, in order. The application layer inserts the
    /// configured pause between consecutive lines.
    pub spoken_responses: Vec<String>,
    pub updated_filters: CarFilters,
    pub session_state: DialogueStep,
    /// True when the user confirmed and the inventory search should fire.
    pub search_triggered: bool,
}

/// Turn-by-turn state machine driving one voice session.
#[derive(Debug, Clone)]
pub struct DialogueController {
    session_id: SessionId,
    state: DialogueState,
    transcript: Transcript,
}

impl DialogueController {
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            state: DialogueState::default(),
            transcript: Transcript::new(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn filters(&self) -> &CarFilters {
        &self.state.collected_filters
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_done(&self) -> bool {
        self.state.current_step == DialogueStep::Done
    }

    /// Opens the session: emits the greeting and enters the collection loop.
    pub fn start_session(&mut self) -> String {
        if let Ok(next) = self
            .state
            .current_step
            .transition_to(DialogueStep::CollectingPreferences)
        {
            self.state.current_step = next;
        }
        let greeting = prompts::greeting();
        self.transcript.record_assistant(&greeting);
        self.state.last_spoken = Some(greeting.clone());
        greeting
    }

    /// Clears all collected criteria and returns to the collection loop.
    /// Valid from any step; the transcript is kept for display.
    pub fn reset(&mut self) {
        self.state.current_step = DialogueStep::CollectingPreferences;
        self.state.collected_filters = CarFilters::default();
        self.state.pending_confirmation = None;
    }

    /// Processes one transcribed utterance.
    ///
    /// A blank transcript or a turn after the session finished is a no-op:
    /// nothing is spoken and no transition happens.
    pub fn handle_utterance(&mut self, utterance: &str) -> TurnResult {
        if self.is_done() || utterance.trim().is_empty() {
            return self.no_op_turn();
        }
        if self.state.current_step == DialogueStep::Greeting {
            // Caller skipped start_session; fold the greeting transition in.
            self.state.current_step = DialogueStep::CollectingPreferences;
        }

        self.transcript.record_user(utterance);
        let command = parse(utterance);

        let mut spoken: Vec<String> = Vec::new();
        let mut search_triggered = false;

        match command.intent {
            Intent::SearchCars | Intent::SpecifyFilters => {
                self.state.collected_filters =
                    reconcile(&command.entities, &self.state.collected_filters);
                if let Some(echo) = prompts::echo(&command.entities) {
                    spoken.push(echo);
                }
                let question = prompts::next_question(&self.state.collected_filters);
                if question.is_wrap_up {
                    if let Ok(next) = self
                        .state
                        .current_step
                        .transition_to(DialogueStep::Confirming)
                    {
                        self.state.current_step = next;
                    }
                    self.state.pending_confirmation = Some(question.text.clone());
                }
                spoken.push(question.text);
            }
            Intent::Confirm => {
                if let Ok(next) = self.state.current_step.transition_to(DialogueStep::Done) {
                    self.state.current_step = next;
                }
                self.state.pending_confirmation = None;
                search_triggered = true;
                spoken.push(prompts::confirm_acknowledgement());
            }
            Intent::Deny => {
                if let Ok(next) = self
                    .state
                    .current_step
                    .transition_to(DialogueStep::CollectingPreferences)
                {
                    self.state.current_step = next;
                }
                self.state.pending_confirmation = None;
                spoken.push(prompts::deny_prompt());
            }
            Intent::ResetFilters => {
                self.reset();
                spoken.push(prompts::reset_acknowledgement());
            }
            Intent::CompareCars => spoken.push(prompts::compare_prompt()),
            Intent::CarDetails => spoken.push(prompts::details_prompt()),
            Intent::Unknown => spoken.push(prompts::unknown_fallback()),
        }

        for line in &spoken {
            self.transcript.record_assistant(line);
        }
        self.state.last_spoken = spoken.last().cloned();

        TurnResult {
            spoken_responses: spoken,
            updated_filters: self.state.collected_filters.clone(),
            session_state: self.state.current_step,
            search_triggered,
        }
    }

    fn no_op_turn(&self) -> TurnResult {
        TurnResult {
            spoken_responses: Vec::new(),
            updated_filters: self.state.collected_filters.clone(),
            session_state: self.state.current_step,
            search_triggered: false,
        }
    }
}

impl Default for DialogueController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::lexicon::{Condition, Feature, Transmission, VehicleType};

    use super::*;

    fn started_controller() -> DialogueController {
        let mut controller = DialogueController::new();
        controller.start_session();
        controller
    }

    mod session_lifecycle {
        use super::*;

        #[test]
        fn start_session_greets_and_enters_collection() {
            let mut controller = DialogueController::new();
            let greeting = controller.start_session();
            assert!(greeting.contains("car"));
            assert_eq!(
                controller.state().current_step,
                DialogueStep::CollectingPreferences
            );
            assert_eq!(controller.state().last_spoken.as_deref(), Some(&*greeting));
        }

        #[test]
        fn utterance_before_start_still_collects() {
            let mut controller = DialogueController::new();
            let result = controller.handle_utterance("a used bmw");
            assert_eq!(result.updated_filters.makes, vec!["BMW"]);
            assert_eq!(
                result.session_state,
                DialogueStep::CollectingPreferences
            );
        }

        #[test]
        fn done_is_terminal_for_the_session() {
            let mut controller = started_controller();
            controller.handle_utterance("yes");
            let after = controller.handle_utterance("a bmw please");
            assert!(after.spoken_responses.is_empty());
            assert!(controller.filters().makes.is_empty());
            assert!(controller.is_done());
        }
    }

    mod collecting {
        use super::*;

        #[test]
        fn filter_turn_echoes_then_asks_the_next_question() {
            let mut controller = started_controller();
            let result = controller.handle_utterance("a used bmw suv under 40000 euros");

            assert_eq!(result.spoken_responses.len(), 2);
            assert!(result.spoken_responses[0].starts_with("Got it"));
            // Make, price and body type are covered, so the checklist asks
            // about transmission next.
            assert!(result.spoken_responses[1].contains("transmission"));
            assert!(!result.search_triggered);
        }

        #[test]
        fn turn_without_echoable_entities_still_asks_a_question() {
            let mut controller = started_controller();
            let result = controller.handle_utterance("find me something nice");
            assert_eq!(result.spoken_responses.len(), 1);
            assert!(result.spoken_responses[0].contains("make"));
        }

        #[test]
        fn filters_accumulate_across_turns() {
            let mut controller = started_controller();
            controller.handle_utterance("a used bmw suv under 40000 euros");
            let result = controller.handle_utterance("automatic");

            assert_eq!(result.updated_filters.makes, vec!["BMW"]);
            assert_eq!(result.updated_filters.vehicle_types, vec![VehicleType::Suv]);
            assert_eq!(result.updated_filters.conditions, vec![Condition::Used]);
            assert_eq!(result.updated_filters.price_max, Some(40_000.0));
            assert_eq!(
                result.updated_filters.transmissions,
                vec![Transmission::Automatic]
            );
        }

        #[test]
        fn wrap_up_question_moves_into_confirming() {
            let mut controller = started_controller();
            controller.handle_utterance("a used bmw suv under 40000 euros");
            let result = controller.handle_utterance("automatic");

            assert_eq!(result.session_state, DialogueStep::Confirming);
            assert!(result.spoken_responses[1].contains("search now"));
            assert!(controller.state().pending_confirmation.is_some());
        }

        #[test]
        fn unknown_turn_offers_example_utterances() {
            let mut controller = started_controller();
            let result = controller.handle_utterance("blorp");
            assert_eq!(result.spoken_responses.len(), 1);
            assert!(result.spoken_responses[0].contains("find a used BMW"));
            assert_eq!(
                result.session_state,
                DialogueStep::CollectingPreferences
            );
        }

        #[test]
        fn blank_transcript_is_a_no_op() {
            let mut controller = started_controller();
            controller.handle_utterance("a bmw");
            let before = controller.filters().clone();
            let result = controller.handle_utterance("   ");
            assert!(result.spoken_responses.is_empty());
            assert_eq!(result.updated_filters, before);
        }
    }

    mod confirm_deny_reset {
        use super::*;

        #[test]
        fn confirm_finishes_and_triggers_the_search() {
            let mut controller = started_controller();
            controller.handle_utterance("a used bmw");
            let result = controller.handle_utterance("yes");

            assert!(result.search_triggered);
            assert_eq!(result.session_state, DialogueStep::Done);
            assert!(controller.is_done());
            // Filters survive into the hand-off.
            assert_eq!(result.updated_filters.makes, vec!["BMW"]);
        }

        #[test]
        fn deny_keeps_filters_and_returns_to_collection() {
            let mut controller = started_controller();
            controller.handle_utterance("a used bmw suv under 40000 euros");
            controller.handle_utterance("automatic");
            assert_eq!(
                controller.state().current_step,
                DialogueStep::Confirming
            );

            let result = controller.handle_utterance("no, that's wrong");
            assert_eq!(
                result.session_state,
                DialogueStep::CollectingPreferences
            );
            assert_eq!(result.updated_filters.makes, vec!["BMW"]);
            assert!(controller.state().pending_confirmation.is_none());
        }

        #[test]
        fn reset_clears_filters_but_keeps_the_transcript() {
            let mut controller = started_controller();
            controller.handle_utterance("a used bmw");
            let lines_before = controller.transcript().len();

            let result = controller.handle_utterance("let's start over");
            assert!(result.updated_filters.is_empty());
            assert_eq!(
                result.session_state,
                DialogueStep::CollectingPreferences
            );
            assert!(controller.transcript().len() > lines_before);
        }
    }

    mod end_to_end {
        use super::*;

        #[test]
        fn three_turn_scenario_ends_in_a_triggered_search() {
            let mut controller = started_controller();

            let first =
                controller.handle_utterance("I need a used BMW SUV under 40000 euros with heated seats");
            assert_eq!(first.updated_filters.makes, vec!["BMW"]);
            assert_eq!(first.updated_filters.vehicle_types, vec![VehicleType::Suv]);
            assert_eq!(first.updated_filters.conditions, vec![Condition::Used]);
            assert_eq!(first.updated_filters.price_max, Some(40_000.0));
            assert_eq!(
                first.updated_filters.features.get(&Feature::HeatedSeats),
                Some(&true)
            );
            assert!(first
                .spoken_responses
                .last()
                .unwrap()
                .contains("transmission"));

            let second = controller.handle_utterance("automatic");
            assert_eq!(
                second.updated_filters.transmissions,
                vec![Transmission::Automatic]
            );
            assert_eq!(second.updated_filters.makes, vec!["BMW"]);

            let third = controller.handle_utterance("yes");
            assert_eq!(third.session_state, DialogueStep::Done);
            assert!(third.search_triggered);
        }
    }
}
