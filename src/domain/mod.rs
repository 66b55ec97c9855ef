//! Domain layer containing the voice assistant's core logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait, ids, timestamps)
//! - `lexicon` - Static keyword tables and canonical vocabulary
//! - `extraction` - Utterance parsing into intent, entities and confidence
//! - `filters` - Accumulated search criteria and the reconciliation merge
//! - `dialogue` - Turn-taking dialogue controller and transcript

pub mod dialogue;
pub mod extraction;
pub mod filters;
pub mod foundation;
pub mod lexicon;
