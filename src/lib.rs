//! Showroom Voice - voice search assistant for a car-dealership storefront
//!
//! This crate implements the conversational core that lets a user drive an
//! inventory search by speech: a rule-based utterance parser, a filter
//! reconciliation merge, and a turn-taking dialogue controller.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
