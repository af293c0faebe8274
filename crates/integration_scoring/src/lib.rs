//! Classifier scoring integration
//!
//! HTTP client for the remote scoring service that evaluates the pre-trained
//! condition classifiers. The service accepts a fixed-order numeric feature
//! vector and returns independent probabilities for diabetes, hypertension
//! and cardiovascular disease.

mod client;

pub use client::{HttpScoringClient, ScoringClient, ScoringConfig, ScoringError};
