//! On-disk artifact schemas.
//!
//! A model directory holds two JSON files, one per fitted component. Each
//! carries the `kind` type reference resolved through [`crate::compat`]
//! before the payload is trusted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Serialized form of a fitted TF-IDF vectorizer.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub kind: String,
    /// term → column index
    pub vocabulary: HashMap<String, usize>,
    /// per-column inverse document frequency, fitted at training time
    pub idf: Vec<f32>,
}

/// Serialized form of a fitted linear classifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub kind: String,
    /// class tokens in decision-function order
    pub classes: Vec<String>,
    /// one weight row per decision function
    pub weights: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}
