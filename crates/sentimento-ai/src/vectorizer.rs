//! Pre-fitted TF-IDF transform.
//!
//! No fitting happens here: the vocabulary and per-term IDF weights come
//! fitted from the artifact, and `transform` maps one normalised document
//! to one fixed-dimension vector.

use std::collections::HashMap;

use crate::error::LoadError;

/// Fitted TF-IDF vectorizer.
///
/// Dimensionality is the vocabulary size and is fixed at load time; it
/// must match the classifier's feature count (checked by the bundle).
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Build from fitted state, validating internal consistency.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Result<Self, LoadError> {
        if vocabulary.len() != idf.len() {
            return Err(LoadError::MalformedVectorizer(format!(
                "vocabulary has {} terms but idf has {} entries",
                vocabulary.len(),
                idf.len()
            )));
        }
        if let Some((term, &idx)) = vocabulary.iter().find(|&(_, &idx)| idx >= idf.len()) {
            return Err(LoadError::MalformedVectorizer(format!(
                "term {term:?} maps to column {idx}, out of range for {} columns",
                idf.len()
            )));
        }

        Ok(Self { vocabulary, idf })
    }

    /// Vector dimensionality (vocabulary size).
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Transform one normalised document into a TF-IDF vector.
    ///
    /// Term counts over the vocabulary, scaled by IDF, then L2-normalised.
    /// Out-of-vocabulary tokens are ignored; an empty document (or one
    /// with no in-vocabulary tokens) yields the zero vector rather than
    /// an error.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in document.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        normalize(&mut vector);
        vector
    }
}

/// L2-normalize a vector in place.
fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
