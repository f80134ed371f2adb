//! The inference engine: raw text in, sentiment label out.

use sentimento_core::{Normalizer, map_label};
use tracing::error;

use crate::bundle::ModelBundle;
use crate::error::LoadError;

/// Outcome of one classification request.
///
/// The closed set the presentation layer renders; nothing raises past the
/// engine boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// A mapped sentiment label, or the raw class token passed through
    /// when the model emits something outside the known table.
    Label(String),
    /// The model bundle never loaded; permanent for the process lifetime.
    ModelError,
}

/// Sentiment inference over an explicitly injected model bundle.
///
/// Immutable after construction; all methods take `&self`, so one engine
/// may serve any number of requests concurrently.
pub struct SentimentEngine {
    bundle: Option<ModelBundle>,
    normalizer: Normalizer,
}

impl SentimentEngine {
    /// Engine backed by a loaded bundle.
    pub fn new(bundle: ModelBundle) -> Self {
        Self {
            bundle: Some(bundle),
            normalizer: Normalizer::new(),
        }
    }

    /// Degraded engine for when the bundle could not be loaded. Every
    /// request answers [`Prediction::ModelError`].
    pub fn degraded() -> Self {
        Self {
            bundle: None,
            normalizer: Normalizer::new(),
        }
    }

    /// Build from the loader's result, logging the cause on failure.
    pub fn from_load(result: Result<ModelBundle, LoadError>) -> Self {
        match result {
            Ok(bundle) => Self::new(bundle),
            Err(err) => {
                error!(error = %err, "sentiment model unavailable");
                Self::degraded()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.bundle.is_some()
    }

    /// Classify one raw text.
    ///
    /// With no bundle, answers [`Prediction::ModelError`] before touching
    /// the input. Otherwise: normalise, vectorize the single document,
    /// take the single raw prediction, map it to a label.
    pub fn classify(&self, text: &str) -> Prediction {
        let Some(bundle) = &self.bundle else {
            return Prediction::ModelError;
        };

        let document = self.normalizer.normalize(text);
        let features = bundle.vectorizer().transform(&document);
        let raw = bundle.classifier().predict(&features);

        Prediction::Label(map_label(raw))
    }
}
