//! Inference layer: serialized model artifacts, the compatibility shim for
//! relocated type references, and the sentiment classification engine.

mod artifact;
mod bundle;
mod classifier;
mod compat;
mod engine;
mod error;
mod vectorizer;

pub use bundle::{CLASSIFIER_FILE, ModelBundle, VECTORIZER_FILE};
pub use classifier::LinearClassifier;
pub use engine::{Prediction, SentimentEngine};
pub use error::LoadError;
pub use vectorizer::TfidfVectorizer;
