//! Model bundle loading.
//!
//! A model directory holds `vectorizer.json` and `classifier.json`. The
//! bundle is constructed exactly once at process start and passed into the
//! engine; it is immutable afterwards, so concurrent readers share it
//! without locking.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::artifact::{ClassifierArtifact, VectorizerArtifact};
use crate::classifier::LinearClassifier;
use crate::compat::{self, ArtifactKind};
use crate::error::LoadError;
use crate::vectorizer::TfidfVectorizer;

/// Vectorizer artifact file name inside the model directory.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Classifier artifact file name inside the model directory.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// The fitted (vectorizer, classifier) pair needed for one inference.
#[derive(Debug)]
pub struct ModelBundle {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
}

impl ModelBundle {
    /// Pair a vectorizer and classifier, enforcing that the vector
    /// dimensionality matches the classifier's feature count. A mismatch
    /// is a configuration error, never a per-request one.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
    ) -> Result<Self, LoadError> {
        if vectorizer.dim() != classifier.n_features() {
            return Err(LoadError::DimensionMismatch {
                vectorizer: vectorizer.dim(),
                classifier: classifier.n_features(),
            });
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from a model directory.
    pub fn load(model_dir: &Path) -> Result<Self, LoadError> {
        let vectorizer_path = model_dir.join(VECTORIZER_FILE);
        let classifier_path = model_dir.join(CLASSIFIER_FILE);

        if !vectorizer_path.exists() {
            return Err(LoadError::ArtifactNotFound(vectorizer_path));
        }
        if !classifier_path.exists() {
            return Err(LoadError::ArtifactNotFound(classifier_path));
        }

        let raw: VectorizerArtifact =
            serde_json::from_str(&fs::read_to_string(&vectorizer_path)?)?;
        expect_kind(&raw.kind, ArtifactKind::TfidfVectorizer)?;
        let vectorizer = TfidfVectorizer::new(raw.vocabulary, raw.idf)?;

        let raw: ClassifierArtifact =
            serde_json::from_str(&fs::read_to_string(&classifier_path)?)?;
        expect_kind(&raw.kind, ArtifactKind::LinearClassifier)?;
        let classifier = LinearClassifier::new(raw.classes, raw.weights, raw.intercept)?;

        let bundle = Self::new(vectorizer, classifier)?;
        info!(
            dim = bundle.dim(),
            classes = bundle.classifier.classes().len(),
            dir = %model_dir.display(),
            "loaded sentiment model"
        );
        Ok(bundle)
    }

    /// Feature dimensionality shared by both halves of the pair.
    pub fn dim(&self) -> usize {
        self.vectorizer.dim()
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &LinearClassifier {
        &self.classifier
    }
}

/// Resolve a serialized `kind` through the compatibility shim and check it
/// denotes the expected artifact.
fn expect_kind(kind: &str, expected: ArtifactKind) -> Result<(), LoadError> {
    match compat::resolve(kind) {
        None => Err(LoadError::UnknownKind(kind.to_string())),
        Some(found) if found != expected => Err(LoadError::WrongKind {
            expected: expected.as_str(),
            found: kind.to_string(),
        }),
        Some(_) => Ok(()),
    }
}
