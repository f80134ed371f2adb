//! Pure text functions: normalisation and label mapping. No I/O, no state
//! beyond compiled patterns and the embedded stopword set.

pub mod label;
pub mod normalize;

pub use label::{NEGATIVE, POSITIVE, map_label};
pub use normalize::Normalizer;
