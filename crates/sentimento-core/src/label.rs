//! Mapping from raw classifier output to user-facing sentiment labels.

/// User-facing positive label.
pub const POSITIVE: &str = "Positivo";

/// User-facing negative label.
pub const NEGATIVE: &str = "Negativo";

/// Translate a raw classifier token into a user-facing sentiment label.
///
/// Depending on how the artifact was trained, the classifier emits either
/// a numeric class code ("0"/"1") or a textual class name
/// ("negativo"/"positivo", any casing). Both map onto the fixed label set.
/// Unrecognised tokens pass through unchanged rather than failing the
/// request.
pub fn map_label(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "0" | "negativo" => NEGATIVE.to_string(),
        "1" | "positivo" => POSITIVE.to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes() {
        assert_eq!(map_label("1"), "Positivo");
        assert_eq!(map_label("0"), "Negativo");
    }

    #[test]
    fn textual_names_case_insensitive() {
        assert_eq!(map_label("Positivo"), "Positivo");
        assert_eq!(map_label("POSITIVO"), "Positivo");
        assert_eq!(map_label("negativo"), "Negativo");
        assert_eq!(map_label("Negativo"), "Negativo");
    }

    #[test]
    fn unknown_token_passes_through() {
        assert_eq!(map_label("UNKNOWN_CLASS"), "UNKNOWN_CLASS");
        assert_eq!(map_label("neutro"), "neutro");
    }
}
