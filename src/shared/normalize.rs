//! Name normalization: user input → API path segment.

use super::Endpoint;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize a user-entered name into an [`Endpoint`].
///
/// Trims the input, collapses every whitespace run to a single `_`, applies
/// canonical decomposition (NFD) and drops combining diacritical marks.
/// Blank input yields an empty endpoint, which callers must reject.
pub fn normalize_name(raw: &str) -> Endpoint {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join("_");
    let stripped: String = joined.nfd().filter(|c| !is_diacritic(*c)).collect();
    Endpoint::from(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(normalize_name("Giyu Tomioka").as_str(), "Giyu_Tomioka");
    }

    #[test]
    fn test_trims_and_collapses_runs() {
        assert_eq!(
            normalize_name("  Agatsuma Zenitsu  ").as_str(),
            "Agatsuma_Zenitsu"
        );
        assert_eq!(
            normalize_name("Kamado \t\n Nezuko").as_str(),
            "Kamado_Nezuko"
        );
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(normalize_name("").is_empty());
        assert!(normalize_name("   \t ").is_empty());
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize_name("Kanroji Mitsuri").as_str(), "Kanroji_Mitsuri");
        assert_eq!(normalize_name("Respiração da Água").as_str(), "Respiracao_da_Agua");
        assert_eq!(normalize_name("Kyōjurō Rengoku").as_str(), "Kyojuro_Rengoku");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Giyu Tomioka", "  Kyōjurō  Rengoku ", "Tanjiro_Kamado", ""] {
            let once = normalize_name(raw);
            let twice = normalize_name(once.as_str());
            assert_eq!(once, twice, "normalizing {raw:?} twice changed it");
        }
    }

    #[test]
    fn test_keeps_existing_underscores() {
        assert_eq!(normalize_name("Tanjiro_Kamado").as_str(), "Tanjiro_Kamado");
    }
}
