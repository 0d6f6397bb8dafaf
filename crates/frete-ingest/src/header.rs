//! Header canonicalization for alias comparison.
//!
//! Carrier exports name the same column in many ways ("CEP Início",
//! "cep_inicio", "Cep-Inicio "). Every comparison in the column mapper
//! runs over the canonical form produced here.

/// Canonicalizes a raw header into a comparison key.
///
/// Lowercases, folds Latin diacritics, drops combining marks, collapses
/// every run of non-alphanumeric characters into a single underscore, and
/// trims leading/trailing underscores. Pure and total.
pub fn normalize_header(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }
        let c = fold_diacritic(c);
        if c.is_ascii_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.push(c);
        } else {
            pending_separator = true;
        }
    }

    normalized
}

/// Maps precomposed accented Latin letters to their base letter.
///
/// Covers the Latin-1 range seen in Portuguese and Spanish carrier
/// exports; already-lowercased input expected.
const fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Check if a character is a Unicode combining mark (category Mn).
const fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' | // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' | // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' | // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' | // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'   // Combining Half Marks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_accents() {
        assert_eq!(normalize_header("CEP Início"), "cep_inicio");
        assert_eq!(normalize_header("Preço"), "preco");
    }

    #[test]
    fn test_normalize_header_collapses_runs() {
        assert_eq!(normalize_header("Valor -- Frete"), "valor_frete");
        assert_eq!(normalize_header("prazo (dias)"), "prazo_dias");
    }

    #[test]
    fn test_normalize_header_trims_underscores() {
        assert_eq!(normalize_header("  #Valor#  "), "valor");
        assert_eq!(normalize_header("___"), "");
    }

    #[test]
    fn test_normalize_header_decomposed_accent() {
        // "Início" with a combining acute accent instead of a precomposed í.
        assert_eq!(normalize_header("Ini\u{0301}cio"), "inicio");
    }

    #[test]
    fn test_normalize_header_total() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("123"), "123");
    }
}
