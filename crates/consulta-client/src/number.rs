//! Input normalisation for case and document numbers.

/// Strip the CNJ punctuation (`-`, `.`, `_`, `/`) and surrounding whitespace
/// from a case number before it is sent to a provider.
pub fn clean_case_number(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | '_' | '/'))
        .collect()
}

/// Keep only the digits of a CPF/CNPJ document number.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_cnj_punctuation() {
        assert_eq!(
            clean_case_number(" 0001234-56.2023.8.16.0001 "),
            "00012345620238160001"
        );
    }

    #[test]
    fn clean_leaves_plain_numbers_alone() {
        assert_eq!(clean_case_number("123"), "123");
    }

    #[test]
    fn digits_only_drops_formatting() {
        assert_eq!(digits_only("123.456.789-09"), "12345678909");
        assert_eq!(digits_only("12.345.678/0001-95"), "12345678000195");
    }
}
