//! Code-space generation and validation
//!
//! A code-space is the set of code strings an event accepts, defined by a
//! regular expression of the form `^PREFIX-(...)$`. Rather than enumerating
//! thousands of codes, the generator decomposes a contiguous numeric range
//! into digit-class terms whose union matches exactly the range.

use regex::Regex;

use crate::error::DomainError;

/// Lowest code number assigned to any participant class.
pub const RANGE_FLOOR: u32 = 1000;

/// Generate the code-space pattern for `count` participants under `prefix`.
///
/// The covered range is always `[1000, 1000 + count - 1]`. Returns `None`
/// when the prefix is empty or the count is zero; rejecting that input is
/// the caller's responsibility, not an internal failure.
///
/// The emitted pattern is anchored (`^...$`) and matches exactly the
/// integers in range: one `T[0-9]{3}` term per complete thousand block,
/// then the trailing partial block decomposed into full-hundred, full-ten,
/// and one final single-digit-range term.
pub fn generate_code_space(prefix: &str, count: u32) -> Option<String> {
    if prefix.is_empty() || count < 1 {
        return None;
    }

    let end = RANGE_FLOOR + count - 1;
    Some(format!("^{prefix}-({})$", range_terms(end).join("|")))
}

/// Decompose `[1000, end]` into digit-class alternatives.
fn range_terms(end: u32) -> Vec<String> {
    let mut terms = Vec::new();

    // Complete thousand blocks below the one containing `end`
    let end_thousand = end / 1000;
    for t in 1..end_thousand {
        terms.push(format!("{t}[0-9]{{3}}"));
    }

    let last_digits = end % 1000;
    if last_digits == 999 {
        // The trailing block is itself a full thousand
        terms.push(format!("{end_thousand}[0-9]{{3}}"));
        return terms;
    }

    // Partial trailing block: hundreds, then tens, then the last digit span
    let hundreds = last_digits / 100;
    let remainder = last_digits % 100;
    for h in 0..hundreds {
        terms.push(format!("{end_thousand}{h}[0-9]{{2}}"));
    }

    let tens = remainder / 10;
    let ones = remainder % 10;
    for t in 0..tens {
        terms.push(format!("{end_thousand}{hundreds}{t}[0-9]"));
    }

    terms.push(format!("{end_thousand}{hundreds}{tens}[0-{ones}]"));
    terms
}

/// Check that a candidate pattern compiles as a regular expression.
///
/// Runs before any pattern string is persisted as event configuration.
pub fn validate_pattern(pattern: &str) -> Result<(), DomainError> {
    compile_pattern(pattern).map(|_| ())
}

/// Compile a stored pattern into a matcher.
pub fn compile_pattern(pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidPattern(e.to_string()))
}

/// First literal code of a code-space (for display alongside a pattern).
pub fn first_code(prefix: &str) -> String {
    format!("{prefix}-{RANGE_FLOOR}")
}

/// Last literal code of a code-space with `count` participants.
pub fn last_code(prefix: &str, count: u32) -> String {
    format!("{prefix}-{}", RANGE_FLOOR + count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile the generated pattern and check it against every integer in
    /// and around the range.
    fn assert_exact(prefix: &str, count: u32) {
        let pattern = generate_code_space(prefix, count).expect("pattern should generate");
        let re = Regex::new(&pattern).expect("generated pattern should compile");
        let end = RANGE_FLOOR + count - 1;

        for n in (RANGE_FLOOR - 50)..=(end + 50) {
            let code = format!("{prefix}-{n}");
            let in_range = n >= RANGE_FLOOR && n <= end;
            assert_eq!(
                re.is_match(&code),
                in_range,
                "pattern {pattern} vs {code} (count {count})"
            );
        }
    }

    #[test]
    fn test_rejects_empty_prefix_and_zero_count() {
        assert_eq!(generate_code_space("", 10), None);
        assert_eq!(generate_code_space("FS25", 0), None);
    }

    #[test]
    fn test_full_thousand_is_a_single_term() {
        assert_eq!(
            generate_code_space("FS25", 1000),
            Some("^FS25-(1[0-9]{3})$".to_string())
        );
        assert_eq!(
            generate_code_space("FS25", 2000),
            Some("^FS25-(1[0-9]{3}|2[0-9]{3})$".to_string())
        );
    }

    #[test]
    fn test_single_code_range() {
        let pattern = generate_code_space("EV", 1).unwrap();
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match("EV-1000"));
        assert!(!re.is_match("EV-999"));
        assert!(!re.is_match("EV-1001"));
    }

    #[test]
    fn test_partial_block_decomposition() {
        // 1000..=1249: two full hundreds, four full tens, and 1240..=1249
        assert_eq!(
            generate_code_space("GX", 250),
            Some("^GX-(10[0-9]{2}|11[0-9]{2}|120[0-9]|121[0-9]|122[0-9]|123[0-9]|124[0-9])$".to_string())
        );
    }

    #[test]
    fn test_exactness_across_counts() {
        for count in [1, 7, 42, 100, 250, 999, 1000, 1001, 1776, 2500, 2501] {
            assert_exact("FS25", count);
        }
    }

    #[test]
    fn test_rejects_wrong_prefix_and_shape() {
        let pattern = generate_code_space("FS25", 1500).unwrap();
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match("FS25-1000"));
        assert!(re.is_match("FS25-2499"));
        assert!(!re.is_match("FS24-1000"));
        assert!(!re.is_match("FS25-999"));
        assert!(!re.is_match("FS25-2500"));
        assert!(!re.is_match("FS25-01000"));
        assert!(!re.is_match("xFS25-1000"));
        assert!(!re.is_match("FS25-1000x"));
    }

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("^FS25-(1[0-9]{3})$").is_ok());
        assert!(matches!(
            validate_pattern("^FS25-(1[0-9]{3)$"),
            Err(DomainError::InvalidPattern(_))
        ));
        assert!(matches!(
            validate_pattern("("),
            Err(DomainError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_first_and_last_code() {
        assert_eq!(first_code("FS25"), "FS25-1000");
        assert_eq!(last_code("FS25", 2501), "FS25-3500");
    }
}
