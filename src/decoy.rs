//! Decoy accession detection
//!
//! Target-decoy databases mark decoy entries by prefixing or suffixing the
//! accession with a flag such as `REVERSED` or `DECOY`.

/// Flags recognised as decoy markers, in lookup order
pub const DECOY_FLAGS: [&str; 4] = ["REVERSED", "RND", "SHUFFLED", "DECOY"];

/// Return the first flag of `flags` the accession starts or ends with
pub fn decoy_flag<'a, S: AsRef<str>>(accession: &str, flags: &'a [S]) -> Option<&'a str> {
    for flag in flags {
        let flag: &'a str = flag.as_ref();
        if !flag.is_empty() && (accession.starts_with(flag) || accession.ends_with(flag)) {
            return Some(flag);
        }
    }
    None
}

/// Whether the accession carries one of the default [`DECOY_FLAGS`]
pub fn is_decoy_accession(accession: &str) -> bool {
    decoy_flag(accession, &DECOY_FLAGS).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix_flags() {
        assert!(is_decoy_accession("P12345_REVERSED"));
        assert!(is_decoy_accession("DECOY_P12345"));
        assert!(is_decoy_accession("RND123"));
        assert!(!is_decoy_accession("P12345"));
        assert!(!is_decoy_accession("P1DECOY2"));
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        assert!(!is_decoy_accession("decoy_P12345"));
    }

    #[test]
    fn test_custom_flags() {
        let flags = vec!["rev_".to_string(), String::new()];
        assert_eq!(decoy_flag("rev_P1", &flags), Some("rev_"));
        assert_eq!(decoy_flag("P1", &flags), None);
        assert_eq!(decoy_flag("DECOY_P1", &DECOY_FLAGS), Some("DECOY"));
    }
}
