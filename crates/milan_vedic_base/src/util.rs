//! Shared utility functions for reference-data lookups.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Fold a user-supplied name into a lookup key.
///
/// Lowercases and drops everything that is not an ASCII letter or digit, so
/// "Purva Phalguni", "purva-phalguni" and "PurvaPhalguni" share one key.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn name_key_ignores_case_and_separators() {
        assert_eq!(normalize_name("Purva Phalguni"), "purvaphalguni");
        assert_eq!(normalize_name("purva-phalguni"), "purvaphalguni");
        assert_eq!(normalize_name("  UTTARA_ashadha "), "uttaraashadha");
    }

    #[test]
    fn name_key_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" - "), "");
    }
}
