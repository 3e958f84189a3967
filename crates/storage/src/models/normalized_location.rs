/// Strip surrounding whitespace, including a stray byte order mark left
/// behind by pasted or imported text.
pub fn trim_location(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trim surrounding whitespace and lower-case. Used only for comparison,
/// never for display.
pub fn normalize(value: &str) -> String {
    trim_location(value).to_lowercase()
}

/// A city/area pair in comparison form.
///
/// Building one from a query and comparing it against stored events makes
/// the case and whitespace rules live in exactly one place, so
/// "PUNE / Kothrud " and "pune / kothrud" address the same location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLocation {
    city: String,
    area: String,
}

impl NormalizedLocation {
    /// Creates a normalized location from raw user or stored input.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::NormalizedLocation;
    ///
    /// let query = NormalizedLocation::new("PUNE", " Kothrud ");
    /// assert!(query.matches("pune", "kothrud"));
    /// assert_eq!(query, NormalizedLocation::new("Pune", "KOTHRUD"));
    /// ```
    pub fn new(city: &str, area: &str) -> Self {
        Self {
            city: normalize(city),
            area: normalize(area),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// True when both raw values normalize to this location.
    pub fn matches(&self, city: &str, area: &str) -> bool {
        normalize(city) == self.city && normalize(area) == self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  New York\t"), "new york");
        assert_eq!(normalize("ANDHERI"), "andheri");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(trim_location("\u{FEFF}Pune "), "Pune");
        assert_eq!(normalize("\u{FEFF} Kothrud\u{FEFF}"), "kothrud");
        assert!(NormalizedLocation::new("Pune", "Kothrud").matches("\u{FEFF}Pune", "Kothrud"));
    }

    #[test]
    fn test_matches_ignores_case_and_padding() {
        let location = NormalizedLocation::new("Austin", "Downtown");
        assert!(location.matches("AUSTIN", " downtown "));
        assert!(!location.matches("Austin", "Downtown East"));
    }

    #[test]
    fn test_empty_query_only_matches_empty_fields() {
        let location = NormalizedLocation::new("", "");
        assert!(location.matches("  ", ""));
        assert!(!location.matches("Pune", ""));
    }

    #[test]
    fn test_equality_regardless_of_case() {
        let a = NormalizedLocation::new("MUMBAI", "Andheri");
        let b = NormalizedLocation::new("mumbai ", "ANDHERI");
        assert_eq!(a, b);
        assert_eq!(a.city(), "mumbai");
        assert_eq!(a.area(), "andheri");
    }
}
