//! Byte-multiplier constants and conversions, in units of 1024.

pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;

pub const KIBI_LIMIT_F64: f64 = KIBI_LIMIT as f64;
pub const MEBI_LIMIT_F64: f64 = MEBI_LIMIT as f64;
pub const GIBI_LIMIT_F64: f64 = GIBI_LIMIT as f64;

/// Converts a byte count to kilobytes.
#[inline]
pub fn kb(bytes: f64) -> f64 {
    bytes / KIBI_LIMIT_F64
}

/// Converts a byte count to megabytes.
#[inline]
pub fn mb(bytes: f64) -> f64 {
    bytes / MEBI_LIMIT_F64
}

/// Converts a byte count to gigabytes.
#[inline]
pub fn gb(bytes: f64) -> f64 {
    bytes / GIBI_LIMIT_F64
}

/// Returns the byte multiplier for a unit suffix as it appears in an smaps
/// report (e.g. `kB`), matched case-insensitively. Returns `None` for units
/// we don't recognize.
#[inline]
pub(crate) fn unit_multiplier(unit: &str) -> Option<f64> {
    if unit.eq_ignore_ascii_case("kb") {
        Some(KIBI_LIMIT_F64)
    } else if unit.eq_ignore_ascii_case("mb") {
        Some(MEBI_LIMIT_F64)
    } else if unit.eq_ignore_ascii_case("gb") {
        Some(GIBI_LIMIT_F64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_pairs_agree() {
        assert_eq!(KIBI_LIMIT_F64, KIBI_LIMIT as f64);
        assert_eq!(MEBI_LIMIT_F64, MEBI_LIMIT as f64);
        assert_eq!(GIBI_LIMIT_F64, GIBI_LIMIT as f64);
    }

    #[test]
    fn test_conversions_are_plain_divisions() {
        assert_eq!(kb(1024.0), 1.0);
        assert_eq!(mb(1_048_576.0), 1.0);
        assert_eq!(gb(1_073_741_824.0), 1.0);
        assert_eq!(mb(524_288.0), 0.5);
    }

    #[test]
    fn test_unit_multiplier_is_case_insensitive() {
        assert_eq!(unit_multiplier("kB"), Some(KIBI_LIMIT_F64));
        assert_eq!(unit_multiplier("KB"), Some(KIBI_LIMIT_F64));
        assert_eq!(unit_multiplier("kb"), Some(KIBI_LIMIT_F64));
        assert_eq!(unit_multiplier("mB"), Some(MEBI_LIMIT_F64));
        assert_eq!(unit_multiplier("GB"), Some(GIBI_LIMIT_F64));
        assert_eq!(unit_multiplier("pages"), None);
    }
}
