// SPDX-License-Identifier: Apache-2.0

/// Canonical lookup normalization: Unicode lowercase, nothing else. Accents
/// and interior whitespace compare as stored.
#[must_use]
pub fn normalize_name_lookup(input: &str) -> String {
    input.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_name_lookup;

    #[test]
    fn lowercases_without_trimming() {
        assert_eq!(normalize_name_lookup("Quentin Tarantino"), "quentin tarantino");
        assert_eq!(normalize_name_lookup("  Padded  "), "  padded  ");
        assert_eq!(normalize_name_lookup("Penélope CRUZ"), "penélope cruz");
    }
}
