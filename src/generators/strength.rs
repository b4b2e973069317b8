use crate::generators::password::charset_size;
use crate::models::{GeneratorConfig, StrengthLabel};

const STRONG_BITS: u32 = 50;
const SECURE_BITS: u32 = 80;

/// Rounded `length * log2(charset size)`.
pub fn entropy_bits(config: &GeneratorConfig) -> u32 {
    let size = charset_size(config) as f64;
    (config.length as f64 * size.log2()).round() as u32
}

pub fn estimate_strength(config: &GeneratorConfig) -> StrengthLabel {
    label_for_bits(entropy_bits(config))
}

pub fn label_for_bits(bits: u32) -> StrengthLabel {
    if bits < STRONG_BITS {
        StrengthLabel::Weak
    } else if bits < SECURE_BITS {
        StrengthLabel::Strong
    } else {
        StrengthLabel::Secure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: usize, include_digits: bool, include_symbols: bool) -> GeneratorConfig {
        GeneratorConfig { length, include_digits, include_symbols }
    }

    #[test]
    fn full_charset_at_default_length_is_secure() {
        let cfg = config(16, true, true);
        assert_eq!(entropy_bits(&cfg), 99);
        assert_eq!(estimate_strength(&cfg), StrengthLabel::Secure);
    }

    #[test]
    fn shortest_letters_only_is_weak() {
        let cfg = config(8, false, false);
        assert_eq!(entropy_bits(&cfg), 46);
        assert_eq!(estimate_strength(&cfg), StrengthLabel::Weak);
    }

    #[test]
    fn letters_only_at_sixteen_is_secure() {
        let cfg = config(16, false, false);
        assert_eq!(entropy_bits(&cfg), 91);
        assert_eq!(estimate_strength(&cfg), StrengthLabel::Secure);
    }

    #[test]
    fn middle_band_is_strong() {
        // 10 * log2(74) = 62.1
        let cfg = config(10, true, true);
        assert_eq!(entropy_bits(&cfg), 62);
        assert_eq!(estimate_strength(&cfg), StrengthLabel::Strong);
    }

    #[test]
    fn thresholds_are_inclusive_on_the_upper_band() {
        assert_eq!(label_for_bits(49), StrengthLabel::Weak);
        assert_eq!(label_for_bits(50), StrengthLabel::Strong);
        assert_eq!(label_for_bits(79), StrengthLabel::Strong);
        assert_eq!(label_for_bits(80), StrengthLabel::Secure);
    }

    #[test]
    fn more_characters_never_lowers_the_label() {
        for length in 8..=40 {
            let base = estimate_strength(&config(length, false, false));
            let richer = estimate_strength(&config(length, true, true));
            assert!(richer as u8 >= base as u8);
        }
    }
}
