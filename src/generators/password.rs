use rand::Rng;

use crate::models::GeneratorConfig;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// Characters eligible for the given options. Letters are always present.
pub fn charset(config: &GeneratorConfig) -> Vec<char> {
    let mut chars: Vec<char> = LETTERS.chars().collect();

    if config.include_digits {
        chars.extend(DIGITS.chars());
    }
    if config.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    chars
}

pub fn charset_size(config: &GeneratorConfig) -> usize {
    LETTERS.len()
        + if config.include_digits { DIGITS.len() } else { 0 }
        + if config.include_symbols { SYMBOLS.len() } else { 0 }
}

pub fn generate_with<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> String {
    let chars = charset(config);

    (0..config.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MAX_LENGTH, MIN_LENGTH};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(length: usize, include_digits: bool, include_symbols: bool) -> GeneratorConfig {
        GeneratorConfig { length, include_digits, include_symbols }
    }

    #[test]
    fn charset_sizes_follow_flags() {
        assert_eq!(charset_size(&config(16, false, false)), 52);
        assert_eq!(charset_size(&config(16, true, false)), 62);
        assert_eq!(charset_size(&config(16, false, true)), 64);
        assert_eq!(charset_size(&config(16, true, true)), 74);
        assert_eq!(charset(&config(16, true, true)).len(), 74);
    }

    #[test]
    fn output_length_matches_every_slider_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for length in MIN_LENGTH..=MAX_LENGTH {
            for (digits, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
                let password = generate_with(&config(length, digits, symbols), &mut rng);
                assert_eq!(password.chars().count(), length);
            }
        }
    }

    #[test]
    fn tolerates_lengths_outside_the_slider() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(generate_with(&config(1, true, true), &mut rng).len(), 1);
        assert_eq!(generate_with(&config(500, true, true), &mut rng).len(), 500);
        assert!(generate_with(&config(0, true, true), &mut rng).is_empty());
    }

    #[test]
    fn letters_only_when_both_flags_off() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let password = generate_with(&config(2000, false, false), &mut rng);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn digits_and_symbols_appear_only_when_enabled() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let digits_only = generate_with(&config(2000, true, false), &mut rng);
        assert!(digits_only.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(digits_only.chars().any(|c| c.is_ascii_digit()));

        let symbols_only = generate_with(&config(2000, false, true), &mut rng);
        assert!(symbols_only.chars().all(|c| c.is_ascii_alphabetic() || SYMBOLS.contains(c)));
        assert!(symbols_only.chars().any(|c| SYMBOLS.contains(c)));

        let everything = generate_with(&config(2000, true, true), &mut rng);
        let allowed = charset(&config(1, true, true));
        assert!(everything.chars().all(|c| allowed.contains(&c)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let cfg = config(24, true, true);
        let a = generate_with(&cfg, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_with(&cfg, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng_generation_has_requested_length() {
        let password = generate_with(&GeneratorConfig::default(), &mut rand::thread_rng());
        assert_eq!(password.len(), 16);
    }
}
