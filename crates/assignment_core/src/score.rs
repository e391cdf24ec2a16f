//! Suitability score for a single (driver, shipment) pair.
//!
//! Straightforward string arithmetic — the only subtlety is the exact street-name
//! extraction rule, preserved verbatim including its one asymmetry (`Apt.` matches,
//! `Suite.` does not).

use num_integer::gcd;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Suitability score for `driver_name` delivering to `address`. Always non-negative.
pub fn score(address: &str, driver_name: &str) -> f64 {
    let street = street_name(address);
    let l_s = street.chars().count();
    let l_d = driver_name.chars().count();

    let mut base = if l_s % 2 == 0 {
        1.5 * vowel_count(driver_name) as f64
    } else {
        consonant_count(driver_name) as f64
    };

    if gcd(l_s, l_d) > 1 {
        base *= 1.5;
    }

    base
}

/// Extract the street name from a full address.
///
/// Trims the address, drops the leading house-number token (if more than one
/// token is present), then strips a trailing `"Suite <token>"` / `"Apt <token>"`
/// / `"Apt. <token>"` suffix. The suffix match is case-sensitive and asymmetric
/// by design: `"Apt."` is recognized, `"Suite."` is not.
fn street_name(address: &str) -> String {
    let tokens: Vec<&str> = address.trim().split_whitespace().collect();
    if tokens.is_empty() {
        return String::new();
    }

    let mut tokens: Vec<&str> = if tokens.len() > 1 {
        tokens[1..].to_vec()
    } else {
        tokens
    };

    if tokens.len() >= 2 {
        let marker = tokens[tokens.len() - 2];
        if marker == "Suite" || marker == "Apt" || marker == "Apt." {
            tokens.truncate(tokens.len() - 2);
        }
    }

    tokens.join(" ")
}

fn vowel_count(s: &str) -> usize {
    s.chars()
        .filter(|c| c.is_alphabetic() && VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

fn consonant_count(s: &str) -> usize {
    s.chars()
        .filter(|c| c.is_alphabetic() && !VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_name_drops_house_number() {
        assert_eq!(street_name("123 Main Street"), "Main Street");
    }

    #[test]
    fn street_name_keeps_single_token() {
        assert_eq!(street_name("Broadway"), "Broadway");
    }

    #[test]
    fn street_name_strips_suite_suffix() {
        assert_eq!(street_name("123 Main Street Suite 400"), "Main Street");
    }

    #[test]
    fn street_name_strips_apt_dot_suffix() {
        assert_eq!(street_name("5 Elm Ave Apt. 2B"), "Elm Ave");
    }

    #[test]
    fn street_name_does_not_strip_suite_with_dot() {
        // Asymmetry preserved verbatim: "Suite." (with a period) is not recognized.
        assert_eq!(street_name("5 Elm Ave Suite. 2B"), "Elm Ave Suite.");
    }

    #[test]
    fn empty_address_yields_empty_street() {
        assert_eq!(street_name("   "), "");
    }

    #[test]
    fn score_is_non_negative_and_deterministic() {
        let a = score("123 Main Street", "Alice");
        let b = score("123 Main Street", "Alice");
        assert_eq!(a, b);
        assert!(a >= 0.0);
    }

    #[test]
    fn score_applies_gcd_multiplier() {
        // street "Main" (L_s = 4, even) => base = 1.5 * vowels("Otto") = 1.5 * 2 = 3.0
        // gcd(4, len("Otto")=4) = 4 > 1 => * 1.5 => 4.5
        assert_eq!(score("1 Main", "Otto"), 4.5);
    }
}
