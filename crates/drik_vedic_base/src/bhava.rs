//! Whole-sign houses.
//!
//! Every sign is one house, counted from the ascendant's sign: a body in
//! the ascendant's sign is in house 1, the next sign is house 2, and so
//! on, regardless of the exact degree.

use crate::rashi::Rashi;

/// House number 1..=12 of a body sign relative to the ascendant sign.
///
/// `((body_sign − ascendant_sign + 12) mod 12) + 1`; indices are taken
/// mod 12 first.
pub const fn whole_sign_house(body_sign: u8, ascendant_sign: u8) -> u8 {
    ((body_sign % 12 + 12 - ascendant_sign % 12) % 12) + 1
}

/// [`whole_sign_house`] over rashis.
pub const fn house_of(body: Rashi, ascendant: Rashi) -> u8 {
    whole_sign_house(body.index(), ascendant.index())
}

/// Map every `(key, sign)` pair to `(key, house)`, preserving order.
pub fn whole_sign_houses<K: Copy>(ascendant_sign: u8, signs: &[(K, u8)]) -> Vec<(K, u8)> {
    signs
        .iter()
        .map(|&(key, sign)| (key, whole_sign_house(sign, ascendant_sign)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_sign_is_first_house() {
        for asc in 0..12 {
            assert_eq!(whole_sign_house(asc, asc), 1);
        }
    }

    #[test]
    fn previous_sign_is_twelfth_house() {
        assert_eq!(whole_sign_house(11, 0), 12);
        assert_eq!(whole_sign_house(4, 5), 12);
    }

    #[test]
    fn named_signs() {
        assert_eq!(house_of(Rashi::Tula, Rashi::Mesha), 7);
        assert_eq!(house_of(Rashi::Mesha, Rashi::Makara), 4);
    }

    #[test]
    fn idempotent_and_order_independent() {
        let signs = [("a", 3u8), ("b", 7), ("c", 11)];
        let first = whole_sign_houses(5, &signs);
        let again = whole_sign_houses(5, &signs);
        assert_eq!(first, again);
        let mut reversed = signs;
        reversed.reverse();
        let mut rev = whole_sign_houses(5, &reversed);
        rev.reverse();
        assert_eq!(first, rev);
    }

    #[test]
    fn rotation_shifts_houses() {
        for asc in 0..12u8 {
            for body in 0..12u8 {
                for k in 0..12u8 {
                    let base = whole_sign_house(body, asc);
                    let shifted = whole_sign_house(body, (asc + k) % 12);
                    assert_eq!(
                        (shifted - 1) as i32,
                        ((base - 1) as i32 - k as i32).rem_euclid(12),
                    );
                }
            }
        }
    }
}
