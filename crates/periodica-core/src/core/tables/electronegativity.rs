use phf::{Map, phf_map};

/// Pauling electronegativities for Z = 1..=103. Noble gases without a
/// measured value are stored as `0.0`.
#[rustfmt::skip]
pub static PAULING_ELECTRONEGATIVITY: Map<u8, f64> = phf_map! {
    1u8 => 2.2, 2u8 => 0.0, 3u8 => 0.98, 4u8 => 1.57, 5u8 => 2.04, 6u8 => 2.55,
    7u8 => 3.04, 8u8 => 3.44, 9u8 => 3.98, 10u8 => 0.0, 11u8 => 0.93, 12u8 => 1.31,
    13u8 => 1.61, 14u8 => 1.9, 15u8 => 2.19, 16u8 => 2.58, 17u8 => 3.16, 18u8 => 0.0,
    19u8 => 0.82, 20u8 => 1.0, 21u8 => 1.36, 22u8 => 1.54, 23u8 => 1.63, 24u8 => 1.66,
    25u8 => 1.55, 26u8 => 1.83, 27u8 => 1.88, 28u8 => 1.91, 29u8 => 1.9, 30u8 => 1.65,
    31u8 => 1.81, 32u8 => 2.01, 33u8 => 2.18, 34u8 => 2.55, 35u8 => 2.96, 36u8 => 3.0,
    37u8 => 0.82, 38u8 => 0.95, 39u8 => 1.22, 40u8 => 1.33, 41u8 => 1.6, 42u8 => 2.16,
    43u8 => 1.9, 44u8 => 2.2, 45u8 => 2.28, 46u8 => 2.2, 47u8 => 1.93, 48u8 => 1.69,
    49u8 => 1.78, 50u8 => 1.96, 51u8 => 2.05, 52u8 => 2.1, 53u8 => 2.66, 54u8 => 2.6,
    55u8 => 0.79, 56u8 => 0.89, 57u8 => 1.1, 58u8 => 1.12, 59u8 => 1.13, 60u8 => 1.14,
    61u8 => 1.13, 62u8 => 1.17, 63u8 => 1.2, 64u8 => 1.2, 65u8 => 1.1, 66u8 => 1.22,
    67u8 => 1.23, 68u8 => 1.24, 69u8 => 1.25, 70u8 => 1.1, 71u8 => 1.27, 72u8 => 1.3,
    73u8 => 1.5, 74u8 => 2.36, 75u8 => 1.9, 76u8 => 2.2, 77u8 => 2.2, 78u8 => 2.28,
    79u8 => 2.54, 80u8 => 2.0, 81u8 => 1.62, 82u8 => 2.33, 83u8 => 2.02, 84u8 => 2.0,
    85u8 => 2.2, 86u8 => 0.0, 87u8 => 0.7, 88u8 => 0.9, 89u8 => 1.1, 90u8 => 1.3,
    91u8 => 1.5, 92u8 => 1.38, 93u8 => 1.36, 94u8 => 1.28, 95u8 => 1.3, 96u8 => 1.3,
    97u8 => 1.3, 98u8 => 1.3, 99u8 => 1.3, 100u8 => 1.3, 101u8 => 1.3, 102u8 => 1.3,
    103u8 => 1.3,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluorine_is_the_most_electronegative_entry() {
        let max = PAULING_ELECTRONEGATIVITY
            .entries()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(z, _)| *z);
        assert_eq!(max, Some(9));
    }

    #[test]
    fn light_noble_gases_are_stored_as_zero() {
        for z in [2u8, 10, 18, 86] {
            assert_eq!(PAULING_ELECTRONEGATIVITY.get(&z), Some(&0.0));
        }
        assert_eq!(PAULING_ELECTRONEGATIVITY.get(&36), Some(&3.0));
    }
}
