use phf::{Map, phf_map};

/// Melting points (K) of the elements that are gases at standard conditions.
#[rustfmt::skip]
pub static GAS_MELTING_POINT_K: Map<u8, f64> = phf_map! {
    1u8 => 14.0, 2u8 => 0.95, 7u8 => 63.0, 8u8 => 54.0, 9u8 => 53.5, 10u8 => 24.5,
    17u8 => 172.0, 18u8 => 84.0, 36u8 => 116.0, 54u8 => 161.0, 86u8 => 202.0,
};

/// Boiling points (K) of the elements that are gases at standard conditions.
#[rustfmt::skip]
pub static GAS_BOILING_POINT_K: Map<u8, f64> = phf_map! {
    1u8 => 20.3, 2u8 => 4.2, 7u8 => 77.0, 8u8 => 90.0, 9u8 => 85.0, 10u8 => 27.0,
    17u8 => 239.0, 18u8 => 87.0, 36u8 => 120.0, 54u8 => 165.0, 86u8 => 211.0,
};

/// Densities (g/cm³) of the elemental gases at standard conditions.
#[rustfmt::skip]
pub static GAS_DENSITY_G_CM3: Map<u8, f64> = phf_map! {
    1u8 => 0.00009, 2u8 => 0.00018, 7u8 => 0.00125, 8u8 => 0.00143, 9u8 => 0.0017,
    10u8 => 0.0009, 17u8 => 0.0032, 18u8 => 0.00178, 36u8 => 0.00375, 54u8 => 0.00589,
    86u8 => 0.00973,
};

/// Characteristic emission lines (nm).
#[rustfmt::skip]
pub static EMISSION_LINE_NM: Map<u8, f64> = phf_map! {
    1u8 => 656.3, 2u8 => 587.6, 3u8 => 670.8, 11u8 => 589.3, 19u8 => 766.5,
    20u8 => 422.7, 26u8 => 372.0, 29u8 => 324.8, 47u8 => 328.1, 79u8 => 267.6,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_tables_share_the_same_elements() {
        let mut melting: Vec<u8> = GAS_MELTING_POINT_K.keys().copied().collect();
        let mut boiling: Vec<u8> = GAS_BOILING_POINT_K.keys().copied().collect();
        let mut density: Vec<u8> = GAS_DENSITY_G_CM3.keys().copied().collect();
        melting.sort_unstable();
        boiling.sort_unstable();
        density.sort_unstable();
        assert_eq!(melting, boiling);
        assert_eq!(melting, density);
    }

    #[test]
    fn every_gas_boils_above_its_melting_point() {
        for (z, mp) in GAS_MELTING_POINT_K.entries() {
            assert!(GAS_BOILING_POINT_K[z] > *mp, "Z={z}");
        }
    }

    #[test]
    fn sodium_d_line() {
        assert_eq!(EMISSION_LINE_NM.get(&11), Some(&589.3));
    }
}
