use phf::{Map, phf_map};

/// First ionization energies (eV). Z = 104 onward are theoretical estimates.
#[rustfmt::skip]
pub static IONIZATION_ENERGY_EV: Map<u8, f64> = phf_map! {
    1u8 => 13.598, 2u8 => 24.587, 3u8 => 5.392, 4u8 => 9.323, 5u8 => 8.298, 6u8 => 11.26,
    7u8 => 14.534, 8u8 => 13.618, 9u8 => 17.423, 10u8 => 21.565, 11u8 => 5.139, 12u8 => 7.646,
    13u8 => 5.986, 14u8 => 8.152, 15u8 => 10.487, 16u8 => 10.36, 17u8 => 12.968, 18u8 => 15.76,
    19u8 => 4.341, 20u8 => 6.113, 21u8 => 6.561, 22u8 => 6.828, 23u8 => 6.746, 24u8 => 6.767,
    25u8 => 7.434, 26u8 => 7.902, 27u8 => 7.881, 28u8 => 7.64, 29u8 => 7.726, 30u8 => 9.394,
    31u8 => 5.999, 32u8 => 7.9, 33u8 => 9.789, 34u8 => 9.752, 35u8 => 11.814, 36u8 => 14.0,
    37u8 => 4.177, 38u8 => 5.695, 39u8 => 6.217, 40u8 => 6.634, 41u8 => 6.759, 42u8 => 7.092,
    43u8 => 7.28, 44u8 => 7.361, 45u8 => 7.459, 46u8 => 8.337, 47u8 => 7.576, 48u8 => 8.994,
    49u8 => 5.786, 50u8 => 7.344, 51u8 => 8.608, 52u8 => 9.01, 53u8 => 10.451, 54u8 => 12.13,
    55u8 => 3.894, 56u8 => 5.212, 57u8 => 5.577, 58u8 => 5.539, 59u8 => 5.473, 60u8 => 5.525,
    61u8 => 5.582, 62u8 => 5.644, 63u8 => 5.67, 64u8 => 6.15, 65u8 => 5.864, 66u8 => 5.939,
    67u8 => 6.022, 68u8 => 6.108, 69u8 => 6.184, 70u8 => 6.254, 71u8 => 5.426, 72u8 => 6.825,
    73u8 => 7.55, 74u8 => 7.864, 75u8 => 7.833, 76u8 => 8.438, 77u8 => 8.967, 78u8 => 8.959,
    79u8 => 9.226, 80u8 => 10.437, 81u8 => 6.108, 82u8 => 7.417, 83u8 => 7.286, 84u8 => 8.414,
    85u8 => 9.318, 86u8 => 10.749, 87u8 => 4.073, 88u8 => 5.278, 89u8 => 5.17, 90u8 => 6.307,
    91u8 => 5.89, 92u8 => 6.194, 93u8 => 6.266, 94u8 => 6.026, 95u8 => 5.974, 96u8 => 5.991,
    97u8 => 6.198, 98u8 => 6.282, 99u8 => 6.42, 100u8 => 6.5, 101u8 => 6.58, 102u8 => 6.65,
    103u8 => 4.96, 104u8 => 6.0, 105u8 => 6.8, 106u8 => 7.8, 107u8 => 7.7, 108u8 => 7.6,
    109u8 => 9.2, 110u8 => 9.5, 111u8 => 10.4, 112u8 => 11.7, 113u8 => 7.3, 114u8 => 8.5,
    115u8 => 5.6, 116u8 => 7.0, 117u8 => 7.7, 118u8 => 8.9,
};

/// Measured electron affinities (kJ/mol) for the elements where one is well established.
#[rustfmt::skip]
pub static ELECTRON_AFFINITY_KJ_MOL: Map<u8, f64> = phf_map! {
    1u8 => 72.8, 6u8 => 121.8, 7u8 => -7.0, 8u8 => 141.0, 9u8 => 328.0, 11u8 => 52.8,
    14u8 => 134.1, 15u8 => 72.0, 16u8 => 200.4, 17u8 => 349.0, 26u8 => 14.8, 29u8 => 119.2,
    35u8 => 324.5, 53u8 => 295.2, 79u8 => 222.8,
};
