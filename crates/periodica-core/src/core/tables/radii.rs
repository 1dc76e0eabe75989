use phf::{Map, phf_map};

/// Empirical atomic radii (pm) for Z = 1..=103.
#[rustfmt::skip]
pub static ATOMIC_RADIUS_PM: Map<u8, u32> = phf_map! {
    1u8 => 53, 2u8 => 31, 3u8 => 167, 4u8 => 112, 5u8 => 87, 6u8 => 77, 7u8 => 75, 8u8 => 73,
    9u8 => 71, 10u8 => 69, 11u8 => 190, 12u8 => 145, 13u8 => 118, 14u8 => 111, 15u8 => 98, 16u8 => 88,
    17u8 => 79, 18u8 => 71, 19u8 => 243, 20u8 => 194, 21u8 => 184, 22u8 => 176, 23u8 => 171, 24u8 => 166,
    25u8 => 161, 26u8 => 156, 27u8 => 152, 28u8 => 149, 29u8 => 145, 30u8 => 142, 31u8 => 136, 32u8 => 125,
    33u8 => 114, 34u8 => 103, 35u8 => 94, 36u8 => 88, 37u8 => 265, 38u8 => 219, 39u8 => 212, 40u8 => 206,
    41u8 => 198, 42u8 => 190, 43u8 => 183, 44u8 => 178, 45u8 => 173, 46u8 => 169, 47u8 => 165, 48u8 => 161,
    49u8 => 156, 50u8 => 145, 51u8 => 133, 52u8 => 123, 53u8 => 115, 54u8 => 108, 55u8 => 298, 56u8 => 253,
    57u8 => 187, 58u8 => 182, 59u8 => 182, 60u8 => 181, 61u8 => 183, 62u8 => 180, 63u8 => 180, 64u8 => 180,
    65u8 => 177, 66u8 => 178, 67u8 => 176, 68u8 => 176, 69u8 => 176, 70u8 => 176, 71u8 => 174, 72u8 => 208,
    73u8 => 200, 74u8 => 193, 75u8 => 188, 76u8 => 185, 77u8 => 180, 78u8 => 177, 79u8 => 174, 80u8 => 171,
    81u8 => 156, 82u8 => 154, 83u8 => 143, 84u8 => 135, 85u8 => 127, 86u8 => 120, 87u8 => 280, 88u8 => 235,
    89u8 => 195, 90u8 => 180, 91u8 => 180, 92u8 => 175, 93u8 => 175, 94u8 => 175, 95u8 => 175, 96u8 => 174,
    97u8 => 170, 98u8 => 169, 99u8 => 168, 100u8 => 167, 101u8 => 166, 102u8 => 165, 103u8 => 161,
};
