use phf::{Map, phf_map};

/// Clementi-Raimondi effective nuclear charges from Hartree-Fock wavefunctions,
/// as `(n, l, Z_eff)` per tabulated orbital.
#[rustfmt::skip]
pub static CLEMENTI_ZEFF: Map<u8, &'static [(u8, u8, f64)]> = phf_map! {
    1u8 => &[(1, 0, 1.0)],
    2u8 => &[(1, 0, 1.688)],
    3u8 => &[(1, 0, 2.691), (2, 0, 1.279)],
    4u8 => &[(1, 0, 3.685), (2, 0, 1.912)],
    5u8 => &[(1, 0, 4.68), (2, 0, 2.576), (2, 1, 2.421)],
    6u8 => &[(1, 0, 5.673), (2, 0, 3.217), (2, 1, 3.136)],
    7u8 => &[(1, 0, 6.665), (2, 0, 3.847), (2, 1, 3.834)],
    8u8 => &[(1, 0, 7.658), (2, 0, 4.492), (2, 1, 4.453)],
    9u8 => &[(1, 0, 8.65), (2, 0, 5.128), (2, 1, 5.1)],
    10u8 => &[(1, 0, 9.642), (2, 0, 5.758), (2, 1, 5.758)],
    11u8 => &[(3, 0, 2.507)],
    12u8 => &[(3, 0, 3.308)],
    13u8 => &[(3, 0, 4.117), (3, 1, 4.066)],
    14u8 => &[(3, 0, 4.903), (3, 1, 4.285)],
    15u8 => &[(3, 0, 5.642), (3, 1, 4.886)],
    16u8 => &[(3, 0, 6.367), (3, 1, 5.482)],
    17u8 => &[(3, 0, 7.068), (3, 1, 6.116)],
    18u8 => &[(3, 0, 7.757), (3, 1, 6.764)],
    19u8 => &[(4, 0, 3.495)],
    20u8 => &[(4, 0, 4.398)],
    21u8 => &[(3, 2, 4.632), (4, 0, 4.983)],
    22u8 => &[(3, 2, 5.133), (4, 0, 5.382)],
    23u8 => &[(3, 2, 5.598), (4, 0, 5.902)],
    24u8 => &[(3, 2, 6.222), (4, 0, 5.965)],
    25u8 => &[(3, 2, 6.461), (4, 0, 6.706)],
    26u8 => &[(3, 2, 6.879), (4, 0, 7.067)],
    27u8 => &[(3, 2, 7.287), (4, 0, 7.428)],
    28u8 => &[(3, 2, 7.695), (4, 0, 7.79)],
    29u8 => &[(3, 2, 8.192), (4, 0, 7.837)],
    30u8 => &[(3, 2, 8.552), (4, 0, 8.309)],
    31u8 => &[(4, 1, 6.222)],
    32u8 => &[(4, 1, 6.78)],
    33u8 => &[(4, 1, 7.449)],
    34u8 => &[(4, 1, 8.287)],
    35u8 => &[(4, 1, 9.028)],
    36u8 => &[(4, 1, 9.769)],
    37u8 => &[(5, 0, 4.985)],
    38u8 => &[(5, 0, 5.965)],
    39u8 => &[(4, 2, 6.256)],
    40u8 => &[(4, 2, 6.844)],
    41u8 => &[(4, 2, 7.455)],
    42u8 => &[(4, 2, 7.997)],
    43u8 => &[(4, 2, 8.539)],
    44u8 => &[(4, 2, 9.112)],
    45u8 => &[(4, 2, 9.578)],
    46u8 => &[(4, 2, 10.128)],
    47u8 => &[(4, 2, 10.637)],
    48u8 => &[(4, 2, 11.173)],
    49u8 => &[(5, 1, 6.937)],
    50u8 => &[(5, 1, 7.632)],
    51u8 => &[(5, 1, 8.431)],
    52u8 => &[(5, 1, 9.337)],
    53u8 => &[(5, 1, 10.153)],
    54u8 => &[(5, 1, 10.97)],
    55u8 => &[(6, 0, 5.36)],
    56u8 => &[(6, 0, 6.333)],
    72u8 => &[(5, 2, 10.758)],
    73u8 => &[(5, 2, 11.145)],
    74u8 => &[(5, 2, 11.531)],
    75u8 => &[(5, 2, 11.916)],
    76u8 => &[(5, 2, 12.298)],
    77u8 => &[(5, 2, 12.677)],
    78u8 => &[(5, 2, 13.052)],
    79u8 => &[(5, 2, 13.422)],
    80u8 => &[(5, 2, 13.786)],
    81u8 => &[(6, 1, 10.165)],
    82u8 => &[(6, 1, 10.921)],
    83u8 => &[(6, 1, 11.795)],
    84u8 => &[(6, 1, 12.756)],
    85u8 => &[(6, 1, 13.639)],
    86u8 => &[(6, 1, 14.522)],
};

/// Spectroscopic quantum defects indexed by orbital angular momentum `l`.
#[rustfmt::skip]
pub static QUANTUM_DEFECTS: Map<u8, &'static [f64]> = phf_map! {
    1u8 => &[0.0, 0.0, 0.0],
    3u8 => &[0.4, 0.04, 0.002],
    4u8 => &[0.6, 0.08],
    5u8 => &[0.87, 0.35],
    6u8 => &[1.02, 0.51],
    7u8 => &[1.12, 0.63],
    8u8 => &[1.2, 0.72],
    9u8 => &[1.26, 0.8],
    10u8 => &[1.31, 0.87],
    11u8 => &[1.35, 0.86, 0.015],
    12u8 => &[0.53, 0.38],
    19u8 => &[2.19, 1.71, 0.27],
    20u8 => &[1.09, 0.89],
    37u8 => &[3.13, 2.65, 1.35],
    55u8 => &[4.0, 3.58, 2.47],
};

/// Tabulated Z_eff for orbital `(n, l)` of element `z`, if any.
pub fn clementi_zeff(z: u32, n: u32, l: u32) -> Option<f64> {
    let orbitals = super::by_atomic_number(&CLEMENTI_ZEFF, z)?;
    orbitals
        .iter()
        .find(|(on, ol, _)| u32::from(*on) == n && u32::from(*ol) == l)
        .map(|(_, _, zeff)| *zeff)
}

/// The highest tabulated element at or below `z` carrying orbital `(n, l)`.
pub fn nearest_lower_clementi(z: u32, n: u32, l: u32) -> Option<(u32, f64)> {
    CLEMENTI_ZEFF
        .entries()
        .filter(|(key, _)| u32::from(**key) <= z)
        .filter_map(|(key, orbitals)| {
            orbitals
                .iter()
                .find(|(on, ol, _)| u32::from(*on) == n && u32::from(*ol) == l)
                .map(|(_, _, zeff)| (u32::from(*key), *zeff))
        })
        .max_by_key(|(key, _)| *key)
}

pub fn quantum_defect(z: u32, l: u32) -> Option<f64> {
    let defects = super::by_atomic_number(&QUANTUM_DEFECTS, z)?;
    defects.get(usize::try_from(l).ok()?).copied()
}
