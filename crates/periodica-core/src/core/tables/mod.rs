//! # Reference Tables
//!
//! Process-wide, compile-time constant lookup tables. Every table is a `phf`
//! map or a `static` slice, so they are built before `main` runs, never
//! mutated, and safe to read from any number of threads without locking.
//!
//! Resolvers always consult a table first and fall back to a formula or an
//! interpolation chain when an entry is absent.

pub mod electronegativity;
pub mod elements;
pub mod ionization;
pub mod radii;
pub mod screening;
pub mod thermal;

use phf::Map;

/// Looks up an entry keyed by atomic number. Keys are stored as `u8`, so
/// atomic numbers beyond that range are simply absent.
#[inline]
pub(crate) fn by_atomic_number<V: Copy>(table: &Map<u8, V>, z: u32) -> Option<V> {
    u8::try_from(z).ok().and_then(|key| table.get(&key).copied())
}

/// Nearest tabulated neighbours strictly below and above `z` whose value
/// satisfies `accept`.
pub(crate) fn neighbours<V, F>(table: &Map<u8, V>, z: u32, accept: F) -> (Option<(u32, f64)>, Option<(u32, f64)>)
where
    V: Copy + Into<f64>,
    F: Fn(f64) -> bool,
{
    let mut lower: Option<(u32, f64)> = None;
    let mut upper: Option<(u32, f64)> = None;
    for (&key, &value) in table.entries() {
        let key = u32::from(key);
        let value: f64 = value.into();
        if !accept(value) {
            continue;
        }
        if key < z && lower.is_none_or(|(k, _)| key > k) {
            lower = Some((key, value));
        }
        if key > z && upper.is_none_or(|(k, _)| key < k) {
            upper = Some((key, value));
        }
    }
    (lower, upper)
}

/// Linear interpolation between two `(z, value)` points evaluated at `z`.
#[inline]
pub(crate) fn interpolate(lower: (u32, f64), upper: (u32, f64), z: u32) -> f64 {
    let t = f64::from(z - lower.0) / f64::from(upper.0 - lower.0);
    lower.1 + t * (upper.1 - lower.1)
}
