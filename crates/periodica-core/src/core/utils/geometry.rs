use crate::core::models::molecule::Geometry;
use nalgebra::{Point3, Rotation3, Vector3};

fn on_axis(axis: Vector3<f64>, length: f64) -> Point3<f64> {
    Point3::from(axis * length)
}

/// Point at `length` along +x rotated by `angle_degrees` about +z.
fn in_xy_plane(length: f64, angle_degrees: f64) -> Point3<f64> {
    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle_degrees.to_radians());
    Point3::from(rotation * Vector3::x() * length)
}

/// Polar angle `theta` from +z, azimuth `phi` about +z, both in degrees.
fn spherical(length: f64, theta_degrees: f64, phi_degrees: f64) -> Point3<f64> {
    let (theta, phi) = (theta_degrees.to_radians(), phi_degrees.to_radians());
    Point3::new(
        length * theta.sin() * phi.cos(),
        length * theta.sin() * phi.sin(),
        length * theta.cos(),
    )
}

/// Idealized terminal-atom positions around a central atom at the origin.
///
/// One position is produced per bond length, up to the coordination the
/// shape supports. `bond_angle` only affects [`Geometry::Bent`]. Shapes
/// without a fixed arrangement use the tetrahedral one; a lone atom or a
/// homonuclear cluster has no terminal positions.
pub fn ideal_positions(geometry: Geometry, bond_lengths: &[f64], bond_angle: Option<f64>) -> Vec<Point3<f64>> {
    match geometry {
        Geometry::Atomic | Geometry::Polyatomic => Vec::new(),
        Geometry::Linear => bond_lengths
            .iter()
            .take(2)
            .zip([Vector3::x(), -Vector3::x()])
            .map(|(&l, axis)| on_axis(axis, l))
            .collect(),
        Geometry::Bent => {
            let angle = bond_angle.unwrap_or(104.5);
            bond_lengths
                .iter()
                .take(2)
                .zip([0.0, angle])
                .map(|(&l, a)| in_xy_plane(l, a))
                .collect()
        }
        Geometry::TrigonalPlanar => bond_lengths
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, &l)| in_xy_plane(l, 120.0 * i as f64))
            .collect(),
        Geometry::TrigonalPyramidal => bond_lengths
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, &l)| spherical(l, 107.0, 120.0 * i as f64))
            .collect(),
        Geometry::Tetrahedral | Geometry::Complex => bond_lengths
            .iter()
            .take(4)
            .enumerate()
            .map(|(i, &l)| {
                if i == 0 {
                    on_axis(Vector3::z(), l)
                } else {
                    spherical(l, 109.47, 120.0 * (i - 1) as f64)
                }
            })
            .collect(),
        Geometry::TrigonalBipyramidal => axial_then(bond_lengths, 5, |i, l| in_xy_plane(l, 120.0 * i as f64)),
        Geometry::Seesaw => axial_then(bond_lengths, 4, |i, l| {
            in_xy_plane(l, if i == 0 { 58.5 } else { -58.5 })
        }),
        Geometry::TShaped => axial_then(bond_lengths, 3, |_, l| on_axis(Vector3::x(), l)),
        Geometry::Octahedral => bond_lengths
            .iter()
            .take(6)
            .zip([
                Vector3::x(),
                -Vector3::x(),
                Vector3::y(),
                -Vector3::y(),
                Vector3::z(),
                -Vector3::z(),
            ])
            .map(|(&l, axis)| on_axis(axis, l))
            .collect(),
        Geometry::SquarePlanar => square(bond_lengths),
        Geometry::SquarePyramidal => {
            let mut positions: Vec<_> = bond_lengths.first().map(|&l| on_axis(Vector3::z(), l)).into_iter().collect();
            positions.extend(square(bond_lengths.get(1..).unwrap_or_default()));
            positions
        }
    }
}

/// Two axial positions along ±z, then `equatorial` for the rest, up to `max` atoms.
fn axial_then<F>(bond_lengths: &[f64], max: usize, equatorial: F) -> Vec<Point3<f64>>
where
    F: Fn(usize, f64) -> Point3<f64>,
{
    bond_lengths
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, &l)| match i {
            0 => on_axis(Vector3::z(), l),
            1 => on_axis(-Vector3::z(), l),
            _ => equatorial(i - 2, l),
        })
        .collect()
}

fn square(bond_lengths: &[f64]) -> Vec<Point3<f64>> {
    bond_lengths
        .iter()
        .take(4)
        .zip([Vector3::x(), -Vector3::x(), Vector3::y(), -Vector3::y()])
        .map(|(&l, axis)| on_axis(axis, l))
        .collect()
}

/// Angle `a`-`center`-`b` in degrees; zero when either arm has no length.
pub fn bond_angle(a: &Point3<f64>, center: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let (v1, v2) = (a - center, b - center);
    let (n1, n2) = (v1.norm(), v2.norm());
    if n1 == 0.0 || n2 == 0.0 {
        return 0.0;
    }
    let cosine = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}
