// cloud.rs - Uniform point cloud inside a sphere
//
// Flat layout: [x0, y0, z0, x1, y1, z1, ...], the shape a vertex buffer
// with stride 3 expects.

use std::f32::consts::TAU;

use rand::Rng;

/// Fill `count` points uniformly by volume inside a sphere of `radius`.
///
/// The cube root on the radial draw keeps density constant across shells,
/// and `acos(2u - 1)` keeps it constant across latitudes.
pub fn fill_sphere<R: Rng>(count: usize, radius: f32, rng: &mut R) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);

    for _ in 0..count {
        let r = rng.random::<f32>().cbrt() * radius;
        let theta = rng.random::<f32>() * TAU;
        let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        out.push(r * sin_phi * cos_theta);
        out.push(r * sin_phi * sin_theta);
        out.push(r * cos_phi);
    }

    out
}

/// Distance from the origin of one `[x, y, z]` chunk. Extra components
/// are ignored and missing ones count as zero.
#[inline]
pub fn magnitude(p: &[f32]) -> f32 {
    p.iter().take(3).map(|c| c * c).sum::<f32>().sqrt()
}
