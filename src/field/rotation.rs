// rotation.rs - Frame-by-frame spin of the point cloud
//
// Points spin about x and y inside a group tilted about z. The composed
// transform is Rz(tilt) * Rx(x) * Ry(y), i.e. Euler order XYZ nested in
// a z-tilted parent.

use std::f32::consts::TAU;
use std::f64::consts::TAU as TAU_F64;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub fn new(tilt: f32) -> Self {
        Self { x: 0.0, y: 0.0, z: tilt }
    }

    /// Advance by `delta` seconds at the given rates (rad/s, subtracted).
    pub fn advance(&mut self, delta: f32, spin_x: f32, spin_y: f32) {
        if !delta.is_finite() || delta <= 0.0 { return; }
        self.x = wrap(self.x - delta * spin_x);
        self.y = wrap(self.y - delta * spin_y);
    }

    /// Advance by a long span in one step. The angle math runs in f64 so
    /// hours of spin land where the per-frame path would.
    pub fn advance_secs(&mut self, secs: f64, spin_x: f32, spin_y: f32) {
        if !secs.is_finite() || secs <= 0.0 { return; }
        self.x = (((self.x as f64) - secs * spin_x as f64) % TAU_F64) as f32;
        self.y = (((self.y as f64) - secs * spin_y as f64) % TAU_F64) as f32;
    }

    /// Row-major 3x3 matrix for the full transform.
    pub fn matrix(&self) -> [[f32; 3]; 3] {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        let rx = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];
        let ry = [[cy, 0.0, sy], [0.0, 1.0, 0.0], [-sy, 0.0, cy]];
        let rz = [[cz, -sz, 0.0], [sz, cz, 0.0], [0.0, 0.0, 1.0]];

        mul(&rz, &mul(&rx, &ry))
    }
}

#[inline]
pub fn apply(m: &[[f32; 3]; 3], x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    (
        m[0][0] * x + m[0][1] * y + m[0][2] * z,
        m[1][0] * x + m[1][1] * y + m[1][2] * z,
        m[2][0] * x + m[2][1] * y + m[2][2] * z,
    )
}

fn mul(a: &[[f32; 3]; 3], b: &[[f32; 3]; 3]) -> [[f32; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            out[r][c] = a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c];
        }
    }
    out
}

// Keep angles in (-TAU, TAU) so long sessions don't lose precision.
#[inline]
fn wrap(a: f32) -> f32 { a % TAU }
