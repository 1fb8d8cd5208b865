// render.rs - Project the starfield into an output buffer
//
// Output encoding (one byte per pixel, for canvas rendering):
//   0        = empty
//   1-255    = star intensity (opacity scaled by attenuated point size)
//
// Camera sits on +z looking down -z with a vertical field of view. Where
// stars overlap the brighter one wins.

use crate::config::StarFieldConfig;
use crate::field::{Rotation, apply};

const NEAR: f32 = 0.1;

pub struct Encoder {
    out: Vec<u8>,
    w: u32,
    h: u32,
}

impl Encoder {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: vec![0; (w as usize) * (h as usize)],
            w,
            h,
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.out.resize((w as usize) * (h as usize), 0);
    }

    pub fn clear(&mut self) {
        self.out.fill(0);
    }

    pub fn len(&self) -> usize { self.out.len() }
    pub fn is_empty(&self) -> bool { self.out.is_empty() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn as_slice(&self) -> &[u8] { &self.out }

    /// Encode rotated points to output buffer
    pub fn encode_points(&mut self, points: &[f32], rotation: &Rotation, cfg: &StarFieldConfig) {
        if self.out.is_empty() { return; }

        let (w, h) = (self.w as f32, self.h as f32);
        let m = rotation.matrix();
        let focal = 1.0 / (cfg.fov_deg.to_radians() * 0.5).tan();
        let aspect = w / h;
        let base = cfg.opacity * 255.0;

        for p in points.chunks_exact(3) {
            let (x, y, z) = apply(&m, p[0], p[1], p[2]);

            // Distance in front of the camera
            let depth = cfg.camera_z - z;
            if depth <= NEAR { continue; }

            let ndc_x = focal / aspect * x / depth;
            let ndc_y = focal * y / depth;
            let sx = ((ndc_x + 1.0) * 0.5 * w).floor() as i32;
            let sy = ((1.0 - ndc_y) * 0.5 * h).floor() as i32;

            // Size attenuation: on-screen size in pixels
            let px = cfg.point_size * (h * 0.5) / depth;
            let enc = (base * px.min(1.0)).clamp(0.0, 255.0) as u8;

            self.put(sx, sy, enc);
        }
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, enc: u8) {
        if enc == 0 { return; }
        if (x as u32) < self.w && (y as u32) < self.h {
            let idx = y as usize * self.w as usize + x as usize;
            if enc > self.out[idx] { self.out[idx] = enc; }
        }
    }
}
