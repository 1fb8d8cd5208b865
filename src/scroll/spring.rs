// spring.rs - Damped spring filter
//
// Mass-spring-damper chasing a target: a = (-k (x - target) - c v) / m.
// Each update solves the ODE in closed form over dt, so large frame gaps
// (background tabs) can't blow up the way an explicit integrator would.

use crate::config::SpringConfig;

#[derive(Clone, Debug)]
pub struct Spring {
    cfg: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(cfg: SpringConfig, initial: f64) -> Self {
        Self { cfg, value: initial, velocity: 0.0, target: initial }
    }

    /// Step toward `target` by `dt` seconds and return the new value.
    ///
    /// A non-finite target or a non-positive `dt` leaves the state alone.
    pub fn update(&mut self, target: f64, dt: f64) -> f64 {
        if !target.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        self.target = target;
        if self.is_at_rest() {
            return self.value;
        }

        let (d, v) = self.solve(self.value - target, self.velocity, dt);
        self.value = target + d;
        self.velocity = v;

        if d.abs() < self.cfg.rest_delta && v.abs() < self.cfg.rest_speed {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Snap to `value` with no motion.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn value(&self) -> f64 { self.value }
    pub fn velocity(&self) -> f64 { self.velocity }
    pub fn target(&self) -> f64 { self.target }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    // Displacement and velocity after t seconds, starting from (d0, v0).
    fn solve(&self, d0: f64, v0: f64, t: f64) -> (f64, f64) {
        let SpringConfig { stiffness: k, damping: c, mass: m, .. } = self.cfg;
        let omega = (k / m).sqrt();
        let zeta = c / (2.0 * (k * m).sqrt());

        if (zeta - 1.0).abs() < 1e-9 {
            // Critically damped
            let b = v0 + omega * d0;
            let e = (-omega * t).exp();
            (e * (d0 + b * t), e * (v0 - omega * b * t))
        } else if zeta < 1.0 {
            // Underdamped
            let a = zeta * omega;
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let cc = (v0 + a * d0) / wd;
            let e = (-a * t).exp();
            let (s, co) = (wd * t).sin_cos();
            (
                e * (d0 * co + cc * s),
                e * (v0 * co - (a * cc + d0 * wd) * s),
            )
        } else {
            // Overdamped
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let a = (v0 - r2 * d0) / (r1 - r2);
            let b = d0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
        }
    }
}
