//! Unit-scale projection formulas.
//!
//! All functions take radians and return coordinates with y pointing *up*; callers flip y when
//! mapping into screen space.

const EE_A1: f64 = 1.340264;
const EE_A2: f64 = -0.081106;
const EE_A3: f64 = 0.000893;
const EE_A4: f64 = 0.003796;

/// Equal Earth (Šavrič, Patterson & Jenny 2018), an equal-area pseudocylindrical projection.
pub(crate) fn equal_earth(lambda: f64, phi: f64) -> (f64, f64) {
    let m = 3f64.sqrt() / 2.0;
    let l = (m * phi.sin()).asin();
    let l2 = l * l;
    let l6 = l2 * l2 * l2;
    let x = lambda * l.cos() / (m * (EE_A1 + 3.0 * EE_A2 * l2 + l6 * (7.0 * EE_A3 + 9.0 * EE_A4 * l2)));
    let y = l * (EE_A1 + EE_A2 * l2 + l6 * (EE_A3 + EE_A4 * l2));
    (x, y)
}

/// Albers conic equal-area projection with two standard parallels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
}

impl ConicEqualArea {
    pub(crate) fn new(parallel0_deg: f64, parallel1_deg: f64) -> Self {
        let sy0 = parallel0_deg.to_radians().sin();
        let n = (sy0 + parallel1_deg.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;
        Self { n, c, r0 }
    }

    pub(crate) fn project(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let a = lambda * self.n;
        (r * a.sin(), self.r0 - r * a.cos())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/raw.rs"]
mod tests;
