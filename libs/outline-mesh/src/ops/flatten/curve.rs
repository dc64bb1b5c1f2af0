//! Bézier evaluation and the two subdivision strategies.

use glam::DVec2;

/// A curve segment with its start point resolved from the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Quad {
        from: DVec2,
        ctrl: DVec2,
        to: DVec2,
    },
    Cubic {
        from: DVec2,
        ctrl1: DVec2,
        ctrl2: DVec2,
        to: DVec2,
    },
}

impl Curve {
    #[inline]
    pub fn from(&self) -> DVec2 {
        match *self {
            Curve::Quad { from, .. } | Curve::Cubic { from, .. } => from,
        }
    }

    #[inline]
    pub fn to(&self) -> DVec2 {
        match *self {
            Curve::Quad { to, .. } | Curve::Cubic { to, .. } => to,
        }
    }

    /// Point at parameter `t` (de Casteljau).
    pub fn eval(&self, t: f64) -> DVec2 {
        match *self {
            Curve::Quad { from, ctrl, to } => {
                let q0 = from.lerp(ctrl, t);
                let q1 = ctrl.lerp(to, t);
                q0.lerp(q1, t)
            }
            Curve::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let q0 = from.lerp(ctrl1, t);
                let q1 = ctrl1.lerp(ctrl2, t);
                let q2 = ctrl2.lerp(to, t);
                let r0 = q0.lerp(q1, t);
                let r1 = q1.lerp(q2, t);
                r0.lerp(r1, t)
            }
        }
    }

    /// The part of the curve between `t0` and `t1`, as a curve of the same
    /// degree. Control points come from the polar form (blossom).
    pub fn segment(&self, t0: f64, t1: f64) -> Curve {
        match *self {
            Curve::Quad { from, ctrl, to } => {
                let blossom = |u: f64, v: f64| from.lerp(ctrl, u).lerp(ctrl.lerp(to, u), v);
                Curve::Quad {
                    from: blossom(t0, t0),
                    ctrl: blossom(t0, t1),
                    to: blossom(t1, t1),
                }
            }
            Curve::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let blossom = |u: f64, v: f64, w: f64| {
                    let q0 = from.lerp(ctrl1, u);
                    let q1 = ctrl1.lerp(ctrl2, u);
                    let q2 = ctrl2.lerp(to, u);
                    q0.lerp(q1, v).lerp(q1.lerp(q2, v), w)
                };
                Curve::Cubic {
                    from: blossom(t0, t0, t0),
                    ctrl1: blossom(t0, t0, t1),
                    ctrl2: blossom(t0, t1, t1),
                    to: blossom(t1, t1, t1),
                }
            }
        }
    }

    /// Upper bound on the squared distance between the curve and its chord,
    /// both taken at the same parameter.
    ///
    /// Exact for quadratics, where the gap peaks at `t = 0.5`. For cubics
    /// the gap is `t(1 - t)((1 - t)u + tv)` with `u = 3p1 - 2p0 - p3` and
    /// `v = 3p2 - p0 - 2p3`, bounded per axis by the larger of `u` and `v`.
    pub fn chord_error_sq(&self) -> f64 {
        match *self {
            Curve::Quad { from, to, .. } => from.lerp(to, 0.5).distance_squared(self.eval(0.5)),
            Curve::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let u = 3.0 * ctrl1 - 2.0 * from - to;
                let v = 3.0 * ctrl2 - from - 2.0 * to;
                let u = u * u;
                let v = v * v;
                (u.x.max(v.x) + u.y.max(v.y)) / 16.0
            }
        }
    }
}

/// Emits line end points approximating `curve` within `tolerance`.
///
/// Each step proposes the parameter half a unit past the accepted one and
/// halves the step until the piece of curve it spans stays within
/// `tolerance` of its chord (see [`Curve::chord_error_sq`]), or
/// `max_subdivisions` halvings have been spent. For quadratics this is the
/// chord midpoint against the curve midpoint. The last point emitted is
/// always the exact curve end point.
///
/// Returns false if any step ran out of budget.
pub fn flatten_adaptive(
    curve: &Curve,
    tolerance: f64,
    max_subdivisions: u32,
    mut emit: impl FnMut(DVec2),
) -> bool {
    let max_error_sq = tolerance * tolerance;
    let mut converged = true;
    let mut subdivided = 0.0_f64;

    while subdivided < 1.0 {
        let mut candidate_t = (subdivided + 0.5).min(1.0);
        let mut subdivisions = 1;

        let candidate = loop {
            let candidate = curve.eval(candidate_t);
            if curve.segment(subdivided, candidate_t).chord_error_sq() <= max_error_sq {
                break candidate;
            }

            let next_t = subdivided + 0.5 * (candidate_t - subdivided);
            if subdivisions >= max_subdivisions || next_t <= subdivided {
                converged = false;
                break candidate;
            }
            candidate_t = next_t;
            subdivisions += 1;
        };

        subdivided = candidate_t;
        emit(if subdivided >= 1.0 { curve.to() } else { candidate });
    }

    converged
}

/// Emits `segments` evenly spaced line end points along `curve`.
pub fn flatten_uniform(curve: &Curve, segments: u32, mut emit: impl FnMut(DVec2)) {
    let segments = segments.max(1);
    for i in 1..segments {
        emit(curve.eval(i as f64 / segments as f64));
    }
    emit(curve.to());
}
