//! Orientation fix-up and Lawson edge flipping with exact predicates.
//!
//! Only edges shared by two triangles are candidates. In an even-odd fill a
//! contour edge always separates filled from unfilled space, so it bounds a
//! single triangle and is never flipped; the result is a constrained Delaunay
//! triangulation of the contours.

use std::collections::HashMap;

use config::constants::MAX_DELAUNAY_PASSES;
use glam::DVec2;
use robust::{incircle, orient2d, Coord};

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Twice the signed area of `(a, b, c)`; positive when counter-clockwise.
#[inline]
pub fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

/// Reorders every clockwise triangle to counter-clockwise.
pub fn orient_ccw(vertices: &[DVec2], triangles: &mut [[u32; 3]]) {
    for t in triangles.iter_mut() {
        let [a, b, c] = t.map(|i| vertices[i as usize]);
        if orientation(a, b, c) < 0.0 {
            t.swap(1, 2);
        }
    }
}

/// Flips non-Delaunay interior edges until none remain or the pass limit is
/// hit. Triangles must be counter-clockwise. Returns the number of flips.
pub fn refine(vertices: &[DVec2], triangles: &mut [[u32; 3]]) -> usize {
    let mut total = 0;
    for _ in 0..MAX_DELAUNAY_PASSES {
        let flips = flip_pass(vertices, triangles);
        total += flips;
        if flips == 0 {
            break;
        }
    }
    total
}

/// One sweep over all edges. A triangle takes part in at most one flip per
/// pass so the edge map built at the start stays valid.
fn flip_pass(vertices: &[DVec2], triangles: &mut [[u32; 3]]) -> usize {
    let mut edges: HashMap<(u32, u32), usize> = HashMap::with_capacity(triangles.len() * 3);
    for (ti, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            edges.insert((t[k], t[(k + 1) % 3]), ti);
        }
    }

    let mut touched = vec![false; triangles.len()];
    let mut flips = 0;

    for ti in 0..triangles.len() {
        if touched[ti] {
            continue;
        }
        for k in 0..3 {
            let t = triangles[ti];
            let (a, b, c) = (t[k], t[(k + 1) % 3], t[(k + 2) % 3]);
            let Some(&ui) = edges.get(&(b, a)) else {
                continue;
            };
            if ui == ti || touched[ui] {
                continue;
            }
            let u = triangles[ui];
            let Some(d) = u.iter().copied().find(|&v| v != a && v != b) else {
                continue;
            };

            let (pa, pb, pc, pd) = (
                vertices[a as usize],
                vertices[b as usize],
                vertices[c as usize],
                vertices[d as usize],
            );
            if incircle(coord(pa), coord(pb), coord(pc), coord(pd)) <= 0.0 {
                continue;
            }
            // The quad a-d-b-c must be strictly convex for the flip to keep
            // both triangles valid.
            if orientation(pa, pd, pc) <= 0.0 || orientation(pd, pb, pc) <= 0.0 {
                continue;
            }

            triangles[ti] = [a, d, c];
            triangles[ui] = [d, b, c];
            touched[ti] = true;
            touched[ui] = true;
            flips += 1;
            break;
        }
    }

    flips
}

/// True when no interior edge violates the empty-circumcircle property.
pub fn is_delaunay(vertices: &[DVec2], triangles: &[[u32; 3]]) -> bool {
    let mut edges: HashMap<(u32, u32), usize> = HashMap::with_capacity(triangles.len() * 3);
    for (ti, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            edges.insert((t[k], t[(k + 1) % 3]), ti);
        }
    }

    triangles.iter().enumerate().all(|(ti, t)| {
        (0..3).all(|k| {
            let (a, b, c) = (t[k], t[(k + 1) % 3], t[(k + 2) % 3]);
            let Some(&ui) = edges.get(&(b, a)) else {
                return true;
            };
            if ui == ti {
                return true;
            }
            let Some(d) = triangles[ui].iter().copied().find(|&v| v != a && v != b) else {
                return true;
            };
            let p = |i: u32| coord(vertices[i as usize]);
            let convex = orientation(
                vertices[a as usize],
                vertices[d as usize],
                vertices[c as usize],
            ) > 0.0
                && orientation(
                    vertices[d as usize],
                    vertices[b as usize],
                    vertices[c as usize],
                ) > 0.0;
            !convex || incircle(p(a), p(b), p(c), p(d)) <= 0.0
        })
    })
}
