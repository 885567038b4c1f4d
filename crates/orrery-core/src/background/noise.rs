//! Scalar helpers for the background field, with GPU shading-language
//! semantics (`fract` is `x - floor(x)`, not truncation).

use glam::Vec3;

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn fract3(v: Vec3) -> Vec3 {
    v - v.floor()
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Hermite step between two edges. Reversed edges (`e0 > e1`) give a falling
/// curve; equal edges degrade to a hard step.
#[inline]
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e0 == e1 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Deterministic value in [0, 1) from a lattice point.
#[inline]
pub fn hash(p: Vec3) -> f32 {
    let mut p = fract3(p * Vec3::new(0.1031, 0.11369, 0.13787));
    p += Vec3::splat(p.dot(Vec3::new(p.y, p.z, p.x) + Vec3::splat(19.19)));
    fract((p.x + p.y) * p.z)
}

#[inline]
fn hash1(n: f32) -> f32 {
    hash(Vec3::splat(n))
}

/// Trilinear value noise with smoothed interpolation weights.
pub fn noise(p: Vec3) -> f32 {
    let i = p.floor();
    let f = fract3(p);
    let f = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let n = i.x + i.y * 157.0 + 113.0 * i.z;
    mix(
        mix(
            mix(hash1(n), hash1(n + 1.0), f.x),
            mix(hash1(n + 157.0), hash1(n + 158.0), f.x),
            f.y,
        ),
        mix(
            mix(hash1(n + 113.0), hash1(n + 114.0), f.x),
            mix(hash1(n + 270.0), hash1(n + 271.0), f.x),
            f.y,
        ),
        f.z,
    )
}

/// Five octaves of `noise`, halving amplitude and doubling frequency.
pub fn fbm(mut p: Vec3) -> f32 {
    let mut f = 0.0;
    let mut a = 0.5;
    for _ in 0..5 {
        f += a * noise(p);
        p *= 2.0;
        a *= 0.5;
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fract_floors_negatives() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert!((fract(2.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hash_stays_in_unit_interval() {
        for i in 0..2000 {
            let p = Vec3::new(i as f32 * 0.37, -(i as f32) * 1.9, i as f32 * 13.1);
            let h = hash(p);
            assert!((0.0..1.0).contains(&h), "hash({:?}) = {}", p, h);
        }
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // reversed edges fall off
        assert_eq!(smoothstep(0.5, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(0.5, 0.0, 0.6), 0.0);
        assert_eq!(smoothstep(0.0, 0.0, 0.3), 1.0);
    }

    #[test]
    fn fbm_is_bounded() {
        for i in 0..500 {
            let v = fbm(Vec3::new(i as f32 * 0.11, i as f32 * 0.07, -(i as f32) * 0.05));
            assert!((0.0..=1.0).contains(&v), "fbm = {}", v);
        }
    }

    #[test]
    fn noise_is_continuous_across_cells() {
        let a = noise(Vec3::new(0.9999, 0.3, 0.6));
        let b = noise(Vec3::new(1.0001, 0.3, 0.6));
        assert!((a - b).abs() < 1e-2);
    }
}
