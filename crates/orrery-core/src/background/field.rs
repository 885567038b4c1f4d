/// Procedural sky: twinkling star lattice, a sweeping falling star, a warm
/// glow spot and faint nebula clouds.
///
/// `color` depends only on view direction and time, so the sky sphere can be
/// recentred on the camera every frame without the pattern shifting.

use std::f32::consts::{PI, TAU};
use glam::Vec3;
use super::noise::{fbm, fract3, hash, smoothstep};

const BASE_COLOR: Vec3 = Vec3::new(0.01, 0.01, 0.02);
const FALLING_STAR_TINT: Vec3 = Vec3::new(0.3, 0.4, 0.7);
const FALLING_STAR_HALF_LENGTH: f32 = 0.04;
const GLOW_CENTER: Vec3 = Vec3::new(0.0, 0.07, 0.0);
const GLOW_TINT: Vec3 = Vec3::new(0.7, 0.5, 0.0);
const GLOW_STRENGTH: f32 = 0.09;
const NEBULA_INTENSITY: f32 = 0.05;
const NEBULA_DRIFT: f32 = 0.005;
/// Lattice cells whose hash exceeds this host a star.
const STAR_DENSITY_CUTOFF: f32 = 0.98;

/// (scale, tint) per star layer; the falloff width of each layer pulses
/// with its own phase of time.
const STAR_LAYERS: [(f32, Vec3); 4] = [
    (550.0, Vec3::new(0.5, 0.28, 0.73)),
    (500.0, Vec3::new(0.3, 0.6, 0.73)),
    (400.0, Vec3::new(0.5, 0.58, 0.43)),
    (500.0, Vec3::new(0.2, 0.2, 0.8)),
];

/// (sample scale, threshold low, threshold high, tint) per nebula band.
const NEBULA_BANDS: [(f32, f32, f32, Vec3); 4] = [
    (1.5, 0.3, 0.7, Vec3::new(0.2, 0.3, 0.8)), // deep blue
    (2.0, 0.4, 0.6, Vec3::new(0.4, 0.2, 0.9)), // purple
    (1.0, 0.2, 0.8, Vec3::new(0.3, 0.5, 0.9)), // light blue
    (1.7, 0.5, 0.9, Vec3::new(0.2, 0.8, 0.3)), // green
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundField {
    /// Vertical resolution in pixels; sets the falling star's thickness.
    pub resolution_y: f32,
}

impl Default for BackgroundField {
    fn default() -> Self {
        Self { resolution_y: 1080.0 }
    }
}

impl BackgroundField {
    pub fn new(resolution_y: f32) -> Self {
        Self { resolution_y }
    }

    /// Sky color for a view direction at `time` seconds. Not tone-mapped;
    /// components may exceed 1.
    pub fn color(&self, direction: Vec3, time: f32) -> Vec3 {
        let dir = direction.normalize_or_zero();

        let sweep = Vec3::new((time / 4.0).tan(), 0.0, 0.0);
        let streak = self.falling_star(
            rotate_half_turn(dir),
            Vec3::new(-FALLING_STAR_HALF_LENGTH, 0.0, 0.0) + sweep,
            Vec3::new(FALLING_STAR_HALF_LENGTH, 0.0, 0.0) + sweep,
        );

        let pulses = [
            (time / 2.0).sin().abs() / 2.0,
            (time / 2.0).cos().abs() / 2.0,
            time.cos().abs() / 2.0,
            time.sin().abs() / 2.0,
        ];
        let stars = STAR_LAYERS
            .iter()
            .zip(pulses)
            .fold(Vec3::ZERO, |acc, (&(scale, tint), width)| {
                acc + star_layer(dir * scale, width) * tint
            });

        BASE_COLOR + streak * FALLING_STAR_TINT + stars + glow(dir) + nebula(dir, time)
    }

    /// Bright streak where `p` lies close to the segment `a..b`; brighter and
    /// wider toward `b`.
    fn falling_star(&self, p: Vec3, a: Vec3, b: Vec3) -> f32 {
        let p = p - a;
        let b = b - a;
        let h = (p.dot(b) / b.dot(b)).clamp(0.0, 1.0);
        let off = p - b * h;
        h * smoothstep(2.0 * h / self.resolution_y, 0.0, off.length())
    }

    /// Evaluate the field over an equirectangular grid, row-major from the
    /// north pole, for renderers that cannot run it per fragment. A grid too
    /// large to address yields an empty image.
    pub fn bake_equirect(&self, width: usize, height: usize, time: f32) -> Vec<[f32; 3]> {
        let texel_bytes = std::mem::size_of::<[f32; 3]>();
        let Some(texels) = width
            .checked_mul(height)
            .filter(|n| n.checked_mul(texel_bytes).is_some_and(|b| b <= isize::MAX as usize))
        else {
            log::warn!("background bake {}x{} is too large", width, height);
            return Vec::new();
        };
        let mut out = Vec::with_capacity(texels);
        for row in 0..height {
            let v = (row as f32 + 0.5) / height as f32;
            for col in 0..width {
                let u = (col as f32 + 0.5) / width as f32;
                out.push(self.color(equirect_direction(u, v), time).to_array());
            }
        }
        out
    }
}

/// Sparse points on the scaled lattice: lit where the cell hash passes the
/// density cutoff, fading out `width` from the cell centre.
fn star_layer(d: Vec3, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    let falloff = smoothstep(width, 0.0, (fract3(d) - Vec3::splat(0.5)).length());
    falloff * smoothstep(STAR_DENSITY_CUTOFF, 1.0, hash(d.floor()))
}

/// Inverse-distance glow around a fixed point just above the origin.
fn glow(dir: Vec3) -> Vec3 {
    GLOW_STRENGTH / (dir - GLOW_CENTER).length() * GLOW_TINT
}

fn nebula(dir: Vec3, time: f32) -> Vec3 {
    let p = dir * 2.0 + Vec3::splat(time * NEBULA_DRIFT);
    let color = NEBULA_BANDS
        .iter()
        .fold(Vec3::ZERO, |acc, &(scale, lo, hi, tint)| {
            acc + tint * smoothstep(lo, hi, fbm(p * scale))
        });
    color * (smoothstep(0.2, 0.8, fbm(p)) * NEBULA_INTENSITY)
}

/// Half turn about Z, applied as row-vector times matrix.
fn rotate_half_turn(v: Vec3) -> Vec3 {
    // Truncated pi.
    let (s, c) = 3.141592_f32.sin_cos();
    Vec3::new(c * v.x - s * v.y, s * v.x + c * v.y, v.z)
}

/// `u` wraps longitude from -PI, `v` runs from +Y (0) to -Y (1).
pub fn equirect_direction(u: f32, v: f32) -> Vec3 {
    let lon = u * TAU - PI;
    let lat = PI / 2.0 - v * PI;
    Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_bit_identical_for_same_inputs() {
        let field = BackgroundField::default();
        let dir = Vec3::new(0.3, -0.5, 0.81);
        for &t in &[0.0, 1.7, 123.25, 4000.0] {
            let a = field.color(dir, t);
            let b = field.color(dir, t);
            assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn direction_length_does_not_matter() {
        let field = BackgroundField::default();
        let dir = Vec3::new(-0.2, 0.4, 0.9);
        let a = field.color(dir, 3.0);
        let b = field.color(dir * 250.0, 3.0);
        assert!(a.distance(b) < 1e-3);
    }

    #[test]
    fn sky_never_darker_than_base() {
        let field = BackgroundField::default();
        for (i, texel) in field.bake_equirect(32, 16, 5.0).iter().enumerate() {
            assert!(texel.iter().all(|c| c.is_finite()), "texel {} not finite", i);
            assert!(texel[0] >= BASE_COLOR.x && texel[2] >= BASE_COLOR.z);
        }
    }

    #[test]
    fn glow_spot_brightens_toward_its_centre() {
        let up = glow(Vec3::Y);
        let side = glow(Vec3::X);
        assert!(up.x > side.x);
        assert_eq!(up.z, 0.0);
    }

    #[test]
    fn star_layer_is_dark_with_zero_width() {
        assert_eq!(star_layer(Vec3::new(10.5, 20.5, 30.5), 0.0), 0.0);
    }

    #[test]
    fn falling_star_lights_its_segment() {
        let field = BackgroundField::default();
        let a = Vec3::new(-0.04, 0.0, 0.0);
        let b = Vec3::new(0.04, 0.0, 0.0);
        let on = field.falling_star(Vec3::new(0.03, 0.0, 0.0), a, b);
        let off = field.falling_star(Vec3::new(0.03, 0.5, 0.0), a, b);
        assert!(on > 0.8);
        assert_eq!(off, 0.0);
    }

    #[test]
    fn bake_has_expected_size() {
        let field = BackgroundField::default();
        assert_eq!(field.bake_equirect(8, 4, 0.0).len(), 32);
    }

    #[test]
    fn oversized_bake_is_empty() {
        let field = BackgroundField::default();
        assert!(field.bake_equirect(usize::MAX, 2, 0.0).is_empty());
        assert!(field.bake_equirect(usize::MAX / 4, 1, 0.0).is_empty());
    }

    #[test]
    fn equirect_poles_and_front() {
        assert!(equirect_direction(0.5, 0.0).distance(Vec3::Y) < 1e-5);
        assert!(equirect_direction(0.5, 0.5).distance(Vec3::Z) < 1e-5);
    }
}
