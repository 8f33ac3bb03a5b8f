//! Particle corona: a warm shell of point sprites around the sun.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use orrery_mesh::{PointCloud, PointVertex};
use orrery_scene::{Color, Material, MaterialKind, Side};

/// Default number of corona particles.
pub const CORONA_PARTICLES: u32 = 2000;

/// Thickness of the corona shell beyond the sun's surface.
pub const CORONA_DEPTH: f32 = 15.0;

/// Scatter `count` warm-tinted particles in the shell `[radius, radius + CORONA_DEPTH]`.
///
/// Angles are drawn uniformly in spherical coordinates (`theta` in `[0, 2π)`,
/// `phi` in `[0, π)`), which clusters particles toward the poles. The clustering
/// is part of the look and is kept on purpose.
///
/// Color is `(i, 0.8 i, 0.3 i)` for a random intensity `i` in `[0.5, 1.0)`; size
/// is uniform in `[1, 4]`.
pub fn corona_points(rng: &mut impl Rng, radius: f32, count: u32) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(count as usize);

    for _ in 0..count {
        let r = radius + rng.random::<f32>() * CORONA_DEPTH;
        let theta = rng.random::<f32>() * TAU;
        let phi = rng.random::<f32>() * PI;

        let position = [
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ];

        let intensity = 0.5 + rng.random::<f32>() * 0.5;
        let color = [intensity, intensity * 0.8, intensity * 0.3];
        let size = 1.0 + rng.random::<f32>() * 3.0;

        cloud.points.push(PointVertex {
            position,
            color,
            size,
        });
    }

    cloud
}

/// Additive point material for the corona; color comes from the vertices.
pub(crate) fn corona_material() -> Material {
    Material {
        kind: MaterialKind::Points {
            size_attenuation: true,
            additive: true,
        },
        color: Color::WHITE,
        opacity: 0.8,
        transparent: true,
        side: Side::Front,
    }
}
