//! Handles and descriptors exchanged with the scene graph.

use std::fmt;

use glam::{EulerRot, Mat4, Quat, Vec3};

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

handle!(
    /// Handle to a node in the scene graph.
    NodeId,
    "node"
);
handle!(
    /// Handle to an engine-side geometry buffer.
    GeometryId,
    "geometry"
);
handle!(
    /// Handle to an engine-side material.
    MaterialId,
    "material"
);

/// Linear RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Channels as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// Local transform of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Rotation as XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation, or scaling.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform moved to `translation`.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Rotation as a quaternion.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-parent matrix.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}

/// Which triangle faces a material renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Front faces only.
    Front,
    /// Back faces only. Used for halo shells seen from outside.
    Back,
    /// Both faces.
    Double,
}

/// Shading model of a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialKind {
    /// Lit physically based surface.
    Standard {
        /// Surface roughness in [0, 1].
        roughness: f32,
        /// Metalness in [0, 1].
        metalness: f32,
        /// Use per-face normals instead of interpolated ones.
        flat_shading: bool,
    },
    /// Unlit solid color.
    Basic,
    /// Point sprites using per-vertex color and size.
    Points {
        /// Shrink points with distance from the camera.
        size_attenuation: bool,
        /// Blend additively instead of alpha-over.
        additive: bool,
    },
}

/// Material descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Shading model.
    pub kind: MaterialKind,
    /// Base color.
    pub color: Color,
    /// Opacity in [0, 1]; only honored when `transparent` is set.
    pub opacity: f32,
    /// Enable alpha blending.
    pub transparent: bool,
    /// Rendered faces.
    pub side: Side,
}

impl Material {
    /// Opaque lit material of the given color.
    pub fn standard(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            kind: MaterialKind::Standard {
                roughness,
                metalness,
                flat_shading: false,
            },
            color,
            opacity: 1.0,
            transparent: false,
            side: Side::Front,
        }
    }

    /// Opaque unlit material of the given color.
    pub fn basic(color: Color) -> Self {
        Self {
            kind: MaterialKind::Basic,
            color,
            opacity: 1.0,
            transparent: false,
            side: Side::Front,
        }
    }
}

/// Omnidirectional light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Light color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Maximum range; zero means unlimited.
    pub distance: f32,
    /// Falloff exponent.
    pub decay: f32,
}

/// What a node renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// Transform-only container.
    Group,
    /// Triangle mesh.
    Mesh {
        /// Geometry buffer.
        geometry: GeometryId,
        /// Surface material.
        material: MaterialId,
    },
    /// Point cloud.
    Points {
        /// Point buffer.
        geometry: GeometryId,
        /// Point material.
        material: MaterialId,
    },
    /// Light source.
    PointLight(PointLight),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
        let c = Color::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_transform_matrix_applies_translation_after_rotation() {
        let t = Transform {
            translation: Vec3::new(10.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            scale: Vec3::splat(2.0),
        };
        let p = t.to_matrix().transform_point3(Vec3::X);
        // X rotated 90° about Y is -Z, scaled by 2, then moved.
        assert!((p - Vec3::new(10.0, 0.0, -2.0)).length() < 1e-5, "got {p}");
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(NodeId(3).to_string(), "node#3");
        assert_eq!(GeometryId(7).to_string(), "geometry#7");
    }
}
