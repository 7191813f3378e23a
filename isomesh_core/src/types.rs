//! Core types for isomesh_core.
//!
//! Provides the point type, lattice coordinates and the per-cell configuration index.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 3D point with named fields for clarity.
///
/// Used for both positions and direction vectors (normals, edge deltas).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new Point3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Point3 with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Linear interpolation: `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Normalize to unit length. A zero vector stays zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::splat(0.0)
        } else {
            self / len
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// Integer coordinates of a lattice sample point (or of a cell's minimum corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LatticeCoord {
    /// X index.
    pub x: u32,
    /// Y index.
    pub y: u32,
    /// Z index.
    pub z: u32,
}

impl LatticeCoord {
    /// Create a new LatticeCoord.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// Coordinate offset by a corner offset `(dx, dy, dz)`.
    #[inline]
    pub const fn offset(&self, (dx, dy, dz): (u32, u32, u32)) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Flat index into an x-fastest array with the given extents.
    ///
    /// `index = x + y * nx + z * nx * ny`
    #[inline]
    pub const fn flat_index(&self, extent: [u32; 3]) -> usize {
        let [nx, ny, _] = extent;
        self.x as usize + self.y as usize * nx as usize + self.z as usize * nx as usize * ny as usize
    }

    /// Inverse of [`LatticeCoord::flat_index`].
    #[inline]
    pub const fn from_flat_index(index: usize, extent: [u32; 3]) -> Self {
        let nx = extent[0] as usize;
        let ny = extent[1] as usize;
        Self {
            x: (index % nx) as u32,
            y: ((index / nx) % ny) as u32,
            z: (index / (nx * ny)) as u32,
        }
    }
}

impl From<[u32; 3]> for LatticeCoord {
    #[inline]
    fn from([x, y, z]: [u32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// 8-bit sign configuration of a cell: bit `i` set means corner `i` is inside.
///
/// Wrapping a `u8` makes an out-of-range table lookup unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeIndex(pub u8);

impl CubeIndex {
    /// Every corner outside.
    pub const EMPTY: Self = Self(0);
    /// Every corner inside.
    pub const FULL: Self = Self(0xff);

    /// Whether corner `corner` (0-7) is inside.
    #[inline]
    pub const fn is_inside(self, corner: usize) -> bool {
        (self.0 >> (corner & 7)) & 1 == 1
    }

    /// True for the all-inside and all-outside configurations.
    #[inline]
    pub const fn is_trivial(self) -> bool {
        self.0 == Self::EMPTY.0 || self.0 == Self::FULL.0
    }

    /// Table row for this configuration.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}
