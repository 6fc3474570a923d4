//! Shared constants for voxmesh-mesh-cpu. Centralizes buffer layout numbers.

pub(crate) const FLOATS_PER_POS: usize = 3;
pub(crate) const FLOATS_PER_UV: usize = 2;
pub(crate) const VERTS_PER_TRI: usize = 3;

// One quad = 4 vertices, 2 triangles
pub(crate) const QUAD_VERTS: usize = 4;
pub(crate) const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Default pre-reservation, in quads, for a fresh build.
pub(crate) const DEFAULT_QUAD_CAPACITY: usize = 32;
