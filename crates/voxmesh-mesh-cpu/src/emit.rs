use voxmesh_chunk::Face;
use voxmesh_geom::{Aabb, Vec3};

// Corner indices per face, counter-clockwise seen from outside the box, indexed by `Face::index`.
const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 4, 6, 2], // PosY
    [5, 1, 3, 7], // NegY
    [6, 7, 3, 2], // PosX
    [0, 1, 5, 4], // NegX
    [4, 5, 7, 6], // PosZ
    [2, 3, 1, 0], // NegZ
];

#[inline]
fn box_corners(min: Vec3, max: Vec3) -> [Vec3; 8] {
    [
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(max.x, min.y, max.z),
    ]
}

/// The four corners of one box face. Triangles `(0,1,2)` and `(0,2,3)` wind outward.
#[inline]
pub(crate) fn face_quad(face: Face, bounds: Aabb) -> [Vec3; 4] {
    let corners = box_corners(bounds.min, bounds.max);
    FACE_CORNERS[face.index()].map(|c| corners[c])
}

/// Planar UV for a point on the given face, taken from the two in-plane world axes.
#[inline]
pub(crate) fn face_uv(face: Face, p: Vec3) -> (f32, f32) {
    match face {
        Face::PosY | Face::NegY => (p.x, p.z),
        Face::PosX | Face::NegX => (p.z, p.y),
        Face::PosZ | Face::NegZ => (p.x, p.y),
    }
}
