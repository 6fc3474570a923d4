use voxmesh_chunk::{CubeInfo, Face};
use voxmesh_geom::{Aabb, Vec3};

use crate::constants::{
    DEFAULT_QUAD_CAPACITY, FLOATS_PER_POS, FLOATS_PER_UV, QUAD_INDICES, QUAD_VERTS, VERTS_PER_TRI,
};
use crate::emit::{face_quad, face_uv};

/// Append-only triangle mesh buffer.
///
/// Positions, normals and UVs are parallel per-vertex arrays; `idx` holds triangles as
/// index triples into them. Every index is below `vertex_count()`.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub(crate) pos: Vec<f32>,
    pub(crate) norm: Vec<f32>,
    pub(crate) uv: Vec<f32>,
    pub(crate) idx: Vec<u32>,
}

/// Final export of a [`MeshBuild`] for the renderer.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshArrays {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuild {
    /// Empty build with the default small reservation.
    pub fn new() -> Self {
        Self::with_quad_capacity(DEFAULT_QUAD_CAPACITY)
    }

    pub fn with_quad_capacity(n_quads: usize) -> Self {
        let mut mb = Self::default();
        mb.reserve_quads(n_quads);
        mb
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        let verts = n_quads * QUAD_VERTS;
        self.pos.reserve(verts * FLOATS_PER_POS);
        self.norm.reserve(verts * FLOATS_PER_POS);
        self.uv.reserve(verts * FLOATS_PER_UV);
        self.idx.reserve(n_quads * QUAD_INDICES.len());
    }

    /// Clears all arrays but retains capacity for reuse.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.idx.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / FLOATS_PER_POS
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / VERTS_PER_TRI
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty() && self.pos.is_empty()
    }

    /// Appends one piece of geometry whose `indices` are local to `positions`.
    ///
    /// Each index is shifted by the current vertex count so it addresses the same vertex
    /// after concatenation.
    ///
    /// # Panics
    /// If the arrays disagree on vertex count, an index addresses a vertex outside this
    /// call's `positions`, or the shifted indices do not fit in `u32`.
    pub fn append_raw(&mut self, positions: &[f32], normals: &[f32], uvs: &[f32], indices: &[u32]) {
        assert!(
            positions.len() % FLOATS_PER_POS == 0,
            "positions length {} is not a multiple of 3",
            positions.len()
        );
        let n = positions.len() / FLOATS_PER_POS;
        assert_eq!(normals.len(), positions.len(), "normals must match positions");
        assert_eq!(uvs.len(), n * FLOATS_PER_UV, "uvs must hold one pair per vertex");
        assert!(
            indices.len() % VERTS_PER_TRI == 0,
            "indices length {} is not a multiple of 3",
            indices.len()
        );
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= n) {
            panic!("index {bad} addresses a vertex outside this append ({n} vertices)");
        }
        let last = u32::try_from(n.saturating_sub(1)).ok();
        let Some(base) = u32::try_from(self.vertex_count())
            .ok()
            .filter(|&b| last.is_some_and(|l| b.checked_add(l).is_some()))
        else {
            panic!("mesh exceeds the u32 index range");
        };

        self.pos.extend_from_slice(positions);
        self.norm.extend_from_slice(normals);
        self.uv.extend_from_slice(uvs);
        self.idx.extend(indices.iter().map(|&i| base + i));
    }

    /// Concatenates another build onto this one, re-basing its indices.
    pub fn append_build(&mut self, other: &MeshBuild) {
        self.append_raw(&other.pos, &other.norm, &other.uv, &other.idx);
    }

    /// Merges independently built meshes (e.g. one per worker) in iteration order.
    pub fn concat<'a>(builds: impl IntoIterator<Item = &'a MeshBuild>) -> MeshBuild {
        let mut out = MeshBuild::default();
        for b in builds {
            out.append_build(b);
        }
        out
    }

    /// Appends one quad per visible face of `info`. Returns the number of faces written.
    pub fn add_box(&mut self, info: &CubeInfo) -> usize {
        let mut faces = 0;
        for face in info.visible_faces() {
            self.add_face_quad(face, info.bounds);
            faces += 1;
        }
        faces
    }

    /// Appends the quad covering `face` of `bounds`, with the face's outward normal and
    /// planar UVs.
    pub fn add_face_quad(&mut self, face: Face, bounds: Aabb) {
        let quad = face_quad(face, bounds);
        let n = face.normal().to_array();
        let mut pos = [0.0f32; QUAD_VERTS * FLOATS_PER_POS];
        let mut norm = [0.0f32; QUAD_VERTS * FLOATS_PER_POS];
        let mut uv = [0.0f32; QUAD_VERTS * FLOATS_PER_UV];
        for (i, p) in quad.into_iter().enumerate() {
            pos[i * 3..i * 3 + 3].copy_from_slice(&p.to_array());
            norm[i * 3..i * 3 + 3].copy_from_slice(&n);
            let (u, v) = face_uv(face, p);
            uv[i * 2] = u;
            uv[i * 2 + 1] = v;
        }
        self.append_raw(&pos, &norm, &uv, &QUAD_INDICES);
    }

    /// Position of vertex `v`.
    #[inline]
    pub fn vertex(&self, v: usize) -> Vec3 {
        Vec3::from_slice(&self.pos, v * FLOATS_PER_POS)
    }

    /// Normal of vertex `v`.
    #[inline]
    pub fn normal(&self, v: usize) -> Vec3 {
        Vec3::from_slice(&self.norm, v * FLOATS_PER_POS)
    }

    /// Corner positions of triangle `t`, in index order.
    #[inline]
    pub fn triangle(&self, t: usize) -> [Vec3; 3] {
        let base = t * VERTS_PER_TRI;
        [
            self.vertex(self.idx[base] as usize),
            self.vertex(self.idx[base + 1] as usize),
            self.vertex(self.idx[base + 2] as usize),
        ]
    }

    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangle_count()).map(|t| self.triangle(t))
    }

    /// Overwrites vertex normals with per-triangle flat normals `normalize((b-a) x (c-a))`.
    ///
    /// A vertex referenced by several triangles keeps the normal of the last one in index
    /// order. Degenerate triangles write a zero normal.
    pub fn recompute_flat_normals(&mut self) {
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            let n = (b - a).cross(c - a).normalized().to_array();
            for k in 0..VERTS_PER_TRI {
                let v = self.idx[t * VERTS_PER_TRI + k] as usize * FLOATS_PER_POS;
                self.norm[v..v + FLOATS_PER_POS].copy_from_slice(&n);
            }
        }
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }
    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }
    pub fn uvs(&self) -> &[f32] {
        &self.uv
    }
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    pub fn into_arrays(self) -> MeshArrays {
        MeshArrays {
            positions: self.pos,
            normals: self.norm,
            uvs: self.uv,
            indices: self.idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reserves_default_quads() {
        let mb = MeshBuild::new();
        assert!(mb.is_empty());
        assert!(mb.pos.capacity() >= DEFAULT_QUAD_CAPACITY * QUAD_VERTS * FLOATS_PER_POS);
        assert!(mb.idx.capacity() >= DEFAULT_QUAD_CAPACITY * 6);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut mb = MeshBuild::default();
        mb.add_box(&CubeInfo::all_visible(Aabb::unit_at(0, 0, 0)));
        let cap = mb.pos.capacity();
        mb.clear_keep_capacity();
        assert!(mb.is_empty());
        assert_eq!(mb.pos.capacity(), cap);
    }
}
