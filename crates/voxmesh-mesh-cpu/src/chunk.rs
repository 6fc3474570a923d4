use voxmesh_geom::Aabb;

use crate::mesh_build::MeshBuild;

/// CPU-side mesh of one chunk, ready to hand to a renderer.
#[derive(Clone, Debug)]
pub struct ChunkMeshCpu {
    pub bbox: Aabb,
    pub build: MeshBuild,
    pub stats: MeshStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub solid_voxels: usize,
    pub visible_faces: usize,
    pub vertices: usize,
    pub triangles: usize,
}
