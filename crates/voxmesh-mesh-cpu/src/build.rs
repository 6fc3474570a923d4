use voxmesh_chunk::Chunk;

use crate::chunk::{ChunkMeshCpu, MeshStats};
use crate::mesh_build::MeshBuild;

/// How vertex normals are produced for a chunk mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalMode {
    /// Recompute flat per-triangle normals from the final geometry.
    #[default]
    Flat,
    /// Keep the outward face normals written during box emission.
    Face,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshOptions {
    pub normals: NormalMode,
}

/// Number of faces the culling mesher will emit for `chunk`.
pub fn count_visible_faces(chunk: &Chunk) -> usize {
    chunk
        .solid_cubes()
        .map(|(info, _)| info.visible_count())
        .sum()
}

/// Meshes every visible face of `chunk` into a single build.
///
/// Faces between two solid voxels are culled; faces on the chunk boundary are always
/// emitted because cells outside the chunk read as air.
pub fn build_chunk_mesh_cpu(chunk: &Chunk, opts: &MeshOptions) -> ChunkMeshCpu {
    let mut build = MeshBuild::with_quad_capacity(count_visible_faces(chunk));
    let mut visible_faces = 0usize;
    for (info, _sample) in chunk.solid_cubes() {
        visible_faces += build.add_box(&info);
    }
    if opts.normals == NormalMode::Flat {
        build.recompute_flat_normals();
    }
    let stats = MeshStats {
        solid_voxels: chunk.solid_count(),
        visible_faces,
        vertices: build.vertex_count(),
        triangles: build.triangle_count(),
    };
    log::debug!(
        "chunk mesh: solid={} faces={} verts={} tris={} normals={:?}",
        stats.solid_voxels,
        stats.visible_faces,
        stats.vertices,
        stats.triangles,
        opts.normals
    );
    ChunkMeshCpu {
        bbox: Chunk::bounds(),
        build,
        stats,
    }
}
