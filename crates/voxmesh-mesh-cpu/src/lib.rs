//! CPU meshing crate: per-voxel face-culling mesher and mesh buffer.
#![forbid(unsafe_code)]

mod build;
mod chunk;
mod constants;
mod emit;
mod mesh_build;

pub use build::{MeshOptions, NormalMode, build_chunk_mesh_cpu, count_visible_faces};
pub use chunk::{ChunkMeshCpu, MeshStats};
pub use mesh_build::{MeshArrays, MeshBuild};
