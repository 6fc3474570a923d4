//! Chunk population for the driver. The mesher does not care where voxels come from.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use voxmesh_chunk::{CHUNK_SIDE_I32, Chunk, Voxel};

use crate::config::{FillMode, Settings};

/// Overwrites every voxel of `chunk` according to `s.fill`.
pub fn fill_chunk(chunk: &mut Chunk, s: &Settings) {
    let solid = s.voxel;
    match s.fill {
        FillMode::Random => {
            let mut rng = fastrand::Rng::with_seed(s.seed as u64);
            chunk.fill_with(|_| if rng.f32() < s.density { solid } else { Voxel::AIR });
        }
        FillMode::Layers => {
            chunk.fill_with(|p| if p.y < s.height { solid } else { Voxel::AIR });
        }
        FillMode::Solid => chunk.fill_with(|_| solid),
        FillMode::Terrain => {
            let mut terrain = FastNoiseLite::with_seed(s.seed);
            terrain.set_noise_type(Some(NoiseType::OpenSimplex2));
            terrain.set_frequency(Some(s.frequency));
            chunk.fill_with(|p| {
                let h = terrain_height(&terrain, p.x, p.z);
                if p.y < h { solid } else { Voxel::AIR }
            });
        }
    }
    log::info!(
        "filled chunk: mode={:?} seed={} solid={}",
        s.fill,
        s.seed,
        chunk.solid_count()
    );
}

// Column height in [1, CHUNK_SIDE]; the floor layer is always solid.
fn terrain_height(noise: &FastNoiseLite, x: i32, z: i32) -> i32 {
    let n = ((noise.get_noise_2d(x as f32, z as f32) + 1.0) * 0.5).clamp(0.0, 1.0);
    ((n * CHUNK_SIDE_I32 as f32).round() as i32).clamp(1, CHUNK_SIDE_I32)
}
