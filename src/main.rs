mod config;
mod export;
mod fill;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use voxmesh_chunk::Chunk;
use voxmesh_mesh_cpu::build_chunk_mesh_cpu;

use crate::config::{FillMode, MeshConfig, NormalsConfig, Settings};

#[derive(Parser, Debug)]
#[command(name = "voxmesh", about = "Fill an 8x8x8 voxel chunk and mesh its visible faces")]
struct Args {
    /// TOML file with default settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    fill: Option<FillMode>,
    #[arg(long)]
    seed: Option<i32>,
    /// Solid probability for the random fill
    #[arg(long)]
    density: Option<f32>,
    /// Solid layer count for the layers fill
    #[arg(long)]
    height: Option<i32>,
    /// Noise frequency for the terrain fill
    #[arg(long)]
    frequency: Option<f32>,
    #[arg(long, value_enum)]
    normals: Option<NormalsConfig>,
    /// Voxel id used for solid cells
    #[arg(long)]
    voxel: Option<u32>,
    /// Write the mesh as Wavefront OBJ
    #[arg(long)]
    obj: Option<PathBuf>,
    /// Log the final normal array at debug level
    #[arg(long)]
    dump_normals: bool,
}

impl Args {
    fn overrides(&self) -> MeshConfig {
        MeshConfig {
            fill: self.fill,
            seed: self.seed,
            density: self.density,
            height: self.height,
            frequency: self.frequency,
            normals: self.normals,
            voxel: self.voxel,
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let file_cfg = match &args.config {
        Some(path) => {
            log::info!("loading config {}", path.display());
            MeshConfig::from_path(path)?
        }
        None => MeshConfig::default(),
    };
    let settings = Settings::resolve(&file_cfg.overlay(args.overrides()))?;
    log::debug!("settings: {:?}", settings);

    let mut chunk = Chunk::new();
    fill::fill_chunk(&mut chunk, &settings);

    let mesh = build_chunk_mesh_cpu(&chunk, &settings.mesh_options());
    let st = mesh.stats;
    log::info!(
        "meshed chunk: solid={} faces={} verts={} tris={}",
        st.solid_voxels,
        st.visible_faces,
        st.vertices,
        st.triangles
    );
    if args.dump_normals {
        log::debug!("normals: {:?}", mesh.build.normals());
    }
    if let Some(path) = &args.obj {
        export::write_obj_file(&mesh.build, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
