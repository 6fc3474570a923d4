use voxmesh_chunk::{CHUNK_SIDE, CHUNK_SIDE_I32, Chunk, Face, Voxel};
use voxmesh_geom::Vec3;
use voxmesh_mesh_cpu::{
    ChunkMeshCpu, MeshBuild, MeshOptions, NormalMode, build_chunk_mesh_cpu, count_visible_faces,
};

const STONE: Voxel = Voxel(1);

fn tri_area_sum(mb: &MeshBuild) -> f32 {
    mb.triangles()
        .map(|[a, b, c]| 0.5 * (b - a).cross(c - a).length())
        .sum()
}

// Counts exposed unit faces directly: a face counts when its neighbor is outside or air.
fn expected_surface_area_voxels(solid: &dyn Fn(i32, i32, i32) -> bool) -> usize {
    let s = CHUNK_SIDE_I32;
    let inside = |x: i32, y: i32, z: i32| (0..s).contains(&x) && (0..s).contains(&y) && (0..s).contains(&z);
    let mut area = 0;
    for z in 0..s {
        for y in 0..s {
            for x in 0..s {
                if !solid(x, y, z) {
                    continue;
                }
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                    if !inside(nx, ny, nz) || !solid(nx, ny, nz) {
                        area += 1;
                    }
                }
            }
        }
    }
    area
}

fn build(chunk: &Chunk) -> ChunkMeshCpu {
    build_chunk_mesh_cpu(chunk, &MeshOptions::default())
}

fn layered(height: i32) -> Chunk {
    let mut chunk = Chunk::new();
    chunk.fill_with(|p| if p.y < height { STONE } else { Voxel::AIR });
    chunk
}

// Collects (face, min corner of its quad) for every emitted quad, reading faces from the normals.
fn quads(mb: &MeshBuild) -> Vec<(Face, Vec3)> {
    (0..mb.vertex_count() / 4)
        .map(|q| {
            let n = mb.normal(q * 4);
            let face = Face::ALL
                .into_iter()
                .find(|f| f.normal() == n)
                .expect("axis-aligned normal");
            let min = (0..4).map(|k| mb.vertex(q * 4 + k)).fold(Vec3::splat(f32::MAX), |m, p| {
                Vec3::new(m.x.min(p.x), m.y.min(p.y), m.z.min(p.z))
            });
            (face, min)
        })
        .collect()
}

#[test]
fn empty_chunk_produces_empty_mesh() {
    let out = build(&Chunk::new());
    assert!(out.build.is_empty());
    assert_eq!(out.stats.visible_faces, 0);
    assert_eq!(out.stats.solid_voxels, 0);
}

#[test]
fn single_voxel_emits_a_closed_cube() {
    let mut chunk = Chunk::new();
    chunk.set(2, 3, 4, STONE);
    let out = build(&chunk);
    assert_eq!(out.stats.visible_faces, 6);
    assert_eq!(out.build.vertex_count(), 24);
    assert_eq!(out.build.triangle_count(), 12);
    assert!((tri_area_sum(&out.build) - 6.0).abs() < 1e-5);
}

#[test]
fn layered_chunk_emits_only_boundary_faces() {
    let chunk = layered(5);
    let out = build(&chunk);
    let side = CHUNK_SIDE as usize;
    // top + bottom planes, plus four walls of height 5
    assert_eq!(out.stats.visible_faces, 2 * side * side + 4 * side * 5);
    assert_eq!(out.stats.visible_faces, 288);
    assert_eq!(count_visible_faces(&chunk), 288);

    let s = CHUNK_SIDE as f32;
    for (face, min) in quads(&out.build) {
        match face {
            Face::PosY => assert_eq!(min.y, 5.0, "top faces only on the y=5 plane"),
            Face::NegY => assert_eq!(min.y, 0.0, "bottom faces only on the chunk floor"),
            Face::NegX => assert_eq!(min.x, 0.0),
            Face::PosX => assert_eq!(min.x, s),
            Face::NegZ => assert_eq!(min.z, 0.0),
            Face::PosZ => assert_eq!(min.z, s),
        }
        assert!(min.y < 5.0 || face == Face::PosY, "no faces above the solid layers");
    }
    let tops = quads(&out.build).into_iter().filter(|(f, _)| *f == Face::PosY).count();
    assert_eq!(tops, side * side);
}

#[test]
fn interior_voxels_emit_nothing() {
    let chunk = layered(5);
    let out = build(&chunk);
    // No quad lies strictly inside the solid region
    for (face, min) in quads(&out.build) {
        let on_boundary = match face {
            Face::PosX | Face::NegX => min.x == 0.0 || min.x == 8.0,
            Face::PosZ | Face::NegZ => min.z == 0.0 || min.z == 8.0,
            Face::PosY | Face::NegY => min.y == 0.0 || min.y == 5.0,
        };
        assert!(on_boundary, "{face:?} at {min:?}");
    }
}

#[test]
fn area_matches_exposed_faces_for_pseudo_random_fill() {
    let mut chunk = Chunk::new();
    // Random but deterministic pattern
    chunk.fill_with(|p| {
        let i = p.index().unwrap() as u64;
        let r = (i * 1664525 + 1013904223) & 0xFFFF_FFFF;
        if (r >> 7) & 1 == 0 { STONE } else { Voxel::AIR }
    });
    let out = build(&chunk);
    let expected = expected_surface_area_voxels(&|x, y, z| chunk.voxel(x, y, z).is_solid());
    assert_eq!(out.stats.visible_faces, expected);
    assert!((tri_area_sum(&out.build) - expected as f32).abs() < 1e-3);
}

#[test]
fn flat_and_face_normals_agree_for_box_meshes() {
    let mut chunk = Chunk::new();
    chunk.fill_with(|p| if (p.x + p.y * 3 + p.z * 5) % 4 == 0 { STONE } else { Voxel::AIR });
    let flat = build_chunk_mesh_cpu(&chunk, &MeshOptions { normals: NormalMode::Flat });
    let face = build_chunk_mesh_cpu(&chunk, &MeshOptions { normals: NormalMode::Face });
    assert_eq!(flat.build.positions(), face.build.positions());
    assert_eq!(flat.build.indices(), face.build.indices());
    assert_eq!(flat.build.normals(), face.build.normals());
    assert_eq!(flat.stats, face.stats);
}

#[test]
fn every_index_addresses_an_existing_vertex() {
    let chunk = layered(3);
    let out = build(&chunk);
    let n = out.build.vertex_count() as u32;
    assert!(out.build.indices().iter().all(|&i| i < n));
    assert_eq!(out.build.normals().len(), out.build.positions().len());
    assert_eq!(out.build.uvs().len() / 2, out.build.vertex_count());
    assert_eq!(out.bbox, Chunk::bounds());
}
