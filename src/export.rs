use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use voxmesh_mesh_cpu::MeshBuild;

/// Writes the mesh as Wavefront OBJ: `v`, `vt`, `vn` per vertex, then one `f` per triangle.
pub fn write_obj(mb: &MeshBuild, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "# voxmesh: {} vertices, {} triangles", mb.vertex_count(), mb.triangle_count())?;
    for p in mb.positions().chunks_exact(3) {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in mb.uvs().chunks_exact(2) {
        writeln!(out, "vt {} {}", uv[0], uv[1])?;
    }
    for n in mb.normals().chunks_exact(3) {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    // OBJ indices are 1-based; position, uv and normal share one numbering here
    for t in mb.indices().chunks_exact(3) {
        let (a, b, c) = (t[0] + 1, t[1] + 1, t[2] + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

pub fn write_obj_file(mb: &MeshBuild, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    write_obj(mb, &mut w)?;
    w.flush()?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmesh_chunk::{CubeInfo, Face};
    use voxmesh_geom::Aabb;

    #[test]
    fn obj_lists_every_attribute_and_face() {
        let mut mb = MeshBuild::default();
        let mut info = CubeInfo::hidden(Aabb::unit_at(0, 0, 0));
        info.set_visible(Face::PosY, true);
        mb.add_box(&info);

        let mut buf = Vec::new();
        write_obj(&mb, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), 4);
        assert_eq!(count("vt "), 4);
        assert_eq!(count("vn "), 4);
        assert_eq!(count("f "), 2);
        assert!(text.contains("f 1/1/1 2/2/2 3/3/3"));
        assert!(text.contains("vn 0 1 0"));
    }
}
