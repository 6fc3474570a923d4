//! Fixed-size voxel chunk storage and face-visibility derivation.
#![forbid(unsafe_code)]

pub mod cube;
pub mod face;
pub mod voxel;

pub use cube::{CubeInfo, Neighbors};
pub use face::Face;
pub use voxel::{LocalPos, Voxel, VoxelSample};

use voxmesh_geom::{Aabb, Vec3};

/// Side length of a chunk, in voxels.
pub const CHUNK_SIDE: usize = 8;
pub const CHUNK_SIDE_I32: i32 = CHUNK_SIDE as i32;
pub const CHUNK_VOLUME: usize = CHUNK_SIDE * CHUNK_SIDE * CHUNK_SIDE;

/// Dense `CHUNK_SIDE`³ grid of voxels. Index layout is `x + y*S + z*S*S` (x fastest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    blocks: Box<[Voxel]>,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// An all-air chunk.
    pub fn new() -> Self {
        Chunk {
            blocks: vec![Voxel::AIR; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Builds a chunk from linear storage. Short input is padded with air, long input truncated.
    pub fn from_voxels(voxels: Vec<Voxel>) -> Self {
        let mut b = voxels;
        if b.len() != CHUNK_VOLUME {
            b.resize(CHUNK_VOLUME, Voxel::AIR);
        }
        Chunk {
            blocks: b.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        x + y * CHUNK_SIDE + z * CHUNK_SIDE * CHUNK_SIDE
    }

    /// Inverse of [`Chunk::idx`].
    #[inline]
    pub fn pos_of(index: usize) -> LocalPos {
        debug_assert!(index < CHUNK_VOLUME, "voxel index {index} out of range");
        LocalPos::new(
            (index % CHUNK_SIDE) as i32,
            ((index / CHUNK_SIDE) % CHUNK_SIDE) as i32,
            (index / (CHUNK_SIDE * CHUNK_SIDE)) as i32,
        )
    }

    #[inline]
    pub fn contains(x: i32, y: i32, z: i32) -> bool {
        LocalPos::new(x, y, z).in_chunk()
    }

    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.blocks
    }

    /// Reads the voxel at `(x,y,z)`. Defined for every coordinate: cells outside the
    /// chunk read as air, which gives the chunk a closed outer shell when meshed alone.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> VoxelSample {
        let pos = LocalPos::new(x, y, z);
        let voxel = match pos.index() {
            Some(i) => self.blocks[i],
            None => Voxel::AIR,
        };
        VoxelSample { pos, voxel }
    }

    #[inline]
    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.get(x, y, z).voxel
    }

    /// Writes the voxel at `(x,y,z)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the chunk.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        let Some(i) = LocalPos::new(x, y, z).index() else {
            panic!("voxel write out of chunk bounds at ({x}, {y}, {z})");
        };
        self.blocks[i] = voxel;
    }

    /// Writes a sample back at its own coordinate. Same bounds contract as [`Chunk::set`].
    #[inline]
    pub fn set_sample(&mut self, sample: &VoxelSample) {
        self.set(sample.pos.x, sample.pos.y, sample.pos.z, sample.voxel);
    }

    /// Every chunk coordinate in storage order. Does not borrow the chunk, so callers may
    /// write voxels while walking it; read the current value at each step with [`Chunk::get`].
    /// Use [`Chunk::iter`] when coordinates and values are wanted without mutation.
    #[inline]
    pub fn positions() -> ChunkPositions {
        ChunkPositions { next: 0 }
    }

    /// Samples every voxel in storage order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = VoxelSample> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, &voxel)| VoxelSample::new(Chunk::pos_of(i), voxel))
    }

    /// Stores `f(pos)` at every coordinate, visiting them in storage order.
    pub fn fill_with(&mut self, mut f: impl FnMut(LocalPos) -> Voxel) {
        for (i, slot) in self.blocks.iter_mut().enumerate() {
            *slot = f(Chunk::pos_of(i));
        }
    }

    /// The six face-adjacent samples of `(x,y,z)`. Defined for every coordinate.
    pub fn neighbors(&self, x: i32, y: i32, z: i32) -> Neighbors {
        let at = LocalPos::new(x, y, z);
        Neighbors {
            top: self.neighbor(at, Face::PosY),
            bottom: self.neighbor(at, Face::NegY),
            north: self.neighbor(at, Face::PosZ),
            south: self.neighbor(at, Face::NegZ),
            west: self.neighbor(at, Face::PosX),
            east: self.neighbor(at, Face::NegX),
        }
    }

    // A step past the i32 range is outside the chunk: air, at the wrapped coordinate.
    fn neighbor(&self, at: LocalPos, face: Face) -> VoxelSample {
        let (dx, dy, dz) = face.delta();
        match at.offset(dx, dy, dz) {
            Some(p) => self.get(p.x, p.y, p.z),
            None => VoxelSample::new(
                LocalPos::new(at.x.wrapping_add(dx), at.y.wrapping_add(dy), at.z.wrapping_add(dz)),
                Voxel::AIR,
            ),
        }
    }

    /// Face flags for the voxel at `(x,y,z)`: a face is visible iff its neighbor is air.
    /// Neighbors outside the chunk count as air.
    pub fn face_visibility(&self, x: i32, y: i32, z: i32) -> CubeInfo {
        self.neighbors(x, y, z).to_cube_info(Aabb::unit_at(x, y, z))
    }

    /// `(CubeInfo, sample)` for every voxel, air included; callers skip air themselves.
    pub fn cube_infos(&self) -> impl Iterator<Item = (CubeInfo, VoxelSample)> + '_ {
        self.iter().map(|s| {
            let info = self.face_visibility(s.pos.x, s.pos.y, s.pos.z);
            (info, s)
        })
    }

    /// Like [`Chunk::cube_infos`] but only solid voxels with at least one visible face.
    pub fn solid_cubes(&self) -> impl Iterator<Item = (CubeInfo, VoxelSample)> + '_ {
        self.iter().filter(|s| s.voxel.is_solid()).filter_map(|s| {
            let info = self.face_visibility(s.pos.x, s.pos.y, s.pos.z);
            info.any_visible().then_some((info, s))
        })
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| b.is_solid())
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }

    #[inline]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Chunk-local bounds, `[0, CHUNK_SIDE]` on every axis.
    #[inline]
    pub fn bounds() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::splat(CHUNK_SIDE as f32))
    }
}

/// Restartable walk over all chunk coordinates in storage order (x fastest, then y, then z).
#[derive(Clone, Debug)]
pub struct ChunkPositions {
    next: usize,
}

impl Iterator for ChunkPositions {
    type Item = LocalPos;

    #[inline]
    fn next(&mut self) -> Option<LocalPos> {
        if self.next >= CHUNK_VOLUME {
            return None;
        }
        let p = Chunk::pos_of(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = CHUNK_VOLUME.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ChunkPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_of_matches_storage_order() {
        assert_eq!(Chunk::pos_of(0), LocalPos::new(0, 0, 0));
        assert_eq!(Chunk::pos_of(1), LocalPos::new(1, 0, 0));
        assert_eq!(Chunk::pos_of(CHUNK_SIDE), LocalPos::new(0, 1, 0));
        assert_eq!(Chunk::pos_of(CHUNK_SIDE * CHUNK_SIDE), LocalPos::new(0, 0, 1));
        assert_eq!(Chunk::pos_of(CHUNK_VOLUME - 1), LocalPos::new(7, 7, 7));
    }

    #[test]
    fn from_voxels_pads_to_volume() {
        let c = Chunk::from_voxels(vec![Voxel(3); 10]);
        assert_eq!(c.voxels().len(), CHUNK_VOLUME);
        assert_eq!(c.solid_count(), 10);
        // index 9 is (1, 1, 0), index 10 is (2, 1, 0)
        assert_eq!(c.voxel(1, 1, 0), Voxel(3));
        assert_eq!(c.voxel(2, 1, 0), Voxel::AIR);
    }

    #[test]
    fn offset_reports_i32_overflow() {
        let p = LocalPos::new(1, 2, 3);
        assert_eq!(p.offset(-1, 0, 1), Some(LocalPos::new(0, 2, 4)));
        assert_eq!(LocalPos::new(i32::MAX, 0, 0).offset(1, 0, 0), None);
        assert_eq!(LocalPos::new(0, i32::MIN, 0).offset(0, -1, 0), None);
        assert_eq!(LocalPos::new(0, 0, i32::MIN).offset(0, 0, 1), Some(LocalPos::new(0, 0, i32::MIN + 1)));
    }

    #[test]
    #[should_panic(expected = "out of chunk bounds")]
    fn set_out_of_range_panics() {
        let mut c = Chunk::new();
        c.set(0, CHUNK_SIDE_I32, 0, Voxel(1));
    }

    #[test]
    fn positions_is_restartable() {
        let a: Vec<_> = Chunk::positions().collect();
        let b: Vec<_> = Chunk::positions().collect();
        assert_eq!(a.len(), CHUNK_VOLUME);
        assert_eq!(a, b);
        assert_eq!(Chunk::positions().len(), CHUNK_VOLUME);
    }
}
