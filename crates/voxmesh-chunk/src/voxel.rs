use crate::{CHUNK_SIDE, CHUNK_SIDE_I32};

/// Opaque voxel type id. `0` is air; every other value is a solid, opaque type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Voxel(pub u32);

impl Voxel {
    pub const AIR: Voxel = Voxel(0);

    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }

    /// A voxel reveals the faces of its neighbors when it is empty.
    #[inline]
    pub const fn reveals_neighbor_faces(self) -> bool {
        self.is_air()
    }
}

impl From<u32> for Voxel {
    #[inline]
    fn from(id: u32) -> Self {
        Voxel(id)
    }
}

/// Chunk-local integer coordinate. May lie outside the chunk when produced by neighbor lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LocalPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shifted coordinate, or `None` if any axis leaves the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    #[inline]
    pub const fn in_chunk(self) -> bool {
        self.x >= 0
            && self.x < CHUNK_SIDE_I32
            && self.y >= 0
            && self.y < CHUNK_SIDE_I32
            && self.z >= 0
            && self.z < CHUNK_SIDE_I32
    }

    /// Linear storage index, or `None` outside the chunk.
    #[inline]
    pub fn index(self) -> Option<usize> {
        if self.in_chunk() {
            let (x, y, z) = (self.x as usize, self.y as usize, self.z as usize);
            Some(x + y * CHUNK_SIDE + z * CHUNK_SIDE * CHUNK_SIDE)
        } else {
            None
        }
    }
}

/// Result of a voxel query: the queried coordinate and the voxel found there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoxelSample {
    pub pos: LocalPos,
    pub voxel: Voxel,
}

impl VoxelSample {
    #[inline]
    pub const fn new(pos: LocalPos, voxel: Voxel) -> Self {
        Self { pos, voxel }
    }
}
