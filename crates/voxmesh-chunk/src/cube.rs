use voxmesh_geom::Aabb;

use crate::face::Face;
use crate::voxel::VoxelSample;

/// The six axis neighbors of a voxel, as returned by `Chunk::neighbors`.
///
/// Naming: `top`/`bottom` are `±y`, `north`/`south` are `±z`, `west`/`east` are `+x`/`-x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub top: VoxelSample,
    pub bottom: VoxelSample,
    pub north: VoxelSample,
    pub south: VoxelSample,
    pub west: VoxelSample,
    pub east: VoxelSample,
}

impl Neighbors {
    #[inline]
    pub fn get(&self, face: Face) -> VoxelSample {
        match face {
            Face::PosY => self.top,
            Face::NegY => self.bottom,
            Face::PosZ => self.north,
            Face::NegZ => self.south,
            Face::PosX => self.west,
            Face::NegX => self.east,
        }
    }

    /// Turns neighbor samples into face flags: a face is visible iff the neighbor is air.
    pub fn to_cube_info(&self, bounds: Aabb) -> CubeInfo {
        CubeInfo {
            top: self.top.voxel.reveals_neighbor_faces(),
            bottom: self.bottom.voxel.reveals_neighbor_faces(),
            north: self.north.voxel.reveals_neighbor_faces(),
            south: self.south.voxel.reveals_neighbor_faces(),
            west: self.west.voxel.reveals_neighbor_faces(),
            east: self.east.voxel.reveals_neighbor_faces(),
            bounds,
        }
    }
}

/// Face-visibility flags plus the box those faces belong to. Input to `MeshBuild::add_box`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeInfo {
    pub top: bool,
    pub bottom: bool,
    pub north: bool,
    pub south: bool,
    pub west: bool,
    pub east: bool,
    pub bounds: Aabb,
}

impl CubeInfo {
    /// All six faces visible.
    pub const fn all_visible(bounds: Aabb) -> Self {
        Self {
            top: true,
            bottom: true,
            north: true,
            south: true,
            west: true,
            east: true,
            bounds,
        }
    }

    /// No face visible.
    pub const fn hidden(bounds: Aabb) -> Self {
        Self {
            top: false,
            bottom: false,
            north: false,
            south: false,
            west: false,
            east: false,
            bounds,
        }
    }

    #[inline]
    pub fn is_visible(&self, face: Face) -> bool {
        match face {
            Face::PosY => self.top,
            Face::NegY => self.bottom,
            Face::PosZ => self.north,
            Face::NegZ => self.south,
            Face::PosX => self.west,
            Face::NegX => self.east,
        }
    }

    #[inline]
    pub fn set_visible(&mut self, face: Face, visible: bool) {
        let flag = match face {
            Face::PosY => &mut self.top,
            Face::NegY => &mut self.bottom,
            Face::PosZ => &mut self.north,
            Face::NegZ => &mut self.south,
            Face::PosX => &mut self.west,
            Face::NegX => &mut self.east,
        };
        *flag = visible;
    }

    /// Visible faces in `Face::ALL` order.
    pub fn visible_faces(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL.into_iter().filter(|&f| self.is_visible(f))
    }

    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible_faces().count()
    }

    #[inline]
    pub fn any_visible(&self) -> bool {
        self.top || self.bottom || self.north || self.south || self.west || self.east
    }
}
