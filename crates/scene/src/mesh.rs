//! Tessellated arc surfaces and the store that owns them.
//!
//! Each arrow owns two meshes: the visible one, regenerated every animation
//! tick as progress and score move, and a pick variant kept at full length.
//! A mesh remembers its arc frame and grid size so regeneration only needs
//! the parameters that actually change (profile, width, progress).
//!
//! Key properties:
//! - Vertices are laid out stacks-outer, slices-inner: vertex `(stack, slice)`
//!   lives at index `stack * (slices + 1) + slice`.
//! - Vertices are emitted in the render frame (y up), converted from the
//!   geographic frame at tessellation time.

use std::collections::BTreeMap;

use foundation::math::arc::{ArcFrame, ArcProfile, surface_point};
use foundation::math::{Vec3, spherical};

/// Handle to a mesh owned by a [`MeshStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshId(pub u64);

/// Tessellation density. `slices` runs along the arc, `stacks` across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub slices: u32,
    pub stacks: u32,
}

impl GridSize {
    pub fn new(slices: u32, stacks: u32) -> Self {
        Self { slices, stacks }
    }

    pub fn vertex_count(&self) -> usize {
        (self.slices as usize + 1) * (self.stacks as usize + 1)
    }
}

#[derive(Debug, Clone)]
pub struct ArcMesh {
    frame: ArcFrame,
    size: GridSize,
    vertices: Vec<Vec3>,
}

impl ArcMesh {
    pub fn frame(&self) -> &ArcFrame {
        &self.frame
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertex(&self, stack: u32, slice: u32) -> Vec3 {
        self.vertices[stack as usize * (self.size.slices as usize + 1) + slice as usize]
    }
}

fn tessellate(
    frame: &ArcFrame,
    size: GridSize,
    profile: ArcProfile,
    width: f64,
    progress: f64,
) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(size.vertex_count());
    for stack in 0..=size.stacks {
        let v = stack as f64 / size.stacks as f64;
        for slice in 0..=size.slices {
            let u = slice as f64 / size.slices as f64;
            let p = surface_point(*frame, profile, width, progress, u, v);
            vertices.push(spherical::to_render_frame(p));
        }
    }
    vertices
}

/// Owns every arc mesh in the scene, keyed by monotonically allocated ids.
#[derive(Debug, Default)]
pub struct MeshStore {
    next: u64,
    meshes: BTreeMap<MeshId, ArcMesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        frame: ArcFrame,
        size: GridSize,
        profile: ArcProfile,
        width: f64,
        progress: f64,
    ) -> MeshId {
        let id = MeshId(self.next);
        self.next += 1;
        let vertices = tessellate(&frame, size, profile, width, progress);
        self.meshes.insert(
            id,
            ArcMesh {
                frame,
                size,
                vertices,
            },
        );
        id
    }

    /// Re-tessellate a mesh in place with new parameters. Unknown ids are
    /// ignored.
    pub fn regenerate(&mut self, id: MeshId, profile: ArcProfile, width: f64, progress: f64) {
        if let Some(mesh) = self.meshes.get_mut(&id) {
            mesh.vertices = tessellate(&mesh.frame, mesh.size, profile, width, progress);
        }
    }

    pub fn remove(&mut self, id: MeshId) -> bool {
        self.meshes.remove(&id).is_some()
    }

    pub fn get(&self, id: MeshId) -> Option<&ArcMesh> {
        self.meshes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
