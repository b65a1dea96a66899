use scene::Arrows;
use scene::mesh::MeshId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    /// Visible arc pass.
    Arc { mesh: MeshId, color: [f32; 3] },
    /// Flat-color arc for the offscreen pick pass.
    PickArc { mesh: MeshId, color: [u8; 3] },
}

#[derive(Debug, Default)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    /// Visible-pass commands, one per live arrow in name order. The
    /// highlighted arrow (if any) gets `highlight_color`.
    pub fn collect(
        arrows: &Arrows,
        color: [f32; 3],
        highlight_color: [f32; 3],
        highlighted: Option<&str>,
    ) -> RenderFrame {
        let mut frame = RenderFrame::default();
        for (name, arrow) in arrows.iter() {
            let color = if highlighted == Some(name) {
                highlight_color
            } else {
                color
            };
            frame.commands.push(RenderCommand::Arc {
                mesh: arrow.mesh,
                color,
            });
        }
        frame
    }

    /// Pick-pass commands: every arrow's full-length mesh painted with its
    /// encoded pick id.
    pub fn collect_pickmap(arrows: &Arrows) -> RenderFrame {
        let mut frame = RenderFrame::default();
        for (_, arrow) in arrows.iter() {
            frame.commands.push(RenderCommand::PickArc {
                mesh: arrow.pick_mesh,
                color: arrow.pick_id.encode_rgb8(),
            });
        }
        frame
    }
}
