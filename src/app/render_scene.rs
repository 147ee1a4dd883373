//! Builder für RenderScene aus AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Baut die Render-Szene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        anchors: state.anchors().into(),
        path: state.path.clone(),
        dragged_index: state.interaction.dragged_index(),
        options: state.options.clone(),
    }
}
