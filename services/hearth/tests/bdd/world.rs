//! BDD test world for hearth service

use cucumber::World;
use hearth::state::StateHandle;
use hearth_app::StatusPresentation;

#[derive(Debug, Default, World)]
pub struct HearthWorld {
    // Status classification
    pub status_input: Option<String>,
    pub presentation: Option<StatusPresentation>,
    pub rendered_style: Option<String>,

    // Dashboard
    pub dashboard_state: Option<StateHandle>,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}
