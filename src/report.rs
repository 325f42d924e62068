use crate::{
    controller::{ControllerState, PlaybackController},
    driver::ProgressDriver,
};

/// Completion fraction to display for phase `index`.
///
/// Phases before the active one are fully played, phases after it are
/// untouched. The active phase shows its progress normalized for direction.
pub fn reportable_progress(
    index: usize,
    active_phase: usize,
    phase_progress: f64,
    playing_forward: bool,
) -> f64 {
    if index < active_phase {
        1.0
    } else if index > active_phase {
        0.0
    } else if playing_forward {
        phase_progress
    } else {
        1.0 - phase_progress
    }
}

/// Point-in-time view of a controller for the presentation layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProgressReport {
    pub active_phase: usize,
    pub phase_count: usize,
    pub playing_forward: bool,
    pub speed: f64,
    pub state: ControllerState,
    pub phases: Vec<f64>, // reportable progress per phase
}

impl ProgressReport {
    pub fn capture<D: ProgressDriver>(controller: &PlaybackController<D>) -> Self {
        let phase_count = controller.animation().len();
        Self {
            active_phase: controller.active_phase_index(),
            phase_count,
            playing_forward: controller.is_playing_forward(),
            speed: controller.speed(),
            state: controller.state(),
            phases: (0..phase_count)
                .map(|i| controller.phase_reportable_progress(i))
                .collect(),
        }
    }
}
