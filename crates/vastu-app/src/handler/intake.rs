//! Intake submission and pipeline progress handlers

use tracing::{debug, info};

use crate::intake::IntakeStage;
use crate::pipeline::PipelineEvent;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Validate the intake form and start the pipeline when it is clean.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.intake.stage.is_busy() {
        return UpdateResult::none();
    }

    let today = chrono::Local::now().date_naive();
    let Some(request) = state.intake.submit(today) else {
        debug!("Intake form rejected: {}", state.intake.errors);
        return UpdateResult::none();
    };

    state.generation += 1;
    state.intake.stage = IntakeStage::GeneratingReport;
    UpdateResult::action(UpdateAction::RunIntakePipeline {
        generation: state.generation,
        request,
    })
}

/// Apply one pipeline result.
///
/// A report always commits and takes over the view. A remedy commits only
/// if it belongs to the stored report. Failures were logged by the pipeline
/// and only end the busy state.
pub fn handle_pipeline_event(
    state: &mut AppState,
    generation: u64,
    event: PipelineEvent,
) -> UpdateResult {
    let current = generation == state.generation;

    match event {
        PipelineEvent::ReportReady(report) => {
            info!(
                "Report ready for {} (life path {})",
                report.owner_name, report.life_path_number
            );
            state.controller.record_report(report, generation);
            state.scroll = Default::default();
            if current {
                state.intake.stage = IntakeStage::GeneratingRemedy;
            }
        }
        PipelineEvent::RemedyReady(remedy) => {
            if !state.controller.record_remedy(remedy, generation) {
                debug!("Discarding remedy from superseded submission {}", generation);
            }
            if current {
                state.intake.stage = IntakeStage::Idle;
            }
        }
        PipelineEvent::ReportFailed { error } | PipelineEvent::RemedyFailed { error } => {
            debug!("Pipeline stage failed for submission {}: {}", generation, error);
            if current {
                state.intake.stage = IntakeStage::Idle;
            }
        }
    }

    UpdateResult::none()
}
