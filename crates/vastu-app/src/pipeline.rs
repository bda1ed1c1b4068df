//! Two-stage intake pipeline
//!
//! Stage one generates the numerology report. Stage two asks for Vastu
//! remedies using the report's life path number, and only runs when stage
//! one succeeded. A failed remedy never takes back the report: the report
//! event has already been delivered by the time stage two starts.

use tokio::sync::mpsc;

use vastu_backend::ConsultationBackend;
use vastu_core::prelude::*;
use vastu_core::{NumerologyReport, VastuRemedy};

use crate::intake::IntakeRequest;

/// Progress reported by [`run_intake_pipeline`].
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    ReportReady(NumerologyReport),
    ReportFailed { error: String },
    RemedyReady(VastuRemedy),
    RemedyFailed { error: String },
}

/// How far a pipeline run got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// No report was produced; the remedy stage never ran.
    ReportFailed,
    /// The report was produced but the remedy was not.
    ReportOnly,
    Complete,
}

/// Run both stages, delivering each result on `tx` as soon as it is known.
///
/// `wrap` turns a [`PipelineEvent`] into the channel's message type. Remote
/// failures are logged here and reported as `*Failed` events; they are
/// never retried.
pub async fn run_intake_pipeline<B, T, F>(
    backend: &B,
    request: &IntakeRequest,
    tx: &mpsc::Sender<T>,
    wrap: F,
) -> PipelineOutcome
where
    B: ConsultationBackend,
    F: Fn(PipelineEvent) -> T,
{
    let birth_date = request.wire_birth_date();
    info!("Generating numerology report for {}", request.name);

    let report = match backend.generate_report(&request.name, &birth_date).await {
        Ok(report) => report,
        Err(e) => {
            error!("Error generating report: {}", e);
            let _ = tx
                .send(wrap(PipelineEvent::ReportFailed {
                    error: e.to_string(),
                }))
                .await;
            return PipelineOutcome::ReportFailed;
        }
    };

    let life_path_number = report.life_path_number;
    let _ = tx.send(wrap(PipelineEvent::ReportReady(report))).await;

    debug!("Requesting Vastu remedies for life path {}", life_path_number);
    match backend.generate_remedy(&request.name, life_path_number).await {
        Ok(remedy) => {
            let _ = tx.send(wrap(PipelineEvent::RemedyReady(remedy))).await;
            PipelineOutcome::Complete
        }
        Err(e) => {
            error!("Error generating Vastu remedies: {}", e);
            let _ = tx
                .send(wrap(PipelineEvent::RemedyFailed {
                    error: e.to_string(),
                }))
                .await;
            PipelineOutcome::ReportOnly
        }
    }
}
