//! Headless command runner

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use vastu_app::{run_intake_pipeline, BookingForm, IntakeForm, PipelineEvent, PipelineOutcome};
use vastu_backend::{methods, ConsultationBackend};
use vastu_core::{validate_slot, Error, FieldErrors};

use super::HeadlessEvent;
use crate::cli::{AdminCommand, Command};

/// How a headless command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessStatus {
    Success,
    /// Input was rejected locally; nothing was sent
    ValidationFailed,
    /// At least one remote call failed
    RemoteError,
}

impl HeadlessStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            HeadlessStatus::Success => ExitCode::SUCCESS,
            HeadlessStatus::RemoteError => ExitCode::from(1),
            HeadlessStatus::ValidationFailed => ExitCode::from(2),
        }
    }
}

/// Run `command` and print its events to stdout
pub async fn run<B>(backend: &B, command: &Command) -> HeadlessStatus
where
    B: ConsultationBackend + Sync,
{
    info!("Running headless command: {:?}", command);
    let today = Local::now().date_naive();
    let status = run_command(backend, command, today, &mut |event| event.emit()).await;
    info!("Headless command finished: {:?}", status);
    status
}

/// Run `command`, handing each event to `sink` as soon as it is known
pub async fn run_command<B>(
    backend: &B,
    command: &Command,
    today: NaiveDate,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessStatus
where
    B: ConsultationBackend + Sync,
{
    match command {
        Command::Report { name, birth_date } => {
            run_report(backend, name, birth_date, today, sink).await
        }
        Command::Slots => {
            let result = backend.list_available_slots().await;
            finish(methods::GET_AVAILABLE_SLOTS, result, sink, |slots| {
                HeadlessEvent::slots(vastu_core::bookable_slots(&slots))
            })
        }
        Command::Book { name, phone, slot } => run_book(backend, name, phone, slot, sink).await,
        Command::Admin(admin) => run_admin(backend, admin, sink).await,
    }
}

async fn run_report<B>(
    backend: &B,
    name: &str,
    birth_date: &str,
    today: NaiveDate,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessStatus
where
    B: ConsultationBackend + Sync,
{
    let mut form = IntakeForm {
        name: name.to_string(),
        birth_date: birth_date.to_string(),
        ..IntakeForm::default()
    };
    let Some(request) = form.submit(today) else {
        return rejected(methods::GENERATE_REPORT, &form.errors, sink);
    };

    let (tx, mut rx) = mpsc::channel::<PipelineEvent>(4);

    let producer = async move { run_intake_pipeline(backend, &request, &tx, |event| event).await };
    let consumer = async {
        while let Some(event) = rx.recv().await {
            sink(match event {
                PipelineEvent::ReportReady(report) => HeadlessEvent::report_ready(report),
                PipelineEvent::RemedyReady(remedy) => HeadlessEvent::remedy_ready(remedy),
                PipelineEvent::ReportFailed { error } => {
                    HeadlessEvent::remote_error(methods::GENERATE_REPORT, error)
                }
                PipelineEvent::RemedyFailed { error } => {
                    HeadlessEvent::remote_error(methods::GET_VASTU_REMEDIES, error)
                }
            });
        }
    };

    let (outcome, ()) = tokio::join!(producer, consumer);
    match outcome {
        PipelineOutcome::Complete => HeadlessStatus::Success,
        PipelineOutcome::ReportOnly | PipelineOutcome::ReportFailed => HeadlessStatus::RemoteError,
    }
}

async fn run_book<B>(
    backend: &B,
    name: &str,
    phone: &str,
    slot: &str,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessStatus
where
    B: ConsultationBackend + Sync,
{
    let mut form = BookingForm {
        name: name.to_string(),
        phone: phone.to_string(),
        selected_slot: Some(slot.trim().to_string()).filter(|s| !s.is_empty()),
        ..BookingForm::default()
    };
    let Some(request) = form.submit() else {
        return rejected(methods::BOOK_CONSULTATION, &form.errors, sink);
    };

    let result = backend
        .book_consultation(&request.name, &request.phone, &request.time_range)
        .await;
    finish(methods::BOOK_CONSULTATION, result, sink, HeadlessEvent::booking_confirmed)
}

async fn run_admin<B>(
    backend: &B,
    command: &AdminCommand,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessStatus
where
    B: ConsultationBackend + Sync,
{
    match command {
        AdminCommand::AddSlot { time_range } => {
            let time_range = time_range.trim();
            let result = match validate_slot(time_range).into_result() {
                Ok(()) => backend.add_available_slot(time_range).await,
                Err(errors) => Err(errors.into()),
            };
            finish(methods::ADD_AVAILABLE_SLOT, result, sink, HeadlessEvent::slot_added)
        }
        AdminCommand::Bookings => {
            let result = backend.list_bookings().await;
            finish(methods::GET_ALL_BOOKINGS, result, sink, HeadlessEvent::bookings)
        }
        AdminCommand::Reports => {
            let result = backend.list_reports().await;
            finish(methods::GET_ALL_REPORTS, result, sink, HeadlessEvent::reports)
        }
        AdminCommand::Remedies => {
            let result = backend.list_remedies().await;
            finish(methods::GET_ALL_REMEDIES, result, sink, HeadlessEvent::remedies)
        }
    }
}

/// Input was rejected before anything was sent
fn rejected(
    operation: &str,
    errors: &FieldErrors,
    sink: &mut dyn FnMut(HeadlessEvent),
) -> HeadlessStatus {
    warn!("{} not sent: {}", operation, errors);
    sink(HeadlessEvent::validation_failed(errors));
    HeadlessStatus::ValidationFailed
}

/// Emit the success event, a `validation_failed` or a `remote_error`
fn finish<T>(
    operation: &str,
    result: vastu_core::Result<T>,
    sink: &mut dyn FnMut(HeadlessEvent),
    on_success: impl FnOnce(T) -> HeadlessEvent,
) -> HeadlessStatus {
    match result {
        Ok(value) => {
            sink(on_success(value));
            HeadlessStatus::Success
        }
        Err(Error::Validation(errors)) => rejected(operation, &errors, sink),
        Err(e) => {
            error!("{} failed: {}", operation, e);
            sink(HeadlessEvent::remote_error(operation, e.to_string()));
            HeadlessStatus::RemoteError
        }
    }
}
