//! vastu-app - Application state and orchestration for Vastu Desk
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the view-state controller, the intake pipeline, the Engine abstraction and
//! configuration loading.

pub mod actions;
pub mod booking;
pub mod config;
pub mod controller;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod intake;
pub mod message;
pub mod pipeline;
pub mod process;
pub mod state;

// Re-export primary types
pub use booking::{BookingField, BookingForm, BookingRequest, BookingStatus, SlotCache, SlotsState};
pub use controller::{NavigationError, SessionData, View, ViewController, ViewId};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use intake::{IntakeField, IntakeForm, IntakeRequest, IntakeStage};
pub use message::Message;
pub use pipeline::{run_intake_pipeline, PipelineEvent, PipelineOutcome};
pub use state::{AppPhase, AppState, Notice, NoticeLevel};
