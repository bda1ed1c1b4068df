//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `navigation`: View switching and header tabs
//! - `scroll`: Report/remedy reader scrolling
//! - `intake`: Intake form and pipeline progress
//! - `booking`: Booking form, slot list and booking results

pub(crate) mod booking;
pub(crate) mod intake;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::booking::BookingRequest;
use crate::intake::IntakeRequest;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Generate a report, then its Vastu remedy
    RunIntakePipeline {
        /// Intake submission this run belongs to
        generation: u64,
        request: IntakeRequest,
    },

    /// Fetch the available consultation slots
    FetchSlots {
        /// Slot cache fetch sequence number
        seq: u64,
    },

    /// Book the selected slot
    BookConsultation { request: BookingRequest },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
