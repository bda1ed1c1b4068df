//! View-state controller
//!
//! Owns which view is active and the session data the report and remedy
//! views depend on. A [`View`] that needs data carries it, so the report view
//! cannot exist without a report. Session data is an immutable
//! [`SessionData`] value replaced wholesale on every successful commit.

use std::sync::Arc;

use vastu_core::{NumerologyReport, VastuRemedy};

/// Data-free view identifier, used for navigation requests and tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Landing,
    Intake,
    Report,
    Remedy,
    Booking,
}

impl ViewId {
    /// Header order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Landing,
        ViewId::Intake,
        ViewId::Report,
        ViewId::Remedy,
        ViewId::Booking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Landing => "Home",
            ViewId::Intake => "Numerology",
            ViewId::Report => "Report",
            ViewId::Remedy => "Vastu",
            ViewId::Booking => "Book Consultation",
        }
    }

    /// View for function key / digit position `index` (0-based).
    pub fn from_index(index: usize) -> Option<ViewId> {
        Self::ALL.get(index).copied()
    }
}

/// The active view, carrying whatever it needs to render.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing,
    Intake,
    Report(Arc<NumerologyReport>),
    Remedy(Arc<VastuRemedy>),
    Booking,
}

impl View {
    pub fn id(&self) -> ViewId {
        match self {
            View::Landing => ViewId::Landing,
            View::Intake => ViewId::Intake,
            View::Report(_) => ViewId::Report,
            View::Remedy(_) => ViewId::Remedy,
            View::Booking => ViewId::Booking,
        }
    }
}

/// Navigation refused because the target view has no data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    ReportUnavailable,
    RemedyUnavailable,
}

impl NavigationError {
    pub fn message(&self) -> &'static str {
        match self {
            NavigationError::ReportUnavailable => {
                "No report available. Please generate a report first."
            }
            NavigationError::RemedyUnavailable => {
                "No Vastu remedies available. Please generate a report first."
            }
        }
    }
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CommittedReport {
    generation: u64,
    report: Arc<NumerologyReport>,
}

/// Snapshot of the session's results. Never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    report: Option<CommittedReport>,
    remedy: Option<Arc<VastuRemedy>>,
}

impl SessionData {
    pub fn report(&self) -> Option<&Arc<NumerologyReport>> {
        self.report.as_ref().map(|c| &c.report)
    }

    pub fn remedy(&self) -> Option<&Arc<VastuRemedy>> {
        self.remedy.as_ref()
    }

    /// Intake submission that produced the stored report.
    pub fn report_generation(&self) -> Option<u64> {
        self.report.as_ref().map(|c| c.generation)
    }

    /// New snapshot holding `report`. The previous remedy belonged to the
    /// previous report and is not carried over.
    fn with_report(&self, report: Arc<NumerologyReport>, generation: u64) -> Self {
        Self {
            report: Some(CommittedReport { generation, report }),
            remedy: None,
        }
    }

    fn with_remedy(&self, remedy: Arc<VastuRemedy>) -> Self {
        Self {
            report: self.report.clone(),
            remedy: Some(remedy),
        }
    }
}

/// Tracks the active view and the results it can show.
#[derive(Debug, Clone)]
pub struct ViewController {
    view: View,
    session: SessionData,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            session: SessionData::default(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn active(&self) -> ViewId {
        self.view.id()
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    pub fn has_report(&self) -> bool {
        self.session.report.is_some()
    }

    pub fn has_remedy(&self) -> bool {
        self.session.remedy.is_some()
    }

    /// Switch to `target`. Report and remedy views resolve their data from
    /// the session; when it is missing the active view is left unchanged.
    pub fn activate_view(&mut self, target: ViewId) -> Result<(), NavigationError> {
        self.view = match target {
            ViewId::Landing => View::Landing,
            ViewId::Intake => View::Intake,
            ViewId::Booking => View::Booking,
            ViewId::Report => View::Report(
                self.session
                    .report()
                    .cloned()
                    .ok_or(NavigationError::ReportUnavailable)?,
            ),
            ViewId::Remedy => View::Remedy(
                self.session
                    .remedy()
                    .cloned()
                    .ok_or(NavigationError::RemedyUnavailable)?,
            ),
        };
        Ok(())
    }

    /// Store a freshly generated report and show it.
    pub fn record_report(&mut self, report: NumerologyReport, generation: u64) {
        let report = Arc::new(report);
        self.session = self.session.with_report(Arc::clone(&report), generation);
        self.view = View::Report(report);
    }

    /// Store a remedy without changing the view.
    ///
    /// Returns `false` (and stores nothing) when the remedy was requested for
    /// a report other than the one currently stored.
    pub fn record_remedy(&mut self, remedy: VastuRemedy, generation: u64) -> bool {
        if self.session.report_generation() != Some(generation) {
            return false;
        }
        self.session = self.session.with_remedy(Arc::new(remedy));
        true
    }

    /// Tabs shown in the header, in order.
    pub fn visible_tabs(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|id| match id {
                ViewId::Report => self.has_report(),
                ViewId::Remedy => self.has_remedy(),
                _ => true,
            })
            .collect()
    }
}
