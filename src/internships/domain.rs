use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::users::Major;

/// Identifier assigned sequentially by the owning board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct InternshipId(pub u32);

impl fmt::Display for InternshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternshipLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl InternshipLevel {
    pub const fn label(self) -> &'static str {
        match self {
            InternshipLevel::Basic => "Basic",
            InternshipLevel::Intermediate => "Intermediate",
            InternshipLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for InternshipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}', expected Basic, Intermediate, or Advanced")]
pub struct ParseLevelError(pub String);

impl FromStr for InternshipLevel {
    type Err = ParseLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(InternshipLevel::Basic),
            "intermediate" => Ok(InternshipLevel::Intermediate),
            "advanced" => Ok(InternshipLevel::Advanced),
            _ => Err(ParseLevelError(value.trim().to_string())),
        }
    }
}

/// Posting lifecycle. `Filled` is reachable only from `Approved` and reverts
/// to `Approved` when a slot frees up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternshipStatus {
    Pending,
    Approved,
    Rejected,
    Filled,
}

impl InternshipStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InternshipStatus::Pending => "Pending",
            InternshipStatus::Approved => "Approved",
            InternshipStatus::Rejected => "Rejected",
            InternshipStatus::Filled => "Filled",
        }
    }
}

impl fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}', expected Pending, Approved, Rejected, or Filled")]
pub struct ParseStatusError(pub String);

impl FromStr for InternshipStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(InternshipStatus::Pending),
            "approved" => Ok(InternshipStatus::Approved),
            "rejected" => Ok(InternshipStatus::Rejected),
            "filled" => Ok(InternshipStatus::Filled),
            _ => Err(ParseStatusError(value.trim().to_string())),
        }
    }
}

/// Fields a company rep supplies when posting; the board assigns identity,
/// status, and slot bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipDraft {
    pub title: String,
    pub description: String,
    pub level: InternshipLevel,
    pub preferred_major: Major,
    pub opening_date: NaiveDate,
    pub closing_date: NaiveDate,
    pub total_slots: u32,
}

/// One internship posting. Slot accounting and the status field are private
/// so `0 <= available_slots <= total_slots` and the `Filled` transitions
/// cannot be bypassed.
#[derive(Debug, Clone, Serialize)]
pub struct Internship {
    pub id: InternshipId,
    pub title: String,
    pub description: String,
    pub level: InternshipLevel,
    pub preferred_major: Major,
    pub opening_date: NaiveDate,
    pub closing_date: NaiveDate,
    pub company_name: String,
    pub rep_id: String,
    pub total_slots: u32,
    available_slots: u32,
    visible: bool,
    status: InternshipStatus,
}

impl Internship {
    /// New postings start `Pending` and hidden, with every slot available.
    pub(crate) fn new(
        id: InternshipId,
        draft: InternshipDraft,
        company_name: String,
        rep_id: String,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            level: draft.level,
            preferred_major: draft.preferred_major,
            opening_date: draft.opening_date,
            closing_date: draft.closing_date,
            company_name,
            rep_id,
            total_slots: draft.total_slots,
            available_slots: draft.total_slots,
            visible: false,
            status: InternshipStatus::Pending,
        }
    }

    pub fn status(&self) -> InternshipStatus {
        self.status
    }

    pub fn available_slots(&self) -> u32 {
        self.available_slots
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Consume one slot for an accepted placement. Reaching zero marks the
    /// posting `Filled`. Already at zero is a silent no-op, not an error.
    pub(crate) fn take_slot(&mut self) {
        if self.available_slots > 0 {
            self.available_slots -= 1;
            if self.available_slots == 0 {
                self.status = InternshipStatus::Filled;
            }
        }
    }

    /// Return one slot after an approved withdrawal; `Filled` reverts to
    /// `Approved`. Already at capacity is a silent no-op.
    pub(crate) fn release_slot(&mut self) {
        if self.available_slots < self.total_slots {
            self.available_slots += 1;
            if self.status == InternshipStatus::Filled {
                self.status = InternshipStatus::Approved;
            }
        }
    }

    /// Staff approval publishes the posting.
    pub(crate) fn approve(&mut self) {
        self.status = InternshipStatus::Approved;
        self.visible = true;
    }

    pub(crate) fn reject(&mut self) {
        self.status = InternshipStatus::Rejected;
    }

    /// Visibility is an independent toggle, orthogonal to status.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Title/description edits are allowed only before the staff decision.
    pub fn can_edit(&self) -> bool {
        self.status == InternshipStatus::Pending
    }

    /// Postings can be deleted until approved.
    pub fn is_deletable(&self) -> bool {
        matches!(
            self.status,
            InternshipStatus::Pending | InternshipStatus::Rejected
        )
    }

    /// Open to student applications: approved, visible, has capacity, and the
    /// closing date has not passed.
    pub fn is_open_for_applications(&self, today: NaiveDate) -> bool {
        self.status == InternshipStatus::Approved
            && self.visible
            && self.available_slots > 0
            && today <= self.closing_date
    }
}
