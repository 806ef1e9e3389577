//! Editable project metadata: status, progress, dates and document link.

use super::{ParseProjectStatusError, ProjectDomainError, column::normalize_label};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scheduled but not started.
    Planned,
    /// Actively worked on.
    InProgress,
    /// Temporarily on hold.
    Paused,
    /// Finished.
    Completed,
}

impl ProjectStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Paused,
        Self::Completed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_label(value).as_str() {
            "planned" | "planificado" => Ok(Self::Planned),
            "inprogress" | "enprogreso" => Ok(Self::InProgress),
            "paused" | "pausado" => Ok(Self::Paused),
            "completed" | "completado" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Completion percentage entered by hand.
///
/// The value is independent of how many tasks sit in the `Done` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Largest accepted percentage.
    pub const MAX: u8 = 100;

    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProgressOutOfRange`] when `value`
    /// exceeds 100.
    pub const fn new(value: u8) -> Result<Self, ProjectDomainError> {
        if value > Self::MAX {
            return Err(ProjectDomainError::ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Progress {
    type Error = ProjectDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

/// Link to the project's reference document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DocumentLink(String);

impl DocumentLink {
    /// Creates a validated absolute `http` or `https` link.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDocumentLink`] when the value has
    /// another scheme, no host, or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .and_then(|rest| rest.split(['/', '?', '#']).next())
            .unwrap_or_default();
        if host.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ProjectDomainError::InvalidDocumentLink(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the link as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a URL suitable for embedding the document in a frame.
    ///
    /// Google Slides, Docs and Sheets links are rewritten to their public
    /// embed or preview endpoints; OneDrive and SharePoint links gain an
    /// `embed=1` query parameter. Anything else is returned unchanged.
    #[must_use]
    pub fn embed_url(&self) -> String {
        let url = self.0.as_str();
        if let Some(key) = document_key(url, "/presentation/d/") {
            return format!(
                "https://docs.google.com/presentation/d/{key}/embed?start=false&loop=false&delayms=3000"
            );
        }
        if let Some(key) = document_key(url, "/document/d/") {
            return format!("https://docs.google.com/document/d/{key}/preview");
        }
        if let Some(key) = document_key(url, "/spreadsheets/d/") {
            return format!("https://docs.google.com/spreadsheets/d/{key}/preview");
        }
        if url.contains("onedrive.live.com") || url.contains("sharepoint.com") {
            let separator = if url.contains('?') { '&' } else { '?' };
            return format!("{url}{separator}embed=1");
        }
        url.to_owned()
    }
}

impl TryFrom<String> for DocumentLink {
    type Error = ProjectDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentLink> for String {
    fn from(link: DocumentLink) -> Self {
        link.0
    }
}

impl fmt::Display for DocumentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the document key that follows `marker` in a Google Workspace URL.
fn document_key<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    if !url.contains("docs.google.com") {
        return None;
    }
    let start = url.find(marker)?.checked_add(marker.len())?;
    let rest = url.get(start..)?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    rest.get(..end).filter(|key| !key.is_empty())
}

/// Validated project metadata edited through the project form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectDetailsRecord")]
pub struct ProjectDetails {
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
    progress: Progress,
    category: String,
    document_link: Option<DocumentLink>,
}

/// Stored shape of [`ProjectDetails`], re-validated on decode.
#[derive(Deserialize)]
struct ProjectDetailsRecord {
    name: String,
    #[serde(default)]
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
    #[serde(default)]
    progress: Progress,
    #[serde(default)]
    category: String,
    #[serde(default)]
    document_link: Option<DocumentLink>,
}

impl TryFrom<ProjectDetailsRecord> for ProjectDetails {
    type Error = ProjectDomainError;

    fn try_from(record: ProjectDetailsRecord) -> Result<Self, Self::Error> {
        let mut details = Self::new(
            record.name,
            record.description,
            record.start_date,
            record.end_date,
            record.category,
        )?
        .with_status(record.status)
        .with_progress(record.progress);
        details.document_link = record.document_link;
        Ok(details)
    }
}

impl ProjectDetails {
    /// Creates validated details with `Planned` status and zero progress.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the name is blank
    /// or [`ProjectDomainError::InvalidDateRange`] when `end_date` precedes
    /// `start_date`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let raw_name = name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        if end_date < start_date {
            return Err(ProjectDomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            name: trimmed_name.to_owned(),
            description: description.into().trim().to_owned(),
            start_date,
            end_date,
            status: ProjectStatus::Planned,
            progress: Progress::default(),
            category: category.into().trim().to_owned(),
            document_link: None,
        })
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the manually entered progress.
    #[must_use]
    pub const fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the reference document link.
    #[must_use]
    pub fn with_document_link(mut self, link: DocumentLink) -> Self {
        self.document_link = Some(link);
        self
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the manually entered progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the project category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the reference document link, if any.
    #[must_use]
    pub const fn document_link(&self) -> Option<&DocumentLink> {
        self.document_link.as_ref()
    }
}
