//! Unvalidated form payloads and their conversion into domain values.

use chrono::NaiveDate;

use super::ProjectServiceResult;
use crate::project::domain::{
    Column, DocumentLink, Member, MemberId, Progress, ProjectDetails, ProjectStatus, TaskDetails,
    TaskId, TaskPriority,
};

/// Project form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailsRequest {
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    category: String,
    status: Option<String>,
    progress: u8,
    document_link: Option<String>,
}

impl ProjectDetailsRequest {
    /// Creates a request with the required fields, `Planned` status and zero
    /// progress.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            category: category.into(),
            status: None,
            progress: 0,
            document_link: None,
        }
    }

    /// Sets the status label, canonical or display form.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the document link. A blank value clears it.
    #[must_use]
    pub fn with_document_link(mut self, link: impl Into<String>) -> Self {
        self.document_link = Some(link.into());
        self
    }

    pub(super) fn into_details(self) -> ProjectServiceResult<ProjectDetails> {
        let status = self
            .status
            .as_deref()
            .map(ProjectStatus::try_from)
            .transpose()?
            .unwrap_or(ProjectStatus::Planned);
        let mut details = ProjectDetails::new(
            self.name,
            self.description,
            self.start_date,
            self.end_date,
            self.category,
        )?
        .with_status(status)
        .with_progress(Progress::new(self.progress)?);
        if let Some(link) = self.document_link.filter(|link| !link.trim().is_empty()) {
            details = details.with_document_link(DocumentLink::new(link)?);
        }
        Ok(details)
    }
}

/// Team member picked for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRequest {
    id: MemberId,
    name: String,
    avatar: String,
    role: String,
}

impl MemberRequest {
    /// Creates a member request.
    #[must_use]
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            role: role.into(),
        }
    }

    pub(super) fn into_member(self) -> ProjectServiceResult<Member> {
        Ok(Member::new(self.id, self.name, self.avatar, self.role)?)
    }
}

pub(super) fn build_members(members: Vec<MemberRequest>) -> ProjectServiceResult<Vec<Member>> {
    members.into_iter().map(MemberRequest::into_member).collect()
}

/// Task form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    title: String,
    description: String,
    priority: String,
    remaining_days: u32,
    assignees: Vec<MemberId>,
}

impl TaskRequest {
    /// Creates a task request with no assignees. `priority` accepts the
    /// canonical and display labels.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        remaining_days: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            remaining_days,
            assignees: Vec::new(),
        }
    }

    /// Sets the assigned members.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = MemberId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    pub(super) fn into_details(self) -> ProjectServiceResult<TaskDetails> {
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        Ok(
            TaskDetails::new(self.title, self.description, priority, self.remaining_days)?
                .with_assignees(self.assignees),
        )
    }
}

/// Task supplied together with a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialTaskRequest {
    id: Option<TaskId>,
    column: Option<String>,
    task: TaskRequest,
}

impl InitialTaskRequest {
    /// Creates an initial task destined for the To-Do column.
    #[must_use]
    pub const fn new(task: TaskRequest) -> Self {
        Self {
            id: None,
            column: None,
            task,
        }
    }

    /// Keeps an existing task identifier instead of generating one.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Tags the task with the column label it starts in.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub(super) fn into_parts(self) -> ProjectServiceResult<(Option<TaskId>, Column, TaskDetails)> {
        let column = parse_column_or_default(self.column.as_deref())?;
        Ok((self.id, column, self.task.into_details()?))
    }
}

pub(super) fn parse_column_or_default(label: Option<&str>) -> ProjectServiceResult<Column> {
    Ok(label
        .map(Column::try_from)
        .transpose()?
        .unwrap_or(Column::ToDo))
}
