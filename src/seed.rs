//! Demonstration data loaded when the store holds nothing yet.

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use crate::project::domain::{
    Board, Column, DocumentLink, Member, MemberId, Progress, Project, ProjectDetails,
    ProjectDomainError, ProjectId, ProjectStatus, Task, TaskDetails, TaskId, TaskPriority,
};
use crate::user::domain::{User, UserDomainError, UserId, UserProfile, UserStatus};

/// Errors raised while building the demonstration data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seeded project failed validation.
    #[error(transparent)]
    Project(#[from] ProjectDomainError),
    /// A seeded user failed validation.
    #[error(transparent)]
    User(#[from] UserDomainError),
    /// A seeded date did not parse.
    #[error("invalid seed date: {0}")]
    Date(#[from] chrono::ParseError),
}

struct SeedMember {
    id: u64,
    name: &'static str,
    avatar: &'static str,
    role: &'static str,
}

struct SeedTask {
    id: u64,
    title: &'static str,
    description: &'static str,
    priority: TaskPriority,
    assignees: &'static [u64],
    remaining_days: u32,
    column: Column,
}

struct SeedProject {
    id: u64,
    name: &'static str,
    description: &'static str,
    start: &'static str,
    end: &'static str,
    status: ProjectStatus,
    progress: u8,
    category: &'static str,
    document_link: Option<&'static str>,
    members: &'static [SeedMember],
    tasks: &'static [SeedTask],
}

struct SeedUser {
    id: u64,
    name: &'static str,
    email: &'static str,
    created_on: &'static str,
    status: UserStatus,
    avatar: &'static str,
    role: &'static str,
}

const ANA: SeedMember = SeedMember {
    id: 1,
    name: "Ana García",
    avatar: "https://i.pravatar.cc/150?img=1",
    role: "Project Manager",
};
const CARLOS: SeedMember = SeedMember {
    id: 2,
    name: "Carlos Ruiz",
    avatar: "https://i.pravatar.cc/150?img=3",
    role: "Developer",
};
const MARIA: SeedMember = SeedMember {
    id: 3,
    name: "María López",
    avatar: "https://i.pravatar.cc/150?img=5",
    role: "QA Tester",
};
const LUIS: SeedMember = SeedMember {
    id: 4,
    name: "Luis Martín",
    avatar: "https://i.pravatar.cc/150?img=7",
    role: "Data Analyst",
};
const ELENA: SeedMember = SeedMember {
    id: 5,
    name: "Elena Torres",
    avatar: "https://i.pravatar.cc/150?img=9",
    role: "UI/UX Designer",
};

const PROJECTS: [SeedProject; 4] = [
    SeedProject {
        id: 1,
        name: "RPA System - Process Automation",
        description: "Robotic process automation system that streamlines business workflows",
        start: "2024-01-15",
        end: "2024-12-20",
        status: ProjectStatus::InProgress,
        progress: 75,
        category: "Software Development",
        document_link: Some(
            "https://docs.google.com/presentation/d/1BmQeHN8v6rYN_8ZxKX9sZ0xL-example/edit",
        ),
        members: &[ANA, CARLOS, MARIA],
        tasks: &[
            SeedTask {
                id: 1,
                title: "Design the system architecture",
                description: "Draw the architecture diagram and define the main components",
                priority: TaskPriority::High,
                assignees: &[1, 2],
                remaining_days: 3,
                column: Column::InProgress,
            },
            SeedTask {
                id: 2,
                title: "Implement the authentication module",
                description: "Login with JWT and session handling",
                priority: TaskPriority::High,
                assignees: &[2],
                remaining_days: 5,
                column: Column::ToDo,
            },
            SeedTask {
                id: 3,
                title: "Run integration tests",
                description: "Full test suite validating the functionality",
                priority: TaskPriority::Medium,
                assignees: &[3],
                remaining_days: 7,
                column: Column::ToDo,
            },
        ],
    },
    SeedProject {
        id: 2,
        name: "Analytics Dashboard - Business BI",
        description: "Control panel with real-time KPI visualisation",
        start: "2024-02-01",
        end: "2024-06-30",
        status: ProjectStatus::InProgress,
        progress: 60,
        category: "Business Intelligence",
        document_link: Some("https://docs.google.com/document/d/1example-document-id/edit"),
        members: &[LUIS, ELENA],
        tasks: &[SeedTask {
            id: 4,
            title: "Connect to the database",
            description: "Configure the SQL Server connection and write the queries",
            priority: TaskPriority::High,
            assignees: &[4],
            remaining_days: 2,
            column: Column::InProgress,
        }],
    },
    SeedProject {
        id: 3,
        name: "Mobile App - Inventory Management",
        description: "Mobile application for real-time stock control",
        start: "2024-03-10",
        end: "2024-09-15",
        status: ProjectStatus::Planned,
        progress: 25,
        category: "Mobile Development",
        document_link: None,
        members: &[
            SeedMember {
                id: 6,
                name: "Jorge Ramos",
                avatar: "https://i.pravatar.cc/150?img=11",
                role: "Mobile Developer",
            },
            SeedMember {
                id: 7,
                name: "Sofía Díaz",
                avatar: "https://i.pravatar.cc/150?img=13",
                role: "Backend Developer",
            },
        ],
        tasks: &[],
    },
    SeedProject {
        id: 4,
        name: "Corporate Web Portal",
        description: "Institutional website with an integrated CMS",
        start: "2024-01-05",
        end: "2024-05-20",
        status: ProjectStatus::Completed,
        progress: 100,
        category: "Web Development",
        document_link: None,
        members: &[
            SeedMember {
                role: "Full Stack Developer",
                ..CARLOS
            },
            ELENA,
        ],
        tasks: &[],
    },
];

const USERS: [SeedUser; 8] = [
    SeedUser {
        id: 1,
        name: "Ana García",
        email: "ana.garcia@example.com",
        created_on: "2023-01-15",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=1",
        role: "Project Manager",
    },
    SeedUser {
        id: 2,
        name: "Carlos Ruiz",
        email: "carlos.ruiz@example.com",
        created_on: "2023-02-20",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=3",
        role: "Developer",
    },
    SeedUser {
        id: 3,
        name: "María López",
        email: "maria.lopez@example.com",
        created_on: "2023-03-10",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=5",
        role: "QA Tester",
    },
    SeedUser {
        id: 4,
        name: "Luis Martín",
        email: "luis.martin@example.com",
        created_on: "2023-04-05",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=7",
        role: "Data Analyst",
    },
    SeedUser {
        id: 5,
        name: "Elena Torres",
        email: "elena.torres@example.com",
        created_on: "2023-05-12",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=9",
        role: "UI/UX Designer",
    },
    SeedUser {
        id: 6,
        name: "Jorge Ramos",
        email: "jorge.ramos@example.com",
        created_on: "2023-06-18",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=11",
        role: "Mobile Developer",
    },
    SeedUser {
        id: 7,
        name: "Sofía Díaz",
        email: "sofia.diaz@example.com",
        created_on: "2023-07-22",
        status: UserStatus::Active,
        avatar: "https://i.pravatar.cc/150?img=13",
        role: "Backend Developer",
    },
    SeedUser {
        id: 8,
        name: "Pedro Sánchez",
        email: "pedro.sanchez@example.com",
        created_on: "2023-08-30",
        status: UserStatus::Inactive,
        avatar: "https://i.pravatar.cc/150?img=15",
        role: "DevOps Engineer",
    },
];

fn date(raw: &str) -> Result<NaiveDate, SeedError> {
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

fn build_project(seed: &SeedProject, clock: &impl Clock) -> Result<Project, SeedError> {
    let mut details = ProjectDetails::new(
        seed.name,
        seed.description,
        date(seed.start)?,
        date(seed.end)?,
        seed.category,
    )?
    .with_status(seed.status)
    .with_progress(Progress::new(seed.progress)?);
    if let Some(link) = seed.document_link {
        details = details.with_document_link(DocumentLink::new(link)?);
    }

    let members = seed
        .members
        .iter()
        .map(|member| {
            Member::new(
                MemberId::new(member.id),
                member.name,
                member.avatar,
                member.role,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut board = Board::new();
    for task in seed.tasks {
        let task_details = TaskDetails::new(
            task.title,
            task.description,
            task.priority,
            task.remaining_days,
        )?
        .with_assignees(task.assignees.iter().copied().map(MemberId::new));
        board.push(task.column, Task::new(TaskId::new(task.id), task_details))?;
    }

    Ok(Project::new(
        ProjectId::new(seed.id),
        details,
        members,
        board,
        clock,
    )?)
}

fn build_user(seed: &SeedUser) -> Result<User, SeedError> {
    let profile = UserProfile::new(
        seed.name,
        seed.email,
        seed.role,
        Some(seed.avatar.to_owned()),
    )?;
    Ok(User::new(UserId::new(seed.id), profile, date(seed.created_on)?).with_status(seed.status))
}

/// Builds the four demonstration projects with their initial tasks.
///
/// # Errors
///
/// Returns [`SeedError`] when a seeded value fails validation.
pub fn default_projects(clock: &impl Clock) -> Result<Vec<Project>, SeedError> {
    PROJECTS
        .iter()
        .map(|seed| build_project(seed, clock))
        .collect()
}

/// Builds the eight demonstration directory users.
///
/// # Errors
///
/// Returns [`SeedError`] when a seeded value fails validation.
pub fn default_users() -> Result<Vec<User>, SeedError> {
    USERS.iter().map(build_user).collect()
}
