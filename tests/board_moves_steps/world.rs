//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::notification::NotificationCenter;
use taskboard::project::adapters::InMemoryProjectRepository;
use taskboard::project::domain::{IdGenerator, MoveOutcome, Project, Task};
use taskboard::project::services::{BoardService, ProjectService, ProjectServiceResult};

/// Board service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemoryProjectRepository, DefaultClock, NotificationCenter<DefaultClock>>;

/// Scenario world for board move behaviour tests.
pub struct BoardWorld {
    /// Service creating the project under test.
    pub projects: ProjectService<InMemoryProjectRepository, DefaultClock>,
    /// Service applying board operations.
    pub boards: TestBoardService,
    /// Notices raised by the board service.
    pub notifications: Arc<NotificationCenter<DefaultClock>>,
    /// Project created by the scenario.
    pub project: Option<Project>,
    /// Task created by the scenario.
    pub task: Option<Task>,
    /// Result of the last move.
    pub last_move: Option<ProjectServiceResult<MoveOutcome>>,
}

impl BoardWorld {
    /// Creates a world with an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryProjectRepository::new());
        let clock = Arc::new(DefaultClock);
        let notifications = Arc::new(NotificationCenter::new(Arc::clone(&clock)));
        let ids = Arc::new(IdGenerator::new());
        Self {
            projects: ProjectService::new(Arc::clone(&repository), Arc::clone(&clock))
                .with_id_generator(Arc::clone(&ids)),
            boards: BoardService::new(repository, clock, Arc::clone(&notifications))
                .with_id_generator(ids),
            notifications,
            project: None,
            task: None,
            last_move: None,
        }
    }

    /// Returns the scenario project or an error when none was created.
    ///
    /// # Errors
    ///
    /// Returns an error when no project step has run.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the scenario task or an error when none was created.
    ///
    /// # Errors
    ///
    /// Returns an error when no task step has run.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
