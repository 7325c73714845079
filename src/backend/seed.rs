//! Demo data
//!
//! Three users (password `Password123!`), one board each, with lists and
//! tasks. Seeding goes through the [`BoardStore`] port, so it works against
//! PostgreSQL and the in-memory store alike. It is skipped when the first
//! demo user already exists.

use thiserror::Error;

use crate::backend::auth::passwords::{hash_password, PasswordError};
use crate::backend::store::{BoardStore, NewBoard, NewUser, StoreError, TaskUpdate};

pub const DEMO_PASSWORD: &str = "Password123!";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

struct DemoTask {
    title: &'static str,
    description: &'static str,
    completed: bool,
}

struct DemoList {
    title: &'static str,
    tasks: &'static [DemoTask],
}

struct DemoBoard {
    email: &'static str,
    name: &'static str,
    title: &'static str,
    color: &'static str,
    lists: &'static [DemoList],
}

const fn task(title: &'static str, description: &'static str, completed: bool) -> DemoTask {
    DemoTask {
        title,
        description,
        completed,
    }
}

const DEMO: &[DemoBoard] = &[
    DemoBoard {
        email: "john@example.com",
        name: "John Doe",
        title: "Product Development",
        color: "#0079bf",
        lists: &[
            DemoList {
                title: "To Do",
                tasks: &[
                    task("Design new landing page", "Create mockups for the new landing page design", false),
                    task("Set up authentication", "Implement JWT authentication with refresh tokens", false),
                    task("Write API documentation", "Document all API endpoints using OpenAPI/Swagger", false),
                ],
            },
            DemoList {
                title: "In Progress",
                tasks: &[
                    task("Implement drag and drop", "Add drag and drop functionality for tasks", false),
                    task("Add real-time updates", "Implement WebSocket for real-time board updates", false),
                ],
            },
            DemoList {
                title: "Done",
                tasks: &[
                    task("Set up project structure", "Initialize the project workspace", true),
                    task("Configure database access", "Set up the PostgreSQL connection pool", true),
                    task("Create database schema", "Design and implement database schema", true),
                ],
            },
        ],
    },
    DemoBoard {
        email: "jane@example.com",
        name: "Jane Smith",
        title: "Marketing Campaign",
        color: "#d29034",
        lists: &[
            DemoList {
                title: "Ideas",
                tasks: &[
                    task("Social media campaign", "Launch a social media campaign for Q4", false),
                    task("Email newsletter", "Create weekly email newsletter template", false),
                ],
            },
            DemoList {
                title: "Planning",
                tasks: &[task("Content calendar", "Plan content calendar for next month", false)],
            },
        ],
    },
    DemoBoard {
        email: "admin@example.com",
        name: "Admin User",
        title: "Personal Tasks",
        color: "#519839",
        lists: &[
            DemoList {
                title: "Today",
                tasks: &[
                    task("Review pull requests", "Review and merge pending PRs", false),
                    task("Team standup meeting", "Daily standup at 10 AM", true),
                ],
            },
            DemoList {
                title: "This Week",
                tasks: &[
                    task("Plan sprint", "Plan tasks for next sprint", false),
                    task("Code review workshop", "Host code review best practices workshop", false),
                ],
            },
        ],
    },
];

/// Counts of seeded records
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub boards: usize,
    pub lists: usize,
    pub tasks: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Load the demo data unless it is already present
pub async fn seed_demo_data(
    store: &dyn BoardStore,
    bcrypt_cost: u32,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    if let Some(first) = DEMO.first() {
        if store.find_user_by_email(first.email).await?.is_some() {
            tracing::info!("demo data already present, skipping seed");
            return Ok(summary);
        }
    }

    let password_hash = hash_password(DEMO_PASSWORD, bcrypt_cost).await?;

    for demo in DEMO {
        let user = store
            .create_user(NewUser {
                name: demo.name.to_string(),
                email: demo.email.to_string(),
                password_hash: password_hash.clone(),
            })
            .await?;
        summary.users += 1;

        let board = store
            .create_board(NewBoard {
                owner_id: user.id,
                title: demo.title.to_string(),
                background_color: demo.color.to_string(),
            })
            .await?;
        summary.boards += 1;

        for demo_list in demo.lists {
            let list = store.create_list(board.id, demo_list.title.to_string()).await?;
            summary.lists += 1;

            for demo_task in demo_list.tasks {
                let task = store
                    .create_task(
                        list.id,
                        demo_task.title.to_string(),
                        Some(demo_task.description.to_string()),
                    )
                    .await?;
                if demo_task.completed {
                    store
                        .update_task(
                            task.id,
                            TaskUpdate {
                                completed: Some(true),
                                ..TaskUpdate::default()
                            },
                        )
                        .await?;
                }
                summary.tasks += 1;
            }
        }
    }

    tracing::info!(
        users = summary.users,
        boards = summary.boards,
        lists = summary.lists,
        tasks = summary.tasks,
        "demo data seeded"
    );
    Ok(summary)
}
