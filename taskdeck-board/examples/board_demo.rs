//! Walk through a session: sign in, create tasks, drag one across the board,
//! and print the resulting columns.
//!
//! Run with: cargo run --example board_demo

use std::sync::Arc;
use taskdeck_board::{
    CreateTask, Dashboard, InMemoryRepository, Point, Priority, Session, Status, TaskStore,
    TracingNotifier, UserId,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> taskdeck_board::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_board=debug".into()),
        )
        .init();

    let session = Arc::new(Session::signed_in(UserId::new()));
    let store = TaskStore::new(
        session,
        Arc::new(InMemoryRepository::new()),
        Arc::new(TracingNotifier),
    );
    let mut dashboard = Dashboard::new(store);

    dashboard
        .on_create(CreateTask::new("Buy milk").with_priority(Priority::High))
        .await?;
    dashboard
        .on_create(CreateTask::new("Write report").with_description("Quarterly numbers"))
        .await?;
    let shipping = dashboard
        .on_create(CreateTask::new("Ship release").with_status(Status::InProgress))
        .await?;

    // Drag "Ship release" onto the completed column
    dashboard.pointer_down(&shipping.id, Point::new(0.0, 0.0));
    dashboard.pointer_move(Point::new(16.0, 0.0));
    dashboard.drag_over(Some("completed"));
    dashboard.release().await?;

    for column in &dashboard.board().columns {
        println!("{} ({})", column.column.title, column.tasks.len());
        for task in &column.tasks {
            println!("  - {} [{}]", task.title, task.priority);
        }
    }

    Ok(())
}
