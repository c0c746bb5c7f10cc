//! HTTP surface of the todo service.
//!
//! # Design
//! - The repository is built by the caller and injected through `app`, so the
//!   same router runs against MongoDB in production and in memory in tests.
//! - `run` / `serve` take an already-bound listener; the caller picks the
//!   address (tests bind port 0).

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod mongo;
pub mod repository;
pub mod store;

pub use config::Config;
pub use error::{AppError, ErrorBody};
pub use handlers::AppState;
pub use mongo::MongoTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use store::{MongoStore, StoreError};

pub fn app<R: TodoRepository>(repository: R) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<R>)
                .post(handlers::create_todo::<R>)
                .delete(handlers::delete_todos),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(repository))
}

pub async fn run<R: TodoRepository>(
    listener: TcpListener,
    repository: R,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repository)).await
}

/// Like `run`, but stops accepting connections once `shutdown` resolves and
/// returns after in-flight requests finish.
pub async fn serve<R, F>(
    listener: TcpListener,
    repository: R,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    R: TodoRepository,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(repository))
        .with_graceful_shutdown(shutdown)
        .await
}
