//! Session store port.

use sparky_types::chat::{SessionId, Turn};
use sparky_types::error::StoreError;

/// Store for chat sessions and their turns.
///
/// Injected into the request path so services never touch a global map.
/// Implementations live in sparky-infra (e.g., `InMemorySessionStore`) and
/// must be safe under concurrent access; each operation is atomic per
/// session. Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionStore: Send + Sync {
    /// Resolve a session id: generate a fresh one when `id` is absent,
    /// create an empty session when the supplied id is unknown.
    fn get_or_create(
        &self,
        id: Option<SessionId>,
    ) -> impl std::future::Future<Output = Result<SessionId, StoreError>> + Send;

    /// All turns of a session in append order. Unknown ids yield an empty
    /// list.
    fn turns(
        &self,
        id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<Turn>, StoreError>> + Send;

    /// Append a completed turn to the end of a session.
    fn append(
        &self,
        id: &SessionId,
        turn: Turn,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
