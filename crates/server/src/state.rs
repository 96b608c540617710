use std::sync::Arc;

use service::users::UserService;

/// Shared router state; the store behind `users` is chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users: Arc::new(users) }
    }
}
