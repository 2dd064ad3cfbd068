use crate::models::UserId;
use crate::store::ExerciseStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ExerciseStore>>,
    /// Every exercise route acts on behalf of this user.
    pub user_id: UserId,
}

impl AppState {
    pub fn new(store: ExerciseStore, user_id: UserId) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            user_id,
        }
    }
}
