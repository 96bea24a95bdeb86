use crate::auth::AuthState;
use crate::config::AppConfig;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub(crate) auth: Option<AuthState>,
    pub store: Store,
}
