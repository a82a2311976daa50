use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
}
