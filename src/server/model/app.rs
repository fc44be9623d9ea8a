use sea_orm::DatabaseConnection;

use crate::server::{config::Config, notify::ChangeNotifier};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: ChangeNotifier,
    pub config: Config,
}
