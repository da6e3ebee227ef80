use serde::Serialize;

use crate::services::dashboard_service::Dashboard;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub user_name: String,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}
