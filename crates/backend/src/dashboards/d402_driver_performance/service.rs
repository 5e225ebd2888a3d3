use contracts::dashboards::d402_driver_performance::DriverMetrics;

use super::repository;

/// Drivers ordered by rating, best first.
pub async fn list_performance() -> anyhow::Result<Vec<DriverMetrics>> {
    repository::list_all().await
}
