use contracts::domain::a001_vehicle::VehicleRecord;
use contracts::domain::a002_engineer::{Engineer, EngineersResponse};
use contracts::domain::a003_allocation::{
    AllocationCreatedResponse, AllocationDeletedResponse, AllocationHistoryResponse,
    AllocationRecord, AllocationUpdatedResponse, CreateAllocationRequest, DeleteAllocationRequest,
    UpdateAllocationRequest,
};

use crate::dashboards::d400_fleet_overview::api::get_vehicles_by_status;
use crate::shared::api_utils::{get_json, post_json, put_json};

const API_BASE: &str = "/api/assets";

/// Every vehicle, for the picker at the top of the page.
pub async fn fetch_vehicles() -> Result<Vec<VehicleRecord>, String> {
    get_vehicles_by_status("total").await.map(|r| r.vehicles)
}

pub async fn fetch_engineers() -> Result<Vec<Engineer>, String> {
    get_json::<EngineersResponse>(&format!("{}/engineers", API_BASE))
        .await
        .map(|r| r.engineers)
}

/// Allocation history of one vehicle, newest first.
pub async fn fetch_history(vehicle_id: &str) -> Result<Vec<AllocationRecord>, String> {
    get_json::<AllocationHistoryResponse>(&format!(
        "{}/allocations/{}",
        API_BASE,
        urlencoding::encode(vehicle_id)
    ))
    .await
    .map(|r| r.allocations)
}

pub async fn create_allocation(
    request: &CreateAllocationRequest,
) -> Result<AllocationCreatedResponse, String> {
    post_json(&format!("{}/allocation/create", API_BASE), request).await
}

pub async fn update_allocation(
    request: &UpdateAllocationRequest,
) -> Result<AllocationUpdatedResponse, String> {
    put_json(&format!("{}/allocation/update", API_BASE), request).await
}

pub async fn delete_allocation(allocation_id: &str) -> Result<AllocationDeletedResponse, String> {
    let request = DeleteAllocationRequest {
        allocation_id: allocation_id.to_string(),
    };
    post_json(&format!("{}/allocation/delete", API_BASE), &request).await
}
