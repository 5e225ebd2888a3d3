pub mod aggregate;
pub mod requests;

pub use aggregate::{AllocationRecord, AllocationStatus};
pub use requests::{
    AllocationCreatedResponse, AllocationDeletedResponse, AllocationHistoryResponse,
    AllocationUpdatedResponse, CreateAllocationRequest, DeleteAllocationRequest,
    UpdateAllocationRequest,
};
