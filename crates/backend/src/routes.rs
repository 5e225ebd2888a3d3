use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, system};

/// All API routes of the application
pub fn configure_routes() -> Router {
    let allocation_writes = Router::new()
        .route(
            "/api/assets/allocation/create",
            post(handlers::a003_allocation::create),
        )
        .route(
            "/api/assets/allocation/update",
            put(handlers::a003_allocation::update),
        )
        .route(
            "/api/assets/allocation/delete",
            post(handlers::a003_allocation::delete),
        )
        // layers run bottom-up: authenticate, then check the role
        .layer(middleware::from_fn(
            system::auth::middleware::require_allocation_manager,
        ))
        .layer(middleware::from_fn(system::auth::middleware::require_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        .route("/api/auth/signout", post(system::handlers::auth::signout))
        .route(
            "/api/auth/session",
            get(system::handlers::auth::session)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // D400 FLEET OVERVIEW
        // ========================================
        .route(
            "/api/dashboard/vehicle-summary",
            get(handlers::d400_fleet_overview::vehicle_summary),
        )
        .route(
            "/api/dashboard/vehicles-by-status/:status",
            get(handlers::d400_fleet_overview::vehicles_by_status),
        )
        .route(
            "/api/dashboard/vehicles-mot-due",
            get(handlers::d400_fleet_overview::vehicles_mot_due),
        )
        .route(
            "/api/dashboard/vehicles-tax-due",
            get(handlers::d400_fleet_overview::vehicles_tax_due),
        )
        .route(
            "/api/dashboard/fleet-overview",
            get(handlers::d400_fleet_overview::fleet_overview),
        )
        // ========================================
        // D401 COST ANALYSIS
        // ========================================
        .route(
            "/api/cost/service/:van_number",
            get(handlers::d401_cost_analysis::service_costs),
        )
        .route(
            "/api/cost/all-vehicles",
            get(handlers::d401_cost_analysis::all_vehicles),
        )
        .route(
            "/api/cost/vehicle-analysis",
            get(handlers::d401_cost_analysis::vehicle_analysis),
        )
        // ========================================
        // D402 DRIVER PERFORMANCE
        // ========================================
        .route(
            "/api/drivers/performance",
            get(handlers::d402_driver_performance::list_performance),
        )
        // ========================================
        // A001 VEHICLES
        // ========================================
        .route(
            "/api/vehicles/lookup/:van_number",
            get(handlers::a001_vehicle::lookup),
        )
        .route("/api/assets/all", get(handlers::a001_vehicle::list_all))
        .route(
            "/api/assets/by-id/:asset_id",
            get(handlers::a001_vehicle::by_id),
        )
        .route(
            "/api/assets/by-van/:van_number",
            get(handlers::a001_vehicle::by_van),
        )
        // ========================================
        // ASSETS: ENGINEERS AND ALLOCATIONS
        // ========================================
        .route(
            "/api/assets/engineers",
            get(handlers::a002_engineer::list_all),
        )
        .route(
            "/api/assets/allocations/:vehicle_id",
            get(handlers::a003_allocation::history),
        )
        .merge(allocation_writes)
}
