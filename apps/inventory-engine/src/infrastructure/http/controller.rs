//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State, rejection::QueryRejection},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::FixedOffset;

use crate::application::dto::{
    CategoryDto, CreateUserDto, OrderDto, PlaceOrderDto, ProductDto,
    SaveCategoryDto, SaveProductDto, SaveSupplierDto, SupplierDto, UpdateProfileDto, UserDto,
};
use crate::application::ports::{InventorySnapshotPort, PasswordHasherPort};
use crate::application::use_cases::{
    ComputeSummaryUseCase, ListOrdersUseCase, ManageCategoriesUseCase, ManageProductsUseCase,
    ManageSuppliersUseCase, ManageUsersUseCase, PlaceOrderUseCase,
};
use crate::domain::accounts::UserRepository;
use crate::domain::catalog::CatalogRepository;
use crate::domain::ordering::OrderRepository;
use crate::error::ServiceError;

use super::request::{CallerIdentity, DashboardQuery, JsonBody};
use super::response::{DashboardResponse, DataResponse, HealthResponse, OrderPlacedResponse};

/// A store implementing every port the API needs.
pub trait InventoryStore:
    CatalogRepository + OrderRepository + UserRepository + InventorySnapshotPort + 'static
{
}

impl<T> InventoryStore for T where
    T: CatalogRepository + OrderRepository + UserRepository + InventorySnapshotPort + 'static
{
}

/// Application state shared across handlers.
pub struct AppState<S, H>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    /// Category CRUD.
    pub categories: Arc<ManageCategoriesUseCase<S>>,
    /// Supplier CRUD.
    pub suppliers: Arc<ManageSuppliersUseCase<S>>,
    /// Product CRUD.
    pub products: Arc<ManageProductsUseCase<S>>,
    /// Order fulfillment.
    pub place_order: Arc<PlaceOrderUseCase<S, S>>,
    /// Order queries.
    pub list_orders: Arc<ListOrdersUseCase<S, S>>,
    /// Account directory.
    pub users: Arc<ManageUsersUseCase<S, H>>,
    /// Dashboard.
    pub dashboard: Arc<ComputeSummaryUseCase<S>>,
    /// Application version.
    pub version: String,
}

impl<S, H> AppState<S, H>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    /// Wire every use case to one store.
    pub fn new(store: Arc<S>, hasher: Arc<H>, zone: FixedOffset, version: impl Into<String>) -> Self {
        Self {
            categories: Arc::new(ManageCategoriesUseCase::new(Arc::clone(&store))),
            suppliers: Arc::new(ManageSuppliersUseCase::new(Arc::clone(&store))),
            products: Arc::new(ManageProductsUseCase::new(Arc::clone(&store))),
            place_order: Arc::new(PlaceOrderUseCase::new(
                Arc::clone(&store),
                Arc::clone(&store),
            )),
            list_orders: Arc::new(ListOrdersUseCase::new(
                Arc::clone(&store),
                Arc::clone(&store),
            )),
            users: Arc::new(ManageUsersUseCase::new(Arc::clone(&store), hasher)),
            dashboard: Arc::new(ComputeSummaryUseCase::new(store, zone)),
            version: version.into(),
        }
    }
}

impl<S, H> Clone for AppState<S, H>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            suppliers: Arc::clone(&self.suppliers),
            products: Arc::clone(&self.products),
            place_order: Arc::clone(&self.place_order),
            list_orders: Arc::clone(&self.list_orders),
            users: Arc::clone(&self.users),
            dashboard: Arc::clone(&self.dashboard),
            version: self.version.clone(),
        }
    }
}

type ApiResult<T> = Result<Json<DataResponse<T>>, ServiceError>;
type CreatedResult<T> = Result<(StatusCode, Json<DataResponse<T>>), ServiceError>;

/// Create the HTTP router with all endpoints.
pub fn create_router<S, H>(state: AppState<S, H>) -> Router
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let category = Router::new()
        .route("/", get(list_categories))
        .route("/add", post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        );

    let supplier = Router::new()
        .route("/", get(list_suppliers))
        .route("/add", post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        );

    let products = Router::new()
        .route("/", get(list_products))
        .route("/add", post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        );

    let orders = Router::new()
        .route("/", get(list_orders))
        .route("/add", post(place_order))
        .route("/{id}", get(get_order));

    let users = Router::new()
        .route("/", get(list_users))
        .route("/add", post(create_user))
        .route("/profile", get(get_profile).put(update_profile))
        .route("/{id}", axum::routing::delete(delete_user));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/category", category)
        .nest("/api/supplier", supplier)
        .nest("/api/products", products)
        .nest("/api/orders", orders)
        .nest("/api/users", users)
        .route("/api/dashboard", get(dashboard))
        .fallback(route_not_found)
        .layer(middleware::from_fn(track_requests))
        .with_state(state)
}

/// Record method, status and latency of every request.
async fn track_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed().as_secs_f64();
    let status = response.status().as_u16();
    tracing::debug!(%method, %path, status, elapsed_ms = elapsed * 1000.0, "HTTP request");
    crate::observability::record_http_request(&method, status, elapsed);
    response
}

async fn route_not_found() -> ServiceError {
    ServiceError::new(crate::error::ErrorCode::NotFound, "Route not found")
}

/// Health check endpoint.
async fn health_check<S, H>(State(state): State<AppState<S, H>>) -> impl IntoResponse
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

// ============================================
// Categories
// ============================================

async fn list_categories<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Vec<CategoryDto>>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let categories = state.categories.list(&caller).await?;
    Ok(Json(DataResponse::new(categories)))
}

async fn get_category<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<CategoryDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let category = state.categories.get(&caller, &id).await?;
    Ok(Json(DataResponse::new(category)))
}

async fn create_category<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<SaveCategoryDto>,
) -> CreatedResult<CategoryDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let category = state.categories.create(&caller, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(category, "Category added successfully")),
    ))
}

async fn update_category<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<SaveCategoryDto>,
) -> ApiResult<CategoryDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let category = state.categories.update(&caller, &id, body).await?;
    Ok(Json(DataResponse::with_message(
        category,
        "Category updated successfully",
    )))
}

async fn delete_category<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<CategoryDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let category = state.categories.delete(&caller, &id).await?;
    Ok(Json(DataResponse::with_message(
        category,
        "Category deleted successfully",
    )))
}

// ============================================
// Suppliers
// ============================================

async fn list_suppliers<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Vec<SupplierDto>>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let suppliers = state.suppliers.list(&caller).await?;
    Ok(Json(DataResponse::new(suppliers)))
}

async fn get_supplier<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<SupplierDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let supplier = state.suppliers.get(&caller, &id).await?;
    Ok(Json(DataResponse::new(supplier)))
}

async fn create_supplier<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<SaveSupplierDto>,
) -> CreatedResult<SupplierDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let supplier = state.suppliers.create(&caller, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(supplier, "Supplier added successfully")),
    ))
}

async fn update_supplier<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<SaveSupplierDto>,
) -> ApiResult<SupplierDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let supplier = state.suppliers.update(&caller, &id, body).await?;
    Ok(Json(DataResponse::with_message(
        supplier,
        "Supplier updated successfully",
    )))
}

async fn delete_supplier<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<SupplierDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let supplier = state.suppliers.delete(&caller, &id).await?;
    Ok(Json(DataResponse::with_message(
        supplier,
        "Supplier deleted successfully",
    )))
}

// ============================================
// Products
// ============================================

async fn list_products<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Vec<ProductDto>>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let products = state.products.list(&caller).await?;
    Ok(Json(DataResponse::new(products)))
}

async fn get_product<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<ProductDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let product = state.products.get(&caller, &id).await?;
    Ok(Json(DataResponse::new(product)))
}

async fn create_product<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<SaveProductDto>,
) -> CreatedResult<ProductDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let product = state.products.create(&caller, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(product, "Product added successfully")),
    ))
}

async fn update_product<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<SaveProductDto>,
) -> ApiResult<ProductDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let product = state.products.update(&caller, &id, body).await?;
    Ok(Json(DataResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

async fn delete_product<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<ProductDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let product = state.products.delete(&caller, &id).await?;
    Ok(Json(DataResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

// ============================================
// Orders
// ============================================

async fn list_orders<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Vec<OrderDto>>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let orders = state.list_orders.list(&caller).await?;
    Ok(Json(DataResponse::new(orders)))
}

async fn get_order<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<OrderDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let order = state.list_orders.get(&caller, &id).await?;
    Ok(Json(DataResponse::new(order)))
}

async fn place_order<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<PlaceOrderDto>,
) -> Result<(StatusCode, Json<OrderPlacedResponse>), ServiceError>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let order = state.place_order.execute(&caller, body).await?;
    Ok((StatusCode::CREATED, Json(OrderPlacedResponse::new(order))))
}

// ============================================
// Users
// ============================================

async fn list_users<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Vec<UserDto>>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let users = state.users.list(&caller).await?;
    Ok(Json(DataResponse::new(users)))
}

async fn create_user<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<CreateUserDto>,
) -> CreatedResult<UserDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let user = state.users.create(&caller, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(user, "User added successfully")),
    ))
}

async fn delete_user<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<String>,
) -> ApiResult<UserDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let user = state.users.delete(&caller, &id).await?;
    Ok(Json(DataResponse::with_message(
        user,
        "User deleted successfully",
    )))
}

async fn get_profile<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<UserDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let user = state.users.profile(&caller).await?;
    Ok(Json(DataResponse::new(user)))
}

async fn update_profile<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(body): JsonBody<UpdateProfileDto>,
) -> ApiResult<UserDto>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let user = state.users.update_profile(&caller, body).await?;
    Ok(Json(DataResponse::with_message(
        user,
        "Profile updated successfully",
    )))
}

// ============================================
// Dashboard
// ============================================

async fn dashboard<S, H>(
    State(state): State<AppState<S, H>>,
    CallerIdentity(caller): CallerIdentity,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<DashboardResponse>, ServiceError>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    let as_of = DashboardQuery::reference_time(query)?;
    let summary = state.dashboard.execute(&caller, as_of).await?;
    Ok(Json(DashboardResponse::new(summary)))
}
