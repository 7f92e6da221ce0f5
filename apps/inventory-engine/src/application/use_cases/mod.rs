//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.
//! Every operation takes the request's [`Caller`](crate::domain::accounts::Caller)
//! and returns a [`ServiceError`](crate::error::ServiceError) on failure.

mod compute_summary;
mod list_orders;
mod manage_categories;
mod manage_products;
mod manage_suppliers;
mod manage_users;
mod place_order;

pub use compute_summary::ComputeSummaryUseCase;
pub use list_orders::ListOrdersUseCase;
pub use manage_categories::ManageCategoriesUseCase;
pub use manage_products::ManageProductsUseCase;
pub use manage_suppliers::ManageSuppliersUseCase;
pub use manage_users::ManageUsersUseCase;
pub use place_order::PlaceOrderUseCase;
