//! Data Transfer Objects
//!
//! DTOs carry data across the application boundary in the JSON shape
//! clients see (camelCase field names, decimals as strings).

mod catalog_dto;
mod dashboard_dto;
mod order_dto;
mod user_dto;

pub use catalog_dto::{
    CategoryDto, ProductDto, SaveCategoryDto, SaveProductDto, SaveSupplierDto, SupplierDto,
};
pub use dashboard_dto::{DashboardDto, StockAlertDto, TopSellerDto};
pub use order_dto::{OrderDto, PlaceOrderDto};
pub use user_dto::{CreateUserDto, UpdateProfileDto, UserDto};
