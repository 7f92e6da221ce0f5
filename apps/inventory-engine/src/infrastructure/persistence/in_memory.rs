//! In-memory inventory store.
//!
//! One lock guards every collection. Each repository method takes the lock
//! once, so checks and the writes they protect never interleave with other
//! writers, and snapshots see a single consistent state.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{InventorySnapshotPort, SnapshotError};
use crate::domain::accounts::{AccountError, User, UserRepository};
use crate::domain::catalog::{
    CatalogError, CatalogRepository, Category, CategoryDetails, GuardedEntity, Product,
    ProductDetails, ReferentialGuard, Supplier, SupplierDetails,
};
use crate::domain::ordering::{FulfillmentRequest, Order, OrderError, OrderRepository};
use crate::domain::reporting::InventorySnapshot;
use crate::domain::shared::{CategoryId, OrderId, ProductId, SupplierId, UserId};

#[derive(Debug, Default)]
struct StoreState {
    categories: HashMap<CategoryId, Category>,
    suppliers: HashMap<SupplierId, Supplier>,
    products: HashMap<ProductId, Product>,
    orders: HashMap<OrderId, Order>,
    users: HashMap<UserId, User>,
}

impl StoreState {
    fn category_name_taken(&self, name: &str, except: Option<&CategoryId>) -> bool {
        self.categories
            .values()
            .any(|c| c.name() == name && Some(c.id()) != except)
    }

    fn email_taken(&self, email: &str, except: Option<&UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.has_email(email) && Some(u.id()) != except)
    }

    fn check_references(
        &self,
        category_id: &CategoryId,
        supplier_id: &SupplierId,
    ) -> Result<(), CatalogError> {
        if !self.categories.contains_key(category_id) {
            return Err(CatalogError::InvalidReference {
                field: "categoryId",
                id: category_id.to_string(),
            });
        }
        if !self.suppliers.contains_key(supplier_id) {
            return Err(CatalogError::InvalidReference {
                field: "supplierId",
                id: supplier_id.to_string(),
            });
        }
        Ok(())
    }

    fn order_references(&self, product_id: &ProductId) -> usize {
        self.orders
            .values()
            .filter(|o| o.product_id() == product_id)
            .count()
    }
}

fn sorted_by<T, K: Ord>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by_key(|item| key(item));
    items
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| {
        b.order_date()
            .cmp(&a.order_date())
            .then_with(|| a.id().cmp(b.id()))
    });
    orders
}

/// In-memory implementation of every repository port.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryInventoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.state.read().products.len()
    }

    /// Number of orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.state.read().orders.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryInventoryStore {
    async fn insert_category(&self, category: Category) -> Result<Category, CatalogError> {
        let mut state = self.state.write();
        if state.category_name_taken(category.name(), None) {
            return Err(CatalogError::DuplicateName {
                name: category.name().to_string(),
            });
        }
        state
            .categories
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        details: CategoryDetails,
    ) -> Result<Category, CatalogError> {
        let details = details.normalized()?;
        let mut state = self.state.write();
        let mut category = state
            .categories
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Category",
                id: id.to_string(),
            })?;
        if state.category_name_taken(&details.name, Some(id)) {
            return Err(CatalogError::DuplicateName { name: details.name });
        }
        category.update(details)?;
        state.categories.insert(id.clone(), category.clone());
        Ok(category)
    }

    async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>, CatalogError> {
        Ok(self.state.read().categories.get(id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let state = self.state.read();
        Ok(sorted_by(state.categories.values().cloned(), |c| {
            (c.name().to_string(), c.id().clone())
        }))
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<Category, CatalogError> {
        let mut state = self.state.write();
        let references = ReferentialGuard::count_category_references(id, state.products.values());
        ReferentialGuard::ensure_deletable(GuardedEntity::Category, references)?;
        state
            .categories
            .remove(id)
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Category",
                id: id.to_string(),
            })
    }

    async fn insert_supplier(&self, supplier: Supplier) -> Result<Supplier, CatalogError> {
        self.state
            .write()
            .suppliers
            .insert(supplier.id().clone(), supplier.clone());
        Ok(supplier)
    }

    async fn update_supplier(
        &self,
        id: &SupplierId,
        details: SupplierDetails,
    ) -> Result<Supplier, CatalogError> {
        let mut state = self.state.write();
        let supplier = state
            .suppliers
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Supplier",
                id: id.to_string(),
            })?;
        supplier.update(details)?;
        Ok(supplier.clone())
    }

    async fn find_supplier(&self, id: &SupplierId) -> Result<Option<Supplier>, CatalogError> {
        Ok(self.state.read().suppliers.get(id).cloned())
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, CatalogError> {
        let state = self.state.read();
        Ok(sorted_by(state.suppliers.values().cloned(), |s| {
            (s.name().to_string(), s.id().clone())
        }))
    }

    async fn delete_supplier(&self, id: &SupplierId) -> Result<Supplier, CatalogError> {
        let mut state = self.state.write();
        let references = ReferentialGuard::count_supplier_references(id, state.products.values());
        ReferentialGuard::ensure_deletable(GuardedEntity::Supplier, references)?;
        state
            .suppliers
            .remove(id)
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Supplier",
                id: id.to_string(),
            })
    }

    async fn insert_product(&self, product: Product) -> Result<Product, CatalogError> {
        let mut state = self.state.write();
        state.check_references(product.category_id(), product.supplier_id())?;
        state.products.insert(product.id().clone(), product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, CatalogError> {
        let mut state = self.state.write();
        if !state.products.contains_key(id) {
            return Err(CatalogError::NotFound {
                entity: "Product",
                id: id.to_string(),
            });
        }
        state.check_references(&details.category_id, &details.supplier_id)?;
        let product = state
            .products
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Product",
                id: id.to_string(),
            })?;
        product.update(details)?;
        Ok(product.clone())
    }

    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.state.read().products.get(id).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let state = self.state.read();
        Ok(sorted_by(state.products.values().cloned(), |p| {
            (p.name().to_string(), p.id().clone())
        }))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let mut state = self.state.write();
        let references = state.order_references(id);
        ReferentialGuard::ensure_deletable(GuardedEntity::Product, references)?;
        state
            .products
            .remove(id)
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Product",
                id: id.to_string(),
            })
    }
}

#[async_trait]
impl OrderRepository for InMemoryInventoryStore {
    async fn fulfill(&self, request: FulfillmentRequest) -> Result<Order, OrderError> {
        let mut state = self.state.write();
        let product =
            state
                .products
                .get_mut(&request.product_id)
                .ok_or_else(|| OrderError::ProductNotFound {
                    product_id: request.product_id.to_string(),
                })?;
        let order = Order::place(
            request.product_id.clone(),
            request.user_id,
            request.quantity,
            product.price(),
            request.placed_at,
        )?;
        product
            .withdraw(request.quantity)
            .map_err(|shortfall| OrderError::insufficient(request.product_id.as_str(), shortfall))?;
        state.orders.insert(order.id().clone(), order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.state.read().orders.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.state.read().orders.values().cloned().collect();
        Ok(newest_first(orders))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .state
            .read()
            .orders
            .values()
            .filter(|o| o.is_placed_by(user_id))
            .cloned()
            .collect();
        Ok(newest_first(orders))
    }
}

#[async_trait]
impl UserRepository for InMemoryInventoryStore {
    async fn insert(&self, user: User) -> Result<User, AccountError> {
        let mut state = self.state.write();
        if state.email_taken(user.email(), None) {
            return Err(AccountError::DuplicateEmail {
                email: user.email().to_string(),
            });
        }
        state.users.insert(user.id().clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, AccountError> {
        let mut state = self.state.write();
        if !state.users.contains_key(user.id()) {
            return Err(AccountError::NotFound {
                user_id: user.id().to_string(),
            });
        }
        if state.email_taken(user.email(), Some(user.id())) {
            return Err(AccountError::DuplicateEmail {
                email: user.email().to_string(),
            });
        }
        state.users.insert(user.id().clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError> {
        Ok(self.state.read().users.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AccountError> {
        let state = self.state.read();
        Ok(sorted_by(state.users.values().cloned(), |u| {
            (u.name().to_string(), u.id().clone())
        }))
    }

    async fn delete(&self, id: &UserId) -> Result<User, AccountError> {
        self.state
            .write()
            .users
            .remove(id)
            .ok_or_else(|| AccountError::NotFound {
                user_id: id.to_string(),
            })
    }
}

#[async_trait]
impl InventorySnapshotPort for InMemoryInventoryStore {
    async fn snapshot(&self) -> Result<InventorySnapshot, SnapshotError> {
        let state = self.state.read();
        Ok(InventorySnapshot {
            categories: state.categories.values().cloned().collect(),
            products: state.products.values().cloned().collect(),
            orders: state.orders.values().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::accounts::{PasswordHash, Role, UserProfile};
    use crate::domain::shared::{Money, Quantity, StockLevel, Timestamp};
    use rust_decimal_macros::dec;

    async fn seeded(stock: u32) -> (InMemoryInventoryStore, Product) {
        let store = InMemoryInventoryStore::new();
        let category = store
            .insert_category(
                Category::new(CategoryDetails {
                    name: "Tools".to_string(),
                    description: String::new(),
                })
                .unwrap(),
            )
            .await
            .unwrap();
        let supplier = store
            .insert_supplier(
                Supplier::new(SupplierDetails {
                    name: "Acme".to_string(),
                    ..SupplierDetails::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        let product = store
            .insert_product(
                Product::new(ProductDetails {
                    name: "Hammer".to_string(),
                    description: String::new(),
                    price: Money::new(dec!(12.50)),
                    stock: StockLevel::new(stock),
                    category_id: category.id().clone(),
                    supplier_id: supplier.id().clone(),
                    image: None,
                })
                .unwrap(),
            )
            .await
            .unwrap();
        (store, product)
    }

    fn request(product: &Product, units: u32) -> FulfillmentRequest {
        FulfillmentRequest {
            product_id: product.id().clone(),
            user_id: UserId::new("u-1"),
            quantity: Quantity::try_new(units).unwrap(),
            placed_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_category_name_rejected() {
        let (store, _) = seeded(1).await;
        let err = store
            .insert_category(
                Category::new(CategoryDetails {
                    name: "  Tools ".to_string(),
                    description: String::new(),
                })
                .unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[tokio::test]
    async fn renaming_category_to_itself_is_allowed() {
        let (store, product) = seeded(1).await;
        let updated = store
            .update_category(
                product.category_id(),
                CategoryDetails {
                    name: "Tools".to_string(),
                    description: "Hand tools".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description(), "Hand tools");
    }

    #[tokio::test]
    async fn guarded_delete_checks_references_first() {
        let (store, product) = seeded(1).await;
        let err = store
            .delete_category(product.category_id())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ReferentialConflict {
                entity: GuardedEntity::Category,
                references: 1
            }
        ));
        let err = store
            .delete_category(&CategoryId::new("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn dangling_reference_rejected() {
        let (store, product) = seeded(1).await;
        let mut details = ProductDetails {
            name: "Saw".to_string(),
            description: String::new(),
            price: Money::new(dec!(3)),
            stock: StockLevel::new(1),
            category_id: CategoryId::new("ghost"),
            supplier_id: product.supplier_id().clone(),
            image: None,
        };
        let err = store
            .insert_product(Product::new(details.clone()).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidReference {
                field: "categoryId",
                ..
            }
        ));

        details.category_id = product.category_id().clone();
        details.supplier_id = SupplierId::new("ghost");
        let err = store
            .update_product(product.id(), details)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidReference {
                field: "supplierId",
                ..
            }
        ));
        assert_eq!(store.product_count(), 1);
    }

    #[tokio::test]
    async fn fulfill_decrements_and_captures_price() {
        let (store, product) = seeded(3).await;
        let order = store.fulfill(request(&product, 2)).await.unwrap();
        assert_eq!(order.unit_price(), Money::new(dec!(12.50)));
        assert_eq!(order.total_price(), Money::new(dec!(25.00)));
        let after = store.find_product(product.id()).await.unwrap().unwrap();
        assert_eq!(after.stock().units(), 1);
    }

    #[tokio::test]
    async fn fulfill_shortfall_changes_nothing() {
        let (store, product) = seeded(1).await;
        let err = store.fulfill(request(&product, 2)).await.unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientStock {
                product_id: product.id().to_string(),
                requested: 2,
                available: 1
            }
        );
        assert_eq!(store.order_count(), 0);
        let after = store.find_product(product.id()).await.unwrap().unwrap();
        assert_eq!(after.stock().units(), 1);
    }

    #[tokio::test]
    async fn unrepresentable_total_leaves_stock_untouched() {
        let (store, product) = seeded(5).await;
        let mut stored = serde_json::to_value(&product).unwrap();
        stored["price"] = serde_json::Value::String(rust_decimal::Decimal::MAX.to_string());
        let overpriced: Product = serde_json::from_value(stored).unwrap();
        store
            .state
            .write()
            .products
            .insert(overpriced.id().clone(), overpriced);

        let err = store.fulfill(request(&product, 2)).await.unwrap_err();
        assert!(matches!(err, OrderError::TotalOverflow { quantity: 2, .. }));
        assert_eq!(store.order_count(), 0);
        let after = store.find_product(product.id()).await.unwrap().unwrap();
        assert_eq!(after.stock().units(), 5);
    }

    #[tokio::test]
    async fn referenced_supplier_cannot_be_deleted() {
        let (store, product) = seeded(1).await;
        let err = store
            .delete_supplier(product.supplier_id())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ReferentialConflict {
                entity: GuardedEntity::Supplier,
                references: 1
            }
        ));
        assert_eq!(
            err.to_string(),
            "Cannot delete supplier associated with Products"
        );
        assert!(
            store
                .find_supplier(product.supplier_id())
                .await
                .unwrap()
                .is_some()
        );

        let replacement = store
            .insert_supplier(
                Supplier::new(SupplierDetails {
                    name: "Globex".to_string(),
                    ..SupplierDetails::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        store
            .update_product(
                product.id(),
                ProductDetails {
                    name: product.name().to_string(),
                    description: String::new(),
                    price: product.price(),
                    stock: product.stock(),
                    category_id: product.category_id().clone(),
                    supplier_id: replacement.id().clone(),
                    image: None,
                },
            )
            .await
            .unwrap();

        let removed = store.delete_supplier(product.supplier_id()).await.unwrap();
        assert_eq!(removed.name(), "Acme");
        assert!(
            store
                .find_supplier(product.supplier_id())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn ordered_product_cannot_be_deleted() {
        let (store, product) = seeded(2).await;
        store.fulfill(request(&product, 1)).await.unwrap();
        let err = store.delete_product(product.id()).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ReferentialConflict {
                entity: GuardedEntity::Product,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn email_uniqueness_ignores_case() {
        let store = InMemoryInventoryStore::new();
        let profile = |email: &str| UserProfile {
            name: "Ada".to_string(),
            email: email.to_string(),
            address: String::new(),
        };
        store
            .insert(User::register(profile("ada@x.io"), PasswordHash::new("h"), Role::Admin).unwrap())
            .await
            .unwrap();
        let err = store
            .insert(
                User::register(profile("ADA@x.io"), PasswordHash::new("h"), Role::Customer)
                    .unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::DuplicateEmail { .. }));
    }

    #[tokio::test]
    async fn snapshot_copies_all_collections() {
        let (store, product) = seeded(4).await;
        store.fulfill(request(&product, 1)).await.unwrap();
        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.orders.len(), 1);
        assert_eq!(snapshot.products[0].stock().units(), 3);
    }
}
