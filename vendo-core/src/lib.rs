pub mod collaborators;
pub mod order;
pub mod repository;

pub use collaborators::{DependencyError, ProductCatalog, ProductRecord, UserDirectory, UserRecord};
pub use order::{Order, OrderLine, OrderLineRequest, PricedOrder};
pub use repository::{OrderRepository, StoreError};
