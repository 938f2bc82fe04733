pub mod filters;
pub mod list_source;
pub use list_source::ListSource;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod category_repo;
pub use category_repo::CategoryRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
