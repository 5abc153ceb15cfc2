//! Application Layer (Use Cases)

pub mod create_item;
pub mod dashboard_stats;
pub mod delete_item;
pub mod list_items;
pub mod update_item;

pub use create_item::CreateItemUseCase;
pub use dashboard_stats::{DashboardStatsUseCase, StatsOutput};
pub use delete_item::DeleteItemUseCase;
pub use list_items::ListItemsUseCase;
pub use update_item::UpdateItemUseCase;
