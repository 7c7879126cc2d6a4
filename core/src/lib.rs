pub mod logging;
pub mod model;
pub mod repository;
pub mod service;

pub use model::filter::Filter;
pub use model::task::Task;
pub use repository::{FileTaskStore, MemoryTaskStore, TaskStore};
pub use service::task_list::TaskListService;
