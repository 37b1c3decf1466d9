pub mod assignee;
pub mod crud;
pub mod notification;
pub mod task_metrics;
pub mod user;

pub use assignee::AssigneeRepository;
pub use crud::{CrudEntity, CrudRepository, EntityValues};
pub use notification::{NotificationRepository, PgNotificationRepository};
pub use task_metrics::TaskMetricsRepository;
pub use user::UserRepository;
