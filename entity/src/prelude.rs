pub use super::attendance::Entity as Attendance;
pub use super::exam_result::Entity as ExamResult;
pub use super::notification::Entity as Notification;
pub use super::notification_batch::Entity as NotificationBatch;
pub use super::student::Entity as Student;
