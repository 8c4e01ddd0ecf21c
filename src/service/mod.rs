pub mod notification_inbox;
pub mod notifications_service;
