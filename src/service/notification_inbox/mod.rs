mod notification_inbox;
mod notification_inbox_impl;

pub use notification_inbox::*;
pub use notification_inbox_impl::*;
