//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    #[strum(serialize = "bullhorn_produce_notifications")]
    ProduceNotifications,
}
