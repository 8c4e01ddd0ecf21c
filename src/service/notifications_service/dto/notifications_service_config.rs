pub struct NotificationsServiceConfig {
    /// Max length in bytes of every text field except user ids
    pub max_field_len: usize,
}
