use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateSpace {
    pub space_name: String,
    pub expires_at: Option<DateTime<Utc>>,
}
