pub mod form_state;
pub mod otp;
pub mod redis;

pub use form_state::{FormStateStore, slots};
pub use otp::OtpStore;
