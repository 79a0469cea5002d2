//! Handlers 模块

pub mod devices;
pub mod health;
pub mod home;
pub mod metrics;
pub mod otp;
pub mod referral;

pub use devices::*;
pub use health::*;
pub use home::*;
pub use metrics::*;
pub use otp::*;
pub use referral::*;
