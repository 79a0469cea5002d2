pub mod ids;

pub use ids::{DEVICE_ID_PREFIX, DeviceId, IdSequence, USER_ID_PREFIX, UserId};
