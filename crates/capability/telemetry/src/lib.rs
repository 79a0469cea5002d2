//! 追踪、请求 ID 生成与进程内计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数器快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub devices_registered: u64,
    pub otp_requested: u64,
    pub users_created: u64,
    pub otp_verified: u64,
    pub emails_registered: u64,
    pub emails_rejected: u64,
    pub bad_requests: u64,
}

/// 进程内计数器。
pub struct TelemetryMetrics {
    devices_registered: AtomicU64,
    otp_requested: AtomicU64,
    users_created: AtomicU64,
    otp_verified: AtomicU64,
    emails_registered: AtomicU64,
    emails_rejected: AtomicU64,
    bad_requests: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            devices_registered: AtomicU64::new(0),
            otp_requested: AtomicU64::new(0),
            users_created: AtomicU64::new(0),
            otp_verified: AtomicU64::new(0),
            emails_registered: AtomicU64::new(0),
            emails_rejected: AtomicU64::new(0),
            bad_requests: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            devices_registered: self.devices_registered.load(Ordering::Relaxed),
            otp_requested: self.otp_requested.load(Ordering::Relaxed),
            users_created: self.users_created.load(Ordering::Relaxed),
            otp_verified: self.otp_verified.load(Ordering::Relaxed),
            emails_registered: self.emails_registered.load(Ordering::Relaxed),
            emails_rejected: self.emails_rejected.load(Ordering::Relaxed),
            bad_requests: self.bad_requests.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数器实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录设备登记次数。
pub fn record_device_registered() {
    metrics().devices_registered.fetch_add(1, Ordering::Relaxed);
}

/// 记录 OTP 请求次数；`user_created` 为真时同时记录新建用户。
pub fn record_otp_requested(user_created: bool) {
    let metrics = metrics();
    metrics.otp_requested.fetch_add(1, Ordering::Relaxed);
    if user_created {
        metrics.users_created.fetch_add(1, Ordering::Relaxed);
    }
}

/// 记录 OTP 校验次数。
pub fn record_otp_verified() {
    metrics().otp_verified.fetch_add(1, Ordering::Relaxed);
}

/// 记录邮箱登记结果。
pub fn record_email_referral(registered: bool) {
    let metrics = metrics();
    if registered {
        metrics.emails_registered.fetch_add(1, Ordering::Relaxed);
    } else {
        metrics.emails_rejected.fetch_add(1, Ordering::Relaxed);
    }
}

/// 记录 400 请求次数。
pub fn record_bad_request() {
    metrics().bad_requests.fetch_add(1, Ordering::Relaxed);
}
