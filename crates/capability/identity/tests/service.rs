use async_trait::async_trait;
use serde_json::json;
use shop_identity::{
    IdentityError, IdentityService, OtpDecision, OtpProvider, require_field,
};
use shop_storage::{
    EmailRegistration, InMemoryDeviceStore, InMemoryEmailStore, InMemoryUserStore, UserStore,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingProvider {
    sent: AtomicUsize,
}

#[async_trait]
impl OtpProvider for CountingProvider {
    async fn send(&self, _mobile_number: &str) -> Result<(), IdentityError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn verify(&self, otp: &str) -> Result<OtpDecision, IdentityError> {
        if otp == "0000" {
            Ok(OtpDecision::Rejected)
        } else {
            Ok(OtpDecision::Accepted)
        }
    }
}

struct FailingProvider;

#[async_trait]
impl OtpProvider for FailingProvider {
    async fn send(&self, _mobile_number: &str) -> Result<(), IdentityError> {
        Err(IdentityError::Otp("sms gateway down".to_string()))
    }

    async fn verify(&self, _otp: &str) -> Result<OtpDecision, IdentityError> {
        Ok(OtpDecision::Accepted)
    }
}

#[tokio::test]
async fn failed_send_creates_no_user() {
    let user_store = Arc::new(InMemoryUserStore::new());
    let service = IdentityService::new(
        Arc::new(InMemoryDeviceStore::new()),
        user_store.clone(),
        Arc::new(InMemoryEmailStore::new()),
        Arc::new(FailingProvider),
    );
    let err = service
        .request_otp("9999999999", "device_1")
        .await
        .expect_err("send fails");
    assert!(matches!(err, IdentityError::Otp(_)));
    assert!(user_store.find_user("9999999999").await.expect("find").is_none());
    let lookup = user_store.find_or_create_user("8888888888").await.expect("create");
    assert_eq!(lookup.user.user_id.as_str(), "user_1");
}

#[tokio::test]
async fn add_device_returns_sequential_ids() {
    let service = IdentityService::in_memory();
    let first = service.add_device(json!({"os": "android"})).await.expect("add");
    let second = service.add_device(json!({"os": "android"})).await.expect("add");
    assert_eq!(first.as_str(), "device_1");
    assert_eq!(second.as_str(), "device_2");
    let stored = service
        .device_store()
        .find_device(&first)
        .await
        .expect("find")
        .expect("device");
    assert_eq!(stored.payload, json!({"os": "android"}));
}

#[tokio::test]
async fn request_otp_reuses_user_per_mobile() {
    let service = IdentityService::in_memory();
    let first = service.request_otp("9999999999", "device_1").await.expect("otp");
    let again = service.request_otp("9999999999", "device_7").await.expect("otp");
    let other = service.request_otp("8888888888", "device_1").await.expect("otp");
    assert_eq!(first.user_id, again.user_id);
    assert!(first.user_created);
    assert!(!again.user_created);
    assert_eq!(again.device_id, "device_7");
    assert_ne!(other.user_id, first.user_id);
}

#[tokio::test]
async fn request_otp_passes_unknown_device_through() {
    let service = IdentityService::in_memory();
    let issued = service.request_otp("9999999999", "no-such-device").await.expect("otp");
    assert_eq!(issued.device_id, "no-such-device");
}

#[tokio::test]
async fn simulated_otp_accepts_everything() {
    let service = IdentityService::in_memory();
    for otp in ["1234", "", "not-a-number"] {
        let result = service.verify_otp(otp).await.expect("verify");
        assert!(result.is_accepted());
        assert_eq!(result.otp, otp);
    }
}

#[tokio::test]
async fn provider_is_injected() {
    let provider = Arc::new(CountingProvider::default());
    let service = IdentityService::new(
        Arc::new(InMemoryDeviceStore::new()),
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryEmailStore::new()),
        provider.clone(),
    );
    service.request_otp("9999999999", "device_1").await.expect("otp");
    service.request_otp("9999999999", "device_1").await.expect("otp");
    assert_eq!(provider.sent.load(Ordering::SeqCst), 2);
    let result = service.verify_otp("0000").await.expect("verify");
    assert_eq!(result.decision, OtpDecision::Rejected);
}

#[tokio::test]
async fn register_email_detects_duplicates() {
    let service = IdentityService::in_memory();
    assert_eq!(
        service.register_email("a@b.com").await.expect("register"),
        EmailRegistration::Registered
    );
    assert_eq!(
        service.register_email("a@b.com").await.expect("register"),
        EmailRegistration::AlreadyExists
    );
}

#[test]
fn require_field_reports_name() {
    let err = require_field::<String>(None, "mobileNumber").expect_err("missing");
    assert!(matches!(err, IdentityError::MissingField("mobileNumber")));
    assert_eq!(err.to_string(), "mobileNumber required");
    assert_eq!(require_field(Some(""), "otp").expect("present"), "");
}
