use shop_telemetry::{
    metrics, record_bad_request, record_device_registered, record_email_referral,
    record_otp_requested, record_otp_verified,
};

// 全局计数器在同一进程内累加，只断言增量。
#[test]
fn counters_accumulate() {
    let before = metrics().snapshot();
    record_device_registered();
    record_otp_requested(true);
    record_otp_requested(false);
    record_otp_verified();
    record_email_referral(true);
    record_email_referral(false);
    record_email_referral(false);
    record_bad_request();
    let after = metrics().snapshot();

    assert_eq!(after.devices_registered - before.devices_registered, 1);
    assert_eq!(after.otp_requested - before.otp_requested, 2);
    assert_eq!(after.users_created - before.users_created, 1);
    assert_eq!(after.otp_verified - before.otp_verified, 1);
    assert_eq!(after.emails_registered - before.emails_registered, 1);
    assert_eq!(after.emails_rejected - before.emails_rejected, 2);
    assert_eq!(after.bad_requests - before.bad_requests, 1);
}
