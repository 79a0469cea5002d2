use api_contract::{ApiResponse, MessageDto, CODE_MISSING_FIELD, STATUS_FAILED, STATUS_OK};
use serde_json::json;

#[test]
fn api_response_success() {
    let response = ApiResponse::success(MessageDto::new("ok"));
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value, json!({ "status": 1, "data": { "message": "ok" } }));
}

#[test]
fn api_response_rejected_keeps_data() {
    let response = ApiResponse::rejected(MessageDto::new("Email exists"));
    assert_eq!(response.status, STATUS_FAILED);
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value["data"]["message"], "Email exists");
    assert!(value.get("error").is_none());
}

#[test]
fn api_response_missing_field() {
    let response = ApiResponse::<()>::missing_field("mobileNumber");
    assert_ne!(response.status, STATUS_OK);
    let value = serde_json::to_value(response).expect("serialize");
    assert!(value.get("data").is_none());
    assert_eq!(value["error"]["code"], CODE_MISSING_FIELD);
    assert_eq!(value["error"]["field"], "mobileNumber");
    assert_eq!(value["error"]["message"], "mobileNumber required");
}
