use mailcaster::api::models::{
    CampaignListResponse, CreateCampaignRequest, SaveTemplateRequest, StatusResponse, SuccessFlag, Template,
    TemplateListResponse,
};

#[test]
fn test_create_campaign_request_wire_names() {
    let request = CreateCampaignRequest {
        campaign_name: "Launch".to_string(),
        mailing_list: vec!["a@example.com".to_string(), "b@example.com".to_string()],
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["campaignName"], "Launch");
    assert_eq!(json["mailingList"][1], "b@example.com");
}

#[test]
fn test_save_template_request_wire_names() {
    let request = SaveTemplateRequest {
        title: "Welcome".to_string(),
        content: "<p>Hi</p>".to_string(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["Title"], "Welcome");
    assert_eq!(json["Content"], "<p>Hi</p>");
}

#[test]
fn test_campaign_list_response() {
    let body: CampaignListResponse = serde_json::from_str(r#"{"campaigns": ["A", "B"]}"#).unwrap();
    assert_eq!(body.campaigns, vec!["A", "B"]);

    // A non-array campaigns field is a deserialization error
    assert!(serde_json::from_str::<CampaignListResponse>(r#"{"campaigns": "A"}"#).is_err());
}

#[test]
fn test_template_list_response_object_wrapped() {
    let body: TemplateListResponse =
        serde_json::from_str(r#"{"templates": [{"Title": "T1", "Content": "<p>x</p>"}]}"#).unwrap();
    assert_eq!(
        body.templates,
        vec![Template {
            title: Some("T1".to_string()),
            content: "<p>x</p>".to_string()
        }]
    );

    // A bare array does not match the contract
    assert!(serde_json::from_str::<TemplateListResponse>(r#"[{"Title": "T1"}]"#).is_err());
}

#[test]
fn test_template_title_optional() {
    let template: Template = serde_json::from_str(r#"{"Content": "<p>x</p>"}"#).unwrap();
    assert_eq!(template.title, None);
    assert_eq!(template.content, "<p>x</p>");
}

#[test]
fn test_success_flag_boolean_encoding() {
    let status: StatusResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(status.success.is_truthy());
    assert!(!status.success.is_true_string());

    let status: StatusResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert!(!status.success.is_truthy());
}

#[test]
fn test_success_flag_string_encoding() {
    let status: StatusResponse = serde_json::from_str(r#"{"success": "true"}"#).unwrap();
    assert!(status.success.is_truthy());
    assert!(status.success.is_true_string());

    // "false" is falsy in both interpretations
    let status: StatusResponse = serde_json::from_str(r#"{"success": "false"}"#).unwrap();
    assert!(!status.success.is_truthy());
    assert!(!status.success.is_true_string());
}

#[test]
fn test_success_flag_missing() {
    let status: StatusResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(status.success, SuccessFlag::Missing);
    assert!(!status.success.is_truthy());
    assert_eq!(status.message, None);
}

#[test]
fn test_status_response_message_passthrough() {
    let status: StatusResponse =
        serde_json::from_str(r#"{"success": false, "message": "Recipient limit exceeded"}"#).unwrap();
    assert_eq!(status.message.as_deref(), Some("Recipient limit exceeded"));
}
