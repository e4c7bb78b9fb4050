use addon_functions::{Error, InvocationContext, invoke_template};
use addons::hello_world;
use serde_json::{Value, json};

const ABC_123_PAGE: &str = r#"<html>
        <head>
                <link rel="stylesheet" href="https://platform.servicem8.com/sdk/1.0/sdk.css">
        <script src="https://platform.servicem8.com/sdk/1.0/sdk.js"></script>
                <script>
                        var client = SMClient.init();

                        //Resize Addon Window
                        client.resizeWindow(500, 200);

                </script>
        </head>
        <body>
                <h1>Hello World Lambda Event</h1>

                <p>You have opened job <b>abc-123</b></p>

                <button onClick="client.closeWindow();">Close Window</button>
        </body>
        </html>"#;

fn invoke(payload: Value) -> Result<Value, Error> {
    invoke_template(
        payload,
        &InvocationContext::new("8476a536-e9f4-11e8-9739-2dfe598c3fcd")
            .with_function_name("hello-world"),
        hello_world::handle,
    )
}

fn event_response(reply: &Value) -> &str {
    reply["eventResponse"]
        .as_str()
        .expect("eventResponse is a string")
}

/// Checks that every opened tag is closed in order. `<link>` is the only void element used.
fn tags_balanced(html: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();
    for tag in html.split('<').skip(1) {
        let end = tag.find(['>', ' ']).unwrap_or(tag.len());
        let name = &tag[..end];
        if let Some(closing) = name.strip_prefix('/') {
            if open.pop() != Some(closing) {
                return false;
            }
        } else if name != "link" {
            open.push(name);
        }
    }
    open.is_empty()
}

#[test]
fn renders_exact_page_for_job() {
    let reply = invoke(json!({"eventArgs": {"jobUUID": "abc-123"}})).expect("valid event");
    assert_eq!(json!({"eventResponse": ABC_123_PAGE}), reply);
}

#[test]
fn job_lands_inside_the_paragraph() {
    for job_uuid in ["X", "1c4dc5d5-b8b5-4b7e-9d0a-1f9c5a3b2e11", "", "job with spaces"] {
        let reply = invoke(json!({"eventArgs": {"jobUUID": job_uuid}})).expect("valid event");
        let html = event_response(&reply);
        assert!(html.contains(&format!("<p>You have opened job <b>{job_uuid}</b></p>")));
        assert_eq!(ABC_123_PAGE.replace("abc-123", job_uuid), html);
    }
}

#[test]
fn missing_job_uuid_fails() {
    let error = invoke(json!({"eventArgs": {}})).expect_err("jobUUID is required");
    assert!(matches!(error, Error::Extract(_)));
    assert!(error.to_string().contains("jobUUID"));
}

#[test]
fn missing_event_args_fails() {
    let error = invoke(json!({})).expect_err("eventArgs is required");
    assert!(matches!(error, Error::Extract(_)));
    assert!(error.to_string().contains("eventArgs"));
}

#[test]
fn non_object_payload_fails() {
    let error = invoke(json!("abc-123")).expect_err("payload must be an object");
    assert!(matches!(error, Error::Extract(_)));
}

#[test]
fn repeated_invocations_are_identical() {
    let payload = json!({"eventArgs": {"jobUUID": "abc-123"}});
    let first = invoke(payload.clone()).expect("valid event");
    let second = invoke(payload).expect("valid event");
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}

#[test]
fn other_envelope_fields_do_not_change_the_page() {
    let reply = invoke(json!({
        "eventName": "hello_world_event",
        "eventVersion": "1.0",
        "eventArgs": {"jobUUID": "abc-123", "companyUUID": "not-read"},
        "auth": {"accessToken": "temporary-token", "accessTokenExpiry": 3600},
    }))
    .expect("valid event");
    assert_eq!(ABC_123_PAGE, event_response(&reply));
}

#[test]
fn page_is_well_formed_for_plain_identifiers() {
    let reply = invoke(json!({"eventArgs": {"jobUUID": "abc-123"}})).expect("valid event");
    assert!(tags_balanced(event_response(&reply)));
}

#[test]
fn markup_in_identifier_is_reflected_unescaped() {
    let reply = invoke(json!({"eventArgs": {"jobUUID": "</b>"}})).expect("valid event");
    let html = event_response(&reply);
    assert!(html.contains("<b></b></b></p>"));
    assert!(!tags_balanced(html));
}
