use super::*;

/// Opens the contact form, returning the session cookie and the form's CSRF token.
async fn open_contact_form(app: &TestApp) -> (String, String) {
    let response = app.get("/contact", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie(&response).unwrap();
    let html = body_text(response).await;

    let marker = "name=\"csrf_token\" value=\"";
    let start = html.find(marker).unwrap() + marker.len();
    let end = start + html[start..].find('"').unwrap();

    (cookie, html[start..end].to_string())
}

fn valid_body(token: &str) -> String {
    format!(
        "name=Ada&email=ada%40example.com&subject=Hello&message=I+enjoyed+your+projects+page.&csrf_token={}",
        token
    )
}

/// Tests a valid contact submission.
///
/// Expected: exactly one message row and a thank-you flash on the next page
#[tokio::test]
async fn valid_submission_stores_one_message() {
    let app = TestApp::new().await;
    let (cookie, token) = open_contact_form(&app).await;

    let response = app
        .post_form("/contact", &valid_body(&token), Some(&cookie))
        .await;
    assert_redirect(&response, "/contact");

    assert_eq!(app.count(entity::prelude::Message).await, 1);

    let response = app.get("/contact", Some(&cookie)).await;
    assert!(body_text(response)
        .await
        .contains("Thank you for submitting your message!"));
}

/// Tests that field errors re-render the form with the submitted values.
///
/// Expected: 200 with per-field errors, submitted name kept, no row stored
#[tokio::test]
async fn invalid_submission_shows_field_errors() {
    let app = TestApp::new().await;
    let (cookie, token) = open_contact_form(&app).await;

    let body = format!(
        "name=Ada&email=not-an-email&subject=&message=short&csrf_token={}",
        token
    );
    let response = app.post_form("/contact", &body, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Invalid email address."));
    assert!(html.contains("This field is required."));
    assert!(html.contains("Field must be at least 10 characters long."));
    assert!(html.contains("value=\"Ada\""));

    assert_eq!(app.count(entity::prelude::Message).await, 0);
}

/// Tests that a submission without the session's token is refused.
///
/// Expected: 200 with the form error and no row stored
#[tokio::test]
async fn mismatched_token_is_rejected() {
    let app = TestApp::new().await;
    let (cookie, _token) = open_contact_form(&app).await;

    let response = app
        .post_form("/contact", &valid_body("forged"), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("The form has expired, please submit it again."));

    assert_eq!(app.count(entity::prelude::Message).await, 0);
}

/// Tests deleting a message from the dashboard.
///
/// Expected: the row is gone and a flash confirms it
#[tokio::test]
async fn delete_message_removes_row() {
    let app = TestApp::new().await;
    let cookie = app.signed_in().await;
    let message = factory::create_message(&app.db).await.unwrap();

    let response = app
        .get(
            &format!("/dashboard/delete_message/{}", message.id),
            Some(&cookie),
        )
        .await;
    assert_redirect(&response, "/dashboard");

    assert_eq!(app.count(entity::prelude::Message).await, 0);

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert!(body_text(response).await.contains("Message deleted!"));
}
