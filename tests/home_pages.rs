mod common;

use common::{Fixtures, TestApp};
use odetofood::ReviewRepository;
use reqwest::StatusCode;

/// Fetches the add-review form and returns the anti-forgery token it issued.
async fn issued_token(app: &TestApp, restaurant_id: i32) -> String {
    let resp = app
        .client
        .get(app.url(&format!("/Home/AddReview/{}", restaurant_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp.headers()[reqwest::header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    let (_, token) = cookie
        .split(';')
        .next()
        .unwrap()
        .split_once('=')
        .unwrap();

    let page = resp.text().await.unwrap();
    assert!(page.contains(&format!("value=\"{}\"", token)));
    assert!(page.contains(&format!("name=\"restaurantId\" value=\"{}\"", restaurant_id)));
    token.to_string()
}

async fn post_review(
    app: &TestApp,
    path_id: i32,
    cookie_token: Option<&str>,
    fields: &[(&str, &str)],
) -> reqwest::Response {
    let mut request = app
        .client
        .post(app.url(&format!("/Home/AddReview/{}", path_id)))
        .form(fields);
    if let Some(token) = cookie_token {
        request = request.header(reqwest::header::COOKIE, format!("odetofood_csrf={}", token));
    }
    request.send().await.unwrap()
}

#[tokio::test]
async fn index_lists_restaurants() {
    let app = TestApp::spawn().await;

    for path in ["/", "/Home", "/Home/Index"] {
        let resp = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let page = resp.text().await.unwrap();
        assert!(page.contains("Wok palace"));
        assert!(page.contains("/Home/Details/1"));
    }
}

#[tokio::test]
async fn details_shows_restaurant_and_its_reviews() {
    let app = TestApp::spawn().await;
    let mut fixtures = Fixtures::new(31);
    let review = app.store.reviews().add(fixtures.review_for(1)).await.unwrap();

    let resp = app.client.get(app.url("/Home/Details/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = resp.text().await.unwrap();
    assert!(page.contains("Wok palace"));
    assert!(page.contains(&review.reviewer_name));
    assert!(page.contains(&format!("{}/10", review.rating)));
}

#[tokio::test]
async fn details_of_missing_restaurant_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/Home/Details/42")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.text().await.unwrap().contains("Restaurant 42 does not exist."));
}

#[tokio::test]
async fn details_with_non_numeric_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/Home/Details/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("<h1>Bad request</h1>"));

    let resp = app.client.get(app.url("/Home/AddReview/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_review_is_persisted_and_redirects_to_details() {
    let app = TestApp::spawn().await;
    let token = issued_token(&app, 1).await;

    let resp = post_review(
        &app,
        1,
        Some(&token),
        &[
            ("__RequestVerificationToken", token.as_str()),
            ("rating", "9"),
            ("body", "Great noodles"),
            ("restaurantId", "1"),
            ("reviewerName", "Alice"),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[reqwest::header::LOCATION], "/Home/Details/1");

    let reviews = app.store.reviews().get_reviews_by_restaurant(1).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 9);
    assert_eq!(reviews[0].body.as_deref(), Some("Great noodles"));
    assert_eq!(reviews[0].reviewer_name, "Alice");
}

#[tokio::test]
async fn empty_body_is_stored_as_absent() {
    let app = TestApp::spawn().await;
    let token = issued_token(&app, 1).await;

    let resp = post_review(
        &app,
        1,
        Some(&token),
        &[
            ("__RequestVerificationToken", token.as_str()),
            ("rating", "6"),
            ("body", ""),
            ("restaurantId", "1"),
            ("reviewerName", "Carl"),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let reviews = app.store.reviews().get_all().await.unwrap();
    assert_eq!(reviews[0].body, None);
}

#[tokio::test]
async fn invalid_review_re_renders_form_with_input() {
    let app = TestApp::spawn().await;
    let token = issued_token(&app, 1).await;

    let resp = post_review(
        &app,
        1,
        Some(&token),
        &[
            ("__RequestVerificationToken", token.as_str()),
            ("rating", "11"),
            ("body", "Too salty"),
            ("restaurantId", "1"),
            ("reviewerName", "Bob"),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = resp.text().await.unwrap();
    assert!(page.contains("Rating must be between 1 and 10"));
    assert!(page.contains("value=\"11\""));
    assert!(page.contains("value=\"Bob\""));
    assert!(page.contains("Too salty"));

    assert!(app.store.reviews().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn mismatched_restaurant_id_re_renders_form() {
    let app = TestApp::spawn().await;
    let token = issued_token(&app, 1).await;

    let resp = post_review(
        &app,
        2,
        Some(&token),
        &[
            ("__RequestVerificationToken", token.as_str()),
            ("rating", "8"),
            ("restaurantId", "1"),
            ("reviewerName", "Dora"),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = resp.text().await.unwrap();
    assert!(page.contains("don&#39;t match"));
    assert!(app.store.reviews().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_or_wrong_anti_forgery_token_is_rejected() {
    let app = TestApp::spawn().await;
    let token = issued_token(&app, 1).await;
    let fields = [
        ("rating", "8"),
        ("restaurantId", "1"),
        ("reviewerName", "Eve"),
    ];

    // No cookie at all.
    let mut with_token = vec![("__RequestVerificationToken", token.as_str())];
    with_token.extend_from_slice(&fields);
    let resp = post_review(&app, 1, None, &with_token).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Cookie present, form field missing.
    let resp = post_review(&app, 1, Some(&token), &fields).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Cookie and field disagree.
    let mut forged = vec![("__RequestVerificationToken", "forged")];
    forged.extend_from_slice(&fields);
    let resp = post_review(&app, 1, Some(&token), &forged).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(app.store.reviews().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn privacy_page_renders() {
    let app = TestApp::spawn().await;
    let resp = app.client.get(app.url("/Home/Privacy")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Privacy Policy"));
}

#[tokio::test]
async fn health_reports_memory_store() {
    let app = TestApp::spawn().await;
    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["store"], "memory");
}
