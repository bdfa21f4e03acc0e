//! Integration tests for the food catalog endpoints

mod common;

use axum::http::StatusCode;
use common::{parse, TestApp};
use rstest::rstest;

#[tokio::test]
async fn test_list_all_foods() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/food", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 18);
    assert_eq!(body["data"].as_array().unwrap().len(), 18);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["name"], "Grilled Chicken Salad");
    assert_eq!(body["data"][0]["goalType"], "Lose Weight");
    assert!(body["data"][0]["imageURL"].as_str().unwrap().starts_with("https://"));
}

#[rstest]
#[case("Lose%20Weight", "Lose Weight")]
#[case("Gain%20Muscle", "Gain Muscle")]
#[case("stay%20fit", "Stay Fit")]
#[tokio::test]
async fn test_filter_by_goal(#[case] query: &str, #[case] expected: &str) {
    let app = TestApp::new();

    let (status, body) = app.get(&format!("/api/food?goal={}", query), None).await;

    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|item| item["goalType"] == expected));
}

#[tokio::test]
async fn test_unknown_goal_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/food?goal=Bulk%20Up", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["success"], false);
}

#[tokio::test]
async fn test_goal_counts() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/food/goals", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    let goals = body["data"].as_array().unwrap();
    assert_eq!(goals.len(), 3);
    assert!(goals.iter().all(|g| g["count"] == 6));
}

#[tokio::test]
async fn test_get_food_by_id() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/food/18", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["data"]["name"], "Poke Bowl");
    assert_eq!(body["data"]["calories"], 420);
    assert_eq!(body["data"]["protein"], 28);
}

#[rstest]
#[case("/api/food/0")]
#[case("/api/food/19")]
#[case("/api/food/not-a-number")]
#[tokio::test]
async fn test_missing_food_returns_404(#[case] path: &str) {
    let app = TestApp::new();

    let (status, body) = app.get(path, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["success"], false);
}
