//! HTTP Contract Tests
//!
//! Drives every endpoint through the router over the bundled dataset:
//! - Success bodies carry `success: true` plus the endpoint's fields
//! - Failures carry the fixed `{success: false, message}` envelope
//! - Writes are visible to later reads

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

const PAGE_ONE: [i64; 10] = [2, 4, 5, 6, 9, 10, 11, 12, 13, 14];

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_categories_mapping() {
    let router = seeded_router();
    let (status, body) = get(&router, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "categories": {
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports"
            }
        })
    );
}

#[tokio::test]
async fn test_category_by_id_is_not_a_route() {
    let router = seeded_router();
    let (status, body) = get(&router, "/categories/1").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

// =============================================================================
// Paged listing
// =============================================================================

#[tokio::test]
async fn test_first_page() {
    let router = seeded_router();
    let (status, body) = get(&router, "/questions?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), PAGE_ONE.to_vec());
    assert_eq!(body["totalQuestions"], 19);
    assert_eq!(body["currentCategory"], "");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_missing_or_garbled_page_means_first() {
    let router = seeded_router();

    let (_, bare) = get(&router, "/questions").await;
    assert_eq!(ids(&bare), PAGE_ONE.to_vec());

    let (status, garbled) = get(&router, "/questions?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&garbled), PAGE_ONE.to_vec());
}

#[tokio::test]
async fn test_last_partial_page() {
    let router = seeded_router();
    let (status, body) = get(&router, "/questions?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![15, 16, 17, 18, 19, 20, 21, 22, 23]);
    assert_eq!(body["totalQuestions"], 19);
}

#[tokio::test]
async fn test_page_past_end_is_not_found() {
    let router = seeded_router();
    for page in ["3", "100", "0", "-1"] {
        let (status, body) = get(&router, &format!("/questions?page={}", page)).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
    }
}

#[tokio::test]
async fn test_custom_page_size() {
    let router = router_with(trivia::http_server::ServerConfig {
        questions_per_page: 5,
        ..Default::default()
    });

    let (_, body) = get(&router, "/questions?page=4").await;
    assert_eq!(ids(&body), vec![20, 21, 22, 23]);
    assert_eq!(body["totalQuestions"], 19);

    let (status, _) = get(&router, "/questions?page=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_permanently() {
    let router = seeded_router();

    let (status, body) = delete(&router, "/questions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Question successfully deleted"})
    );

    let (_, listing) = get(&router, "/questions").await;
    assert!(!ids(&listing).contains(&2));
    assert_eq!(listing["totalQuestions"], 18);

    let (status, body) = delete(&router, "/questions/2").await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");
}

#[tokio::test]
async fn test_delete_unknown_id_is_unprocessable() {
    let router = seeded_router();
    let (status, body) = delete(&router, "/questions/100").await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");

    let (_, listing) = get(&router, "/questions").await;
    assert_eq!(listing["totalQuestions"], 19);
}

#[tokio::test]
async fn test_delete_non_integer_id_is_not_found() {
    let router = seeded_router();
    for uri in ["/questions/abc", "/questions/%FF", "/questions/99999999999999999999"] {
        let (status, body) = delete(&router, uri).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_appends_with_fresh_id() {
    let router = seeded_router();

    let (status, body) = post(
        &router,
        "/questions",
        json!({
            "question": "Which planet has the most moons?",
            "answer": "Saturn",
            "difficulty": 3,
            "category": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Question successfully created"})
    );

    let (_, page) = get(&router, "/questions?page=2").await;
    assert_eq!(page["totalQuestions"], 20);
    let last = page["questions"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["id"], 24);
    assert_eq!(last["answer"], "Saturn");

    let (_, science) = get(&router, "/categories/1/questions").await;
    assert_eq!(ids(&science), vec![20, 21, 22, 24]);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let router = seeded_router();
    delete(&router, "/questions/23").await;

    let (status, _) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = get(&router, "/categories/4/questions").await;
    assert_eq!(ids(&history), vec![5, 9, 12, 24]);
}

#[tokio::test]
async fn test_create_with_null_field_is_unprocessable() {
    let router = seeded_router();
    let (status, body) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": null}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");

    let (_, listing) = get(&router, "/questions").await;
    assert_eq!(listing["totalQuestions"], 19);
}

#[tokio::test]
async fn test_create_with_absent_field_is_unprocessable() {
    let router = seeded_router();
    let (status, body) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "difficulty": 1, "category": 2}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");
}

#[tokio::test]
async fn test_create_accepts_numeric_strings() {
    let router = seeded_router();
    let (status, _) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "answer": "A", "difficulty": "2", "category": "3"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, geography) = get(&router, "/categories/3/questions").await;
    assert_eq!(ids(&geography), vec![13, 14, 15, 24]);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let router = seeded_router();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/questions")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"question\": "))
        .unwrap();

    let (status, body) = send_request(&router, request).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad request");
}

#[tokio::test]
async fn test_strict_policy_rejects_out_of_range_values() {
    let router = router_with(trivia::http_server::ServerConfig {
        validation: trivia::catalog::ValidationPolicy::strict(),
        ..Default::default()
    });

    let (status, body) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "answer": "A", "difficulty": 9, "category": 1}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity");

    let (status, _) = post(
        &router,
        "/questions",
        json!({"question": "Q?", "answer": "A", "difficulty": 2, "category": 99}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_matches_question_text() {
    let router = seeded_router();
    let (status, body) = post(&router, "/questions/search", json!({"searchTerm": "title"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5, 6]);
    assert_eq!(body["totalQuestions"], 2);
    assert!(body["currentCategory"].is_null());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let router = seeded_router();
    let (_, lower) = post(&router, "/questions/search", json!({"searchTerm": "world cup"})).await;
    let (_, upper) = post(&router, "/questions/search", json!({"searchTerm": "WORLD CUP"})).await;

    assert_eq!(ids(&lower), vec![10, 11]);
    assert_eq!(ids(&lower), ids(&upper));
}

#[tokio::test]
async fn test_search_ignores_answers() {
    let router = seeded_router();
    let (status, body) = post(
        &router,
        "/questions/search",
        json!({"searchTerm": "Scissorhands"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_search_without_term_is_bad_request() {
    let router = seeded_router();
    let (status, body) = post(&router, "/questions/search", json!({"term": "title"})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad request");
}

// =============================================================================
// By category
// =============================================================================

#[tokio::test]
async fn test_questions_by_category() {
    let router = seeded_router();
    let (status, body) = get(&router, "/categories/1/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![20, 21, 22]);
    assert_eq!(body["totalQuestions"], 3);
    assert_eq!(body["currentCategory"], "Science");
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let router = seeded_router();
    for uri in [
        "/categories/100/questions",
        "/categories/abc/questions",
        "/categories/%FF/questions",
    ] {
        let (status, body) = get(&router, uri).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
    }
}

#[tokio::test]
async fn test_emptied_category_is_not_found() {
    let router = seeded_router();
    for id in [10, 11] {
        delete(&router, &format!("/questions/{}", id)).await;
    }
    let (status, _) = get(&router, "/categories/6/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The category itself survives
    let (_, categories) = get(&router, "/categories").await;
    assert_eq!(categories["categories"]["6"], "Sports");
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_unknown_route_gets_envelope() {
    let router = seeded_router();
    let (status, body) = get(&router, "/nope").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not found");
}
