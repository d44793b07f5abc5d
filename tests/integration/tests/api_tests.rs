//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Create an event and a scanner assigned to it, then log the scanner in.
/// Returns (event, scanner request, access token).
async fn setup_authorized_scanner(
    server: &TestServer,
) -> (EventResponse, CreateScannerRequest, String) {
    let event_req = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &event_req).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let scanner_req = CreateScannerRequest::unique(vec![event.slug.clone()]);
    let response = server.post("/api/v1/scanners", &scanner_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_scanner(&scanner_req, &event.slug);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (event, scanner_req, auth.access_token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateEventRequest::unique();

    let response = server.post("/api/v1/events", &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(event.slug, request.slug);
    assert_eq!(event.total_scanned, 0);
    assert!(event.is_active);
}

#[tokio::test]
async fn test_create_event_duplicate_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateEventRequest::unique();

    server.post("/api/v1/events", &request).await.unwrap();

    let response = server.post("/api/v1/events", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "SLUG_EXISTS");
}

#[tokio::test]
async fn test_create_event_rejects_broken_pattern() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateEventRequest::unique();
    request.attendant_code_pattern = Some("^FS25-(1[0-9]{3)$".to_string());

    let response = server.post("/api/v1/events", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATTERN");

    // No event write happened
    let response = server
        .get(&format!("/api/v1/events/{}", request.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_event_with_derived_pattern() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateEventRequest::unique_with_count(1000);

    let response = server.post("/api/v1/events", &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(event.attendant_code_pattern, "^FS25-(1[0-9]{3})$");
}

#[tokio::test]
async fn test_update_event_rejects_broken_pattern() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch(
            &format!("/api/v1/events/{}", event.slug),
            &serde_json::json!({ "driver_code_pattern": "(" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATTERN");
}

#[tokio::test]
async fn test_delete_event_soft_then_hard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Soft delete deactivates
    let response = server
        .delete(&format!("/api/v1/events/{}", event.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{}", event.slug))
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!event.is_active);

    // Hard delete removes the row
    let response = server
        .delete(&format!("/api/v1/events/{}?permanent=true", event.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{}", event.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Code-Space Tests
// ============================================================================

#[tokio::test]
async fn test_generate_code_space() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = GenerateCodeSpaceRequest {
        prefix: "FS25".to_string(),
        count: 2501,
    };

    let response = server
        .post("/api/v1/code-spaces/generate", &request)
        .await
        .unwrap();
    let space: CodeSpaceResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(space.first_code, "FS25-1000");
    assert_eq!(space.last_code, "FS25-3500");
    assert_eq!(
        space.pattern,
        "^FS25-(1[0-9]{3}|2[0-9]{3}|30[0-9]{2}|31[0-9]{2}|32[0-9]{2}|33[0-9]{2}|34[0-9]{2}|350[0-0])$"
    );
}

#[tokio::test]
async fn test_validate_pattern() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/code-spaces/validate",
            &serde_json::json!({ "pattern": "^FS25-(1[0-9]{3})$" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(
            "/api/v1/code-spaces/validate",
            &serde_json::json!({ "pattern": "(" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATTERN");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_wrong_pin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, scanner_req, _token) = setup_authorized_scanner(&server).await;

    let mut login_req = LoginRequest::from_scanner(&scanner_req, &event.slug);
    login_req.pin = "000000".to_string();

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_event, scanner_req, _token) = setup_authorized_scanner(&server).await;

    let login_req = LoginRequest::from_scanner(&scanner_req, "no-such-event");
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_login_inactive_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, scanner_req, _token) = setup_authorized_scanner(&server).await;

    // Deactivate the event, then try to log in against it
    let response = server
        .delete(&format!("/api/v1/events/{}", event.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let login_req = LoginRequest::from_scanner(&scanner_req, &event.slug);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "EVENT_INACTIVE");
}

#[tokio::test]
async fn test_login_unassigned_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_event, scanner_req, _token) = setup_authorized_scanner(&server).await;

    // A second event the scanner is not assigned to
    let other_event = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &other_event).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_scanner(&scanner_req, &other_event.slug);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_AUTHORIZED_FOR_EVENT");
}

#[tokio::test]
async fn test_assign_and_unassign_scanner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A scanner created with no assignments cannot log in anywhere
    let event_req = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &event_req).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let scanner_req = CreateScannerRequest::unique(vec![]);
    let response = server.post("/api/v1/scanners", &scanner_req).await.unwrap();
    let created: CreatedScannerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_scanner(&scanner_req, &event.slug);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Assignment opens the gate
    let assignments_path = format!("/api/v1/scanners/{}/assignments", created.id);
    let body = serde_json::json!({ "event_slugs": [event.slug] });
    let response = server.post(&assignments_path, &body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Unassignment closes it again
    let response = server.delete_json(&assignments_path, &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_generated_pin_is_returned_once_and_works() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let event_req = CreateEventRequest::unique();
    let response = server.post("/api/v1/events", &event_req).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut scanner_req = CreateScannerRequest::unique(vec![event.slug.clone()]);
    scanner_req.pin = None;

    let response = server.post("/api/v1/scanners", &scanner_req).await.unwrap();
    let created: CreatedScannerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let pin = created.pin.expect("generated PIN must be returned");

    let login_req = LoginRequest {
        phone_number: scanner_req.phone_number.clone(),
        email: None,
        pin,
        event_slug: event.slug.clone(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Redemption Tests
// ============================================================================

#[tokio::test]
async fn test_redemption_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, _scanner_req, token) = setup_authorized_scanner(&server).await;
    let redemptions_path = format!("/api/v1/events/{}/redemptions", event.slug);

    // First scan is accepted
    let request = RedeemRequest {
        code: "FS25-1500".to_string(),
    };
    let response = server
        .post_auth(&redemptions_path, &token, &request)
        .await
        .unwrap();
    let receipt: RedemptionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(receipt.event_name, event.name);
    assert_eq!(receipt.total_scanned, 1);

    // Second scan of the same code is a conflict, not a fault
    let response = server
        .post_auth(&redemptions_path, &token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "ALREADY_REDEEMED");

    // A code outside the code-space never touches the ledger
    let request = RedeemRequest {
        code: "FS25-9999".to_string(),
    };
    let response = server
        .post_auth(&redemptions_path, &token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CODE_FORMAT");

    // The stored total moved exactly once
    let response = server
        .get(&format!("/api/v1/events/{}/stats", event.slug))
        .await
        .unwrap();
    let stats: EventStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_scanned, 1);
    assert_eq!(stats.recent_scans.len(), 1);
    assert_eq!(stats.recent_scans[0].code, "FS25-1500");
}

#[tokio::test]
async fn test_redemption_requires_assignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, _scanner_req, _token) = setup_authorized_scanner(&server).await;

    // A scanner authorized for a different event
    let (_other_event, _other_scanner, other_token) = setup_authorized_scanner(&server).await;

    let request = RedeemRequest {
        code: "FS25-1500".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/events/{}/redemptions", event.slug),
            &other_token,
            &request,
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_AUTHORIZED_FOR_EVENT");
}

#[tokio::test]
async fn test_redemption_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, _scanner_req, _token) = setup_authorized_scanner(&server).await;

    let request = RedeemRequest {
        code: "FS25-1500".to_string(),
    };
    let response = server
        .post(
            &format!("/api/v1/events/{}/redemptions", event.slug),
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_redemption_cross_event_independence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event_a, _scanner_a, token_a) = setup_authorized_scanner(&server).await;
    let (event_b, _scanner_b, token_b) = setup_authorized_scanner(&server).await;

    // The same literal code succeeds independently in both events
    let request = RedeemRequest {
        code: "FS25-1400".to_string(),
    };

    let response = server
        .post_auth(
            &format!("/api/v1/events/{}/redemptions", event_a.slug),
            &token_a,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/events/{}/redemptions", event_b.slug),
            &token_b,
            &request,
        )
        .await
        .unwrap();
    let receipt: RedemptionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(receipt.total_scanned, 1);
}

#[tokio::test]
async fn test_redemption_concurrent_scans_accept_exactly_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, _scanner_req, token) = setup_authorized_scanner(&server).await;
    let redemptions_path = format!("/api/v1/events/{}/redemptions", event.slug);

    let mut handles = Vec::new();
    for _ in 0..6 {
        let client = server.client.clone();
        let url = format!("{}{}", server.base_url(), redemptions_path);
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(&url)
                .header("Authorization", format!("Bearer {}", token))
                .json(&serde_json::json!({ "code": "FS25-1600" }))
                .send()
                .await
                .map(|r| r.status())
        }));
    }

    let mut accepted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            StatusCode::CREATED => accepted += 1,
            StatusCode::CONFLICT => conflicts += 1,
            status => panic!("unexpected status: {status}"),
        }
    }

    assert_eq!(accepted, 1, "exactly one concurrent scan may win");
    assert_eq!(conflicts, 5);

    let response = server
        .get(&format!("/api/v1/events/{}/stats", event.slug))
        .await
        .unwrap();
    let stats: EventStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_scanned, 1);
}

#[tokio::test]
async fn test_delete_event_blocked_by_redemptions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (event, _scanner_req, token) = setup_authorized_scanner(&server).await;

    let request = RedeemRequest {
        code: "FS25-1800".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/events/{}/redemptions", event.slug),
            &token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/events/{}?permanent=true", event.slug))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "EVENT_HAS_REDEMPTIONS");
}
