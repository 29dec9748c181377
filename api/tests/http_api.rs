use std::{io::Cursor, sync::Arc, time::Duration};

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use base64::{Engine as _, engine::general_purpose};
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use nutriflow_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs, OcrArgs, PipelineArgs, ServerArgs},
};
use serde_json::{Value, json};

fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        ocr: OcrArgs {
            vision_api_key: None,
            vision_endpoint: "http://127.0.0.1:9/v1/images:annotate".to_string(),
            simulated_delay_ms: 0,
        },
        pipeline: PipelineArgs {
            stage_timeout_secs: 5,
            max_image_dimension: 2048,
            max_image_bytes: 10 * 1024 * 1024,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

fn server() -> TestServer {
    let state = state(Arc::new(test_args())).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 255) as u8, (y % 255) as u8, 128])
    });
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png).unwrap();
    cursor.into_inner()
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_ocr_returns_text() {
    let response = server()
        .post("/ocr")
        .json(&json!({ "image": general_purpose::STANDARD.encode(png_bytes(8, 8)) }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["text"].as_str().unwrap().contains("SOHO WAREHOUSE"));
    assert!(body["processingTime"].is_u64());
}

#[tokio::test]
async fn test_ocr_requires_image() {
    let response = server().post("/ocr").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Image is required" }));
}

#[tokio::test]
async fn test_ocr_rejects_other_methods() {
    let response = server().get("/ocr").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({ "error": "Method not allowed" }));
    assert_eq!(response.header("allow"), "POST");
}

#[tokio::test]
async fn test_analyze_scores_items() {
    let response = server()
        .post("/analyze")
        .json(&json!({
            "menuItems": [
                { "id": "1", "name": "Grilled Salad with Lean Chicken", "price": "$14", "category": "MAINS" },
                { "id": "2", "name": "Satay", "description": "crushed peanuts, lime", "price": "$9", "category": "MAINS" }
            ],
            "userProfile": { "allergies": ["Peanuts"] }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let results = body["results"].as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["healthScore"], 65);
    assert_eq!(results[0]["healthCategory"], "Balanced");
    assert_eq!(results[0]["name"], "Grilled Salad with Lean Chicken");
    assert_eq!(
        results[1]["warnings"],
        json!(["Contains Peanuts, which you are allergic to"])
    );
    assert!(body["processingTime"].is_u64());
}

#[tokio::test]
async fn test_analyze_rejects_missing_or_empty_items() {
    let server = server();

    let empty = server.post("/analyze").json(&json!({ "menuItems": [] })).await;
    empty.assert_status(StatusCode::BAD_REQUEST);
    empty.assert_json(&json!({ "error": "menuItems must be a non-empty list" }));

    let missing = server.post("/analyze").json(&json!({ "userProfile": {} })).await;
    missing.assert_status(StatusCode::BAD_REQUEST);

    let not_a_list = server
        .post("/analyze")
        .json(&json!({ "menuItems": "Peroni - 9" }))
        .await;
    not_a_list.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = not_a_list.json();
    assert!(body["error"].is_string());

    let response = server.put("/analyze").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.header("allow"), "POST");
}

#[tokio::test]
async fn test_feedback_is_accepted() {
    let response = server()
        .post("/feedback")
        .json(&json!({
            "menuItemId": "3",
            "menuItemName": "Bitburger non-alcoholic pilsner",
            "accuracy": 4,
            "helpfulness": 5,
            "comments": "",
            "timestamp": "2026-10-16T12:00:00.000Z"
        }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert_eq!(body["accepted"], true);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_feedback_rejects_out_of_range_rating() {
    let server = server();

    let response = server
        .post("/feedback")
        .json(&json!({
            "menuItemId": "3",
            "menuItemName": "Peroni",
            "accuracy": 6,
            "helpfulness": 5
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "accuracy must be between 1 and 5" }));

    let quick = server
        .post("/feedback/quick")
        .json(&json!({ "rating": 5, "comment": "great" }))
        .await;
    quick.assert_status(StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_pipeline_run_completes() {
    let server = server();

    let idle: Value = server.get("/pipeline/runs/latest").await.json();
    assert_eq!(idle["state"], "Idle");
    assert_eq!(idle["runId"], 0);

    let form = MultipartForm::new()
        .add_part(
            "image",
            Part::bytes(png_bytes(64, 48))
                .file_name("menu.png")
                .mime_type("image/png"),
        )
        .add_text("profile", json!({ "allergies": ["None"] }).to_string());
    let submitted = server.post("/pipeline/runs").multipart(form).await;

    submitted.assert_status(StatusCode::ACCEPTED);
    let run_id = submitted.json::<Value>()["runId"].as_u64().unwrap();
    assert_eq!(run_id, 1);

    let mut latest = Value::Null;
    for _ in 0..200 {
        latest = server.get("/pipeline/runs/latest").await.json();
        if latest["state"] == "Done" || latest["state"] == "Failed" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(latest["runId"], run_id);
    assert_eq!(latest["state"], "Done");
    assert_eq!(latest["progress"]["percent"], 100);
    assert_eq!(latest["image"]["dimensions"], "64x48");
    assert_eq!(latest["results"].as_array().unwrap().len(), 5);
    assert!(latest.get("error").is_none());
}

#[tokio::test]
async fn test_pipeline_rejects_non_image() {
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"%PDF-1.7".to_vec())
            .file_name("menu.pdf")
            .mime_type("application/pdf"),
    );

    let response = server().post("/pipeline/runs").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid file type. Please provide an image file." }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let response = server().get("/menus").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Route not found" }));
}
