//! Integration tests for generation-client.
//!
//! Each test stands up a stub backend on a random local port.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::time::Duration;

use chat_core::{ChatSession, GenerationError, Generator, Role, FALLBACK_REPLY, VISUAL_ONLY_REPLY};
use generation_client::{ApiConfig, ApiError, GenerationClient};
use serde_json::{json, Value};

/// Serve `app` on 127.0.0.1 and return its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> GenerationClient {
    GenerationClient::new(ApiConfig::new(base_url)).unwrap()
}

/// A base URL nothing listens on.
async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn pythagoras_backend() -> Router {
    Router::new().route(
        "/generate",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["concept"], "What is the Pythagorean theorem?");
            Json(json!({
                "success": true,
                "video_url": "/media/x.mp4",
                "explanation": "In a right triangle a² + b² = c².",
                "code": "",
                "used_ai": true
            }))
        }),
    )
}

mod generate_tests {
    use super::*;

    #[tokio::test]
    async fn test_relative_video_url_is_absolutized() {
        let base = spawn_backend(pythagoras_backend()).await;
        let client = client_for(&base);

        let response = client
            .generate_video("What is the Pythagorean theorem?")
            .await
            .unwrap();

        assert!(response.success);
        assert!(response.used_ai);
        assert_eq!(response.video_url, Some(format!("{}/media/x.mp4", base)));
        assert_eq!(response.explanation, "In a right triangle a² + b² = c².");
    }

    #[tokio::test]
    async fn test_absolute_video_url_is_kept() {
        let app = Router::new().route(
            "/generate",
            post(|| async {
                Json(json!({
                    "success": true,
                    "video_url": "https://cdn.example.com/x.mp4",
                    "explanation": "ok",
                    "code": "",
                    "used_ai": false
                }))
            }),
        );
        let client = client_for(&spawn_backend(app).await);

        let response = client.generate_video("anything").await.unwrap();
        assert_eq!(
            response.video_url.as_deref(),
            Some("https://cdn.example.com/x.mp4")
        );
    }

    #[tokio::test]
    async fn test_error_body_becomes_reason() {
        let app = Router::new().route(
            "/generate",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "No concept provided" })),
                )
            }),
        );
        let client = client_for(&spawn_backend(app).await);

        let err = client.generate_video("x").await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "No concept provided");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_uses_default_reason() {
        let app = Router::new().route(
            "/generate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
        );
        let client = client_for(&spawn_backend(app).await);

        let err = client.generate_video("x").await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to generate video");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_explanation_only_response() {
        let app = Router::new().route(
            "/generate",
            post(|| async {
                Json(json!({
                    "success": true,
                    "explanation": "Entropy measures disorder.",
                    "video_url": null
                }))
            }),
        );
        let client = client_for(&spawn_backend(app).await);

        let response = client.generate_video("What is entropy?").await.unwrap();
        assert!(response.video_url.is_none());
        assert!(response.code.is_empty());
        assert!(!response.used_ai);

        let reply = client.generate("What is entropy?").await.unwrap();
        assert_eq!(reply.explanation, "Entropy measures disorder.");
        assert!(reply.media.is_empty());
    }

    #[tokio::test]
    async fn test_success_flag_false_still_answers() {
        let app = Router::new().route(
            "/generate",
            post(|| async {
                Json(json!({
                    "success": false,
                    "video_url": "/media/partial.mp4",
                    "explanation": "",
                    "code": "",
                    "used_ai": false
                }))
            }),
        );
        let base = spawn_backend(app).await;
        let client = client_for(&base);

        let reply = client.generate("x").await.unwrap();
        assert!(reply.explanation.is_empty());
        assert_eq!(
            reply.media.videos().collect::<Vec<_>>(),
            [format!("{}/media/partial.mp4", base).as_str()]
        );
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_invalid_response() {
        let app = Router::new().route("/generate", post(|| async { "rendering..." }));
        let client = client_for(&spawn_backend(app).await);

        let err = client.generate_video("x").await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));

        let err = client.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        let client = client_for(&unreachable_base().await);

        let err = client.generate("x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Unavailable(_)));
    }
}

mod chat_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_session_with_backend() {
        let base = spawn_backend(pythagoras_backend()).await;
        let client = client_for(&base);
        let mut session = ChatSession::new();

        session
            .submit(&client, "What is the Pythagorean theorem?")
            .await
            .unwrap();

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "What is the Pythagorean theorem?");

        let answer = &messages[2];
        assert_eq!(answer.role, Role::Assistant);
        assert_eq!(answer.content, "In a right triangle a² + b² = c².");
        assert_eq!(
            answer.media.videos().collect::<Vec<_>>(),
            [format!("{}/media/x.mp4", base).as_str()]
        );
    }

    #[tokio::test]
    async fn test_chat_session_with_explanation_only_backend() {
        let app = Router::new().route(
            "/generate",
            post(|| async {
                Json(json!({
                    "success": true,
                    "explanation": "Entropy measures disorder.",
                    "video_url": null
                }))
            }),
        );
        let client = client_for(&spawn_backend(app).await);
        let mut session = ChatSession::new();

        session.submit(&client, "What is entropy?").await.unwrap();

        let answer = &session.messages()[2];
        assert_eq!(answer.content, "Entropy measures disorder.");
        assert!(answer.media.is_empty());
    }

    #[tokio::test]
    async fn test_chat_session_with_video_only_backend() {
        let app = Router::new().route(
            "/generate",
            post(|| async { Json(json!({ "success": false, "video_url": "/media/y.mp4" })) }),
        );
        let client = client_for(&spawn_backend(app).await);
        let mut session = ChatSession::new();

        session.submit(&client, "Show me").await.unwrap();

        let answer = &session.messages()[2];
        assert_eq!(answer.content, VISUAL_ONLY_REPLY);
        assert_eq!(answer.media.len(), 1);
    }

    #[tokio::test]
    async fn test_chat_session_with_failing_backend() {
        let app = Router::new().route(
            "/generate",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(&spawn_backend(app).await);
        let mut session = ChatSession::new();

        session.submit(&client, "Why?").await.unwrap();

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, FALLBACK_REPLY);
        assert!(!session.is_awaiting());
    }
}

mod demo_tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_urls_are_absolutized() {
        let app = Router::new().route(
            "/demos",
            get(|| async {
                Json(json!({
                    "videos": [
                        {
                            "filename": "unit_circle.gif",
                            "title": "Trigonometry",
                            "description": "Sine and cosine on the unit circle.",
                            "url": "/static/gifs/unit_circle.gif"
                        },
                        {
                            "filename": "cube.gif",
                            "title": "3D Surface Plot",
                            "description": "Surface area of a cube.",
                            "url": "https://cdn.example.com/cube.gif"
                        }
                    ]
                }))
            }),
        );
        let base = spawn_backend(app).await;
        let client = client_for(&base);

        let demos = client.get_demos().await;
        assert_eq!(demos.len(), 2);
        assert_eq!(demos[0].url, format!("{}/static/gifs/unit_circle.gif", base));
        assert_eq!(demos[0].title, "Trigonometry");
        assert_eq!(demos[1].url, "https://cdn.example.com/cube.gif");
    }

    #[tokio::test]
    async fn test_unreachable_demos_is_empty() {
        let client = client_for(&unreachable_base().await);
        assert!(client.get_demos().await.is_empty());
    }

    #[tokio::test]
    async fn test_demo_error_status_is_empty() {
        let app = Router::new().route("/demos", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let client = client_for(&spawn_backend(app).await);
        assert!(client.get_demos().await.is_empty());
    }

    #[tokio::test]
    async fn test_silent_demos_backend_times_out_empty() {
        let app = Router::new().route(
            "/demos",
            get(|| async {
                std::future::pending::<()>().await;
                "never"
            }),
        );
        let base = spawn_backend(app).await;
        let client = GenerationClient::new(
            ApiConfig::new(base).with_demos_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let demos = tokio::time::timeout(Duration::from_secs(5), client.get_demos())
            .await
            .expect("demo listing should give up on its own");
        assert!(demos.is_empty());
    }

    #[tokio::test]
    async fn test_demo_bad_json_is_empty() {
        let app = Router::new().route("/demos", get(|| async { "not json" }));
        let client = client_for(&spawn_backend(app).await);
        assert!(client.get_demos().await.is_empty());
    }
}
