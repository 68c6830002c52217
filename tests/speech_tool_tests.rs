use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use resemble_mcp::config::ResembleConfig;
use resemble_mcp::error::ServerError;
use resemble_mcp::resemble::ResembleClient;
use resemble_mcp::tools::speech::{GenerateTtsTool, ListVoicesTool, TTS_FAILURE_MESSAGE};
use resemble_mcp::tools::{Tool, ToolArguments};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<ResembleClient> {
    let config = ResembleConfig::new("test-key")
        .with_synthesize_url(format!("{}/synthesize", server.uri()))
        .with_voices_url(format!("{}/api/v2/voices", server.uri()));
    Arc::new(ResembleClient::new(config))
}

fn dir_is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[tokio::test]
async fn generate_tts_writes_decoded_audio_and_names_the_file() {
    let server = MockServer::start().await;
    let audio = b"fake-mp3-bytes";

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_content": STANDARD.encode(audio),
            "duration": 0.4,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());

    let result = tool
        .execute(&ToolArguments::new(json!({"text": "hello", "voice_uuid": "v1"})))
        .await
        .expect("tool should succeed");

    let message = result.as_str().expect("string result");
    assert!(message.contains("output.mp3"), "{message}");
    assert_eq!(std::fs::read(dir.path().join("output.mp3")).unwrap(), audio);
}

#[tokio::test]
async fn generate_tts_missing_audio_field_returns_failure_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());

    let result = tool
        .execute(&ToolArguments::new(json!({"text": "hello"})))
        .await
        .unwrap();

    assert_eq!(result, json!(TTS_FAILURE_MESSAGE));
    assert!(dir_is_empty(&dir), "no file may be written on failure");
}

#[tokio::test]
async fn generate_tts_server_error_is_indistinguishable_from_missing_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());

    let result = tool
        .execute(&ToolArguments::new(json!({"text": "hello"})))
        .await
        .unwrap();

    assert_eq!(result, json!(TTS_FAILURE_MESSAGE));
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn generate_tts_timeout_returns_failure_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"audio_content": "aGk="}))
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let client = ResembleClient::new(
        ResembleConfig::new("test-key")
            .with_synthesize_url(format!("{}/synthesize", server.uri())),
    )
    .with_timeout(Duration::from_millis(50));
    let tool = GenerateTtsTool::new(Arc::new(client)).with_output_dir(dir.path());

    let result = tool
        .execute(&ToolArguments::new(json!({"text": "hello"})))
        .await
        .unwrap();

    assert_eq!(result, json!(TTS_FAILURE_MESSAGE));
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn generate_tts_honors_output_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(body_partial_json(json!({"output_format": "wav"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_content": STANDARD.encode(b"RIFFwav"),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());

    let result = tool
        .execute(&ToolArguments::new(
            json!({"text": "hello", "output_format": "wav"}),
        ))
        .await
        .unwrap();

    assert!(result.as_str().unwrap().contains("output.wav"));
    assert!(dir.path().join("output.wav").exists());
}

#[tokio::test]
async fn generate_tts_malformed_base64_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_content": "%%%not-base64%%%",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());

    let err = tool
        .execute(&ToolArguments::new(json!({"text": "hello"})))
        .await
        .expect_err("malformed base64 must not be collapsed into the failure string");

    assert!(matches!(err, ServerError::Decode(_)));
    assert!(dir_is_empty(&dir));
}

#[tokio::test]
async fn generate_tts_requires_text() {
    let server = MockServer::start().await;
    let tool = GenerateTtsTool::new(client_for(&server));

    let err = tool
        .execute(&ToolArguments::new(json!({})))
        .await
        .expect_err("missing text is a caller error");

    assert!(matches!(err, ServerError::InvalidArgument(_)));
}

#[tokio::test]
async fn generate_tts_reuses_one_default_voice_across_calls() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let tool = GenerateTtsTool::new(client_for(&server)).with_output_dir(dir.path());
    let default_voice = tool.default_voice().to_string();

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(body_partial_json(json!({"voice_uuid": default_voice})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .expect(2)
        .mount(&server)
        .await;

    for _ in 0..2 {
        tool.execute(&ToolArguments::new(json!({"text": "hello"})))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn list_voices_defaults_pagination_and_passes_body_through() {
    let server = MockServer::start().await;
    let page_body = json!({
        "items": [{"uuid": "a1", "name": "Ada"}],
        "page": 1,
        "num_pages": 3,
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = ListVoicesTool::new(client_for(&server));
    let result = tool.execute(&ToolArguments::new(json!({}))).await.unwrap();

    assert_eq!(result, page_body);
}

#[tokio::test]
async fn list_voices_failure_is_a_single_error_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let tool = ListVoicesTool::new(client_for(&server));
    let result = tool.execute(&ToolArguments::new(json!({}))).await.unwrap();

    let object = result.as_object().expect("failure result is an object");
    assert_eq!(object.len(), 1);
    let reason = object["error"].as_str().expect("error is a string");
    assert!(!reason.is_empty());
}
