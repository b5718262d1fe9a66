use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use secretsmanager_sdk::{Auth, Client, ClientBuilder, UserSecret};
use serde_json::json;
use std::time::Duration;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a mock server with basic endpoints
async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;

    // Mock for secret reads
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/[^/]+$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "description": "benchmark secret",
                    "name": "bench-key",
                    "version": {
                        "created_at": "2024-01-01T00:00:00Z",
                        "value": "dmFsdWU=",
                        "version_id": 1
                    }
                }))
                .set_delay(Duration::from_millis(10)), // Simulate network latency
        )
        .mount(&server)
        .await;

    // Mock for secret creation
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1/[^/]+$"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(15)))
        .mount(&server)
        .await;

    // Mock for failing reads, exercising the classification path
    Mock::given(method("GET"))
        .and(path_regex(r"^/missing/v1/[^/]+$"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({
                    "status_text": "NOT_FOUND",
                    "error_text": "secret not found"
                }))
                .set_delay(Duration::from_millis(10)),
        )
        .mount(&server)
        .await;

    server
}

fn bench_client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .auth(Auth::token("bench-token").expect("valid token"))
        .secrets_api_url(server.uri())
        .build()
        .expect("Failed to build client")
}

fn bench_get_secret(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(setup_mock_server());
    let client = bench_client(&server);

    c.bench_function("get_secret", |b| {
        b.iter(|| {
            rt.block_on(async {
                let _ = client
                    .secrets()
                    .get(black_box("bench-key"))
                    .await
                    .expect("Failed to get secret");
            });
        });
    });
}

fn bench_create_secret(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(setup_mock_server());
    let client = bench_client(&server);

    c.bench_function("create_secret", |b| {
        b.iter(|| {
            rt.block_on(async {
                client
                    .secrets()
                    .create(black_box(UserSecret {
                        key: "bench-key".to_string(),
                        description: None,
                        value: "bench-value".to_string(),
                    }))
                    .await
                    .expect("Failed to create secret");
            });
        });
    });
}

fn bench_classified_error(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(setup_mock_server());

    let client = ClientBuilder::new()
        .auth(Auth::token("bench-token").expect("valid token"))
        .secrets_api_url(format!("{}/missing", server.uri()))
        .build()
        .expect("Failed to build client");

    c.bench_function("classified_error", |b| {
        b.iter(|| {
            rt.block_on(async {
                let err = client
                    .secrets()
                    .get(black_box("bench-key"))
                    .await
                    .expect_err("Expected a classified error");
                black_box(err.kind());
            });
        });
    });
}

fn bench_concurrent_requests(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(setup_mock_server());
    let client = bench_client(&server);

    let mut group = c.benchmark_group("concurrent_requests");

    for concurrency in [1, 5, 10, 20].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(concurrency),
            concurrency,
            |b, &concurrency| {
                b.iter(|| {
                    rt.block_on(async {
                        let mut tasks = Vec::new();

                        for _ in 0..concurrency {
                            let client = client.clone();
                            let task = tokio::spawn(async move {
                                client
                                    .secrets()
                                    .get("bench-key")
                                    .await
                                    .expect("Failed to get secret")
                            });
                            tasks.push(task);
                        }

                        // Wait for all tasks to complete
                        for task in tasks {
                            let _ = task.await.expect("Task panicked");
                        }
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_secret,
    bench_create_secret,
    bench_classified_error,
    bench_concurrent_requests
);
criterion_main!(benches);
