use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseResponse {
    id: u64,
    user_id: u64,
    name: String,
    calories: u32,
    duration: u32,
    duration_unit: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    total_exercises: usize,
    weekly_exercises: usize,
    total_calories: u64,
    active_hours: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// A freshly spawned server binary with an empty store, stopped on drop.
struct TestServer {
    base_url: String,
    child: Child,
}

impl TestServer {
    async fn start() -> Self {
        let port = free_port();
        let child = Command::new(env!("CARGO_BIN_EXE_fitness_tracker"))
            .env("PORT", port.to_string())
            .env("APP_SEED_DEMO", "false")
            .env_remove("APP_SEED_PATH")
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .expect("failed to spawn fitness_tracker");

        let server = Self {
            base_url: format!("http://127.0.0.1:{port}"),
            child,
        };
        server.wait_ready().await;
        server
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn wait_ready(&self) {
        let client = Client::new();
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            let ready = client
                .get(self.url("/api/exercises"))
                .send()
                .await
                .is_ok_and(|resp| resp.status().is_success());
            if ready {
                return;
            }
            sleep(Duration::from_millis(50)).await;
        }
        panic!("fitness_tracker did not start on {}", self.base_url);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("no free local port")
}

async fn stats(client: &Client, server: &TestServer) -> StatsResponse {
    client
        .get(server.url("/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_updates_stats() {
    let server = TestServer::start().await;
    let client = Client::new();

    let before = stats(&client, &server).await;

    let response = client
        .post(server.url("/api/exercises"))
        .json(&serde_json::json!({
            "name": "Evening Ride",
            "category": "cardio",
            "duration": 2,
            "durationUnit": "hr",
            "calories": 600,
            "date": chrono::Utc::now().to_rfc3339(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ExerciseResponse = response.json().await.unwrap();
    assert_eq!(created.user_id, 1);
    assert_eq!(created.name, "Evening Ride");
    assert_eq!(created.duration, 2);
    assert_eq!(created.duration_unit, "hr");

    let after = stats(&client, &server).await;
    assert_eq!(after.total_exercises, before.total_exercises + 1);
    assert_eq!(after.weekly_exercises, before.weekly_exercises + 1);
    assert_eq!(after.total_calories, before.total_calories + 600);
    assert!(after.active_hours >= before.active_hours + 2.0 - 0.05);
}

#[tokio::test]
async fn http_patch_and_delete_lifecycle() {
    let server = TestServer::start().await;
    let client = Client::new();

    let created: ExerciseResponse = client
        .post(server.url("/api/exercises"))
        .json(&serde_json::json!({
            "name": "Yoga",
            "category": "flexibility",
            "duration": 45,
            "durationUnit": "min",
            "date": "2026-01-05",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.calories, 0);

    let url = server.url(&format!("/api/exercises/{}", created.id));
    let patched: ExerciseResponse = client
        .patch(&url)
        .json(&serde_json::json!({ "calories": 150 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(patched.id, created.id);
    assert_eq!(patched.calories, 150);
    assert_eq!(patched.name, "Yoga");

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.message, "Exercise not found");

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
