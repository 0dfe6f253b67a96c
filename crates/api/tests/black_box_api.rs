use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod over a fresh cookbook, bound to an ephemeral port.
        let app = cookbook_api::app::build_default_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn add(&self, body: serde_json::Value) {
        let res = self.post("/entry", body.clone()).await;
        if res.status() != StatusCode::OK {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            panic!("expected 200 OK admitting {body}, got {status} body={text}");
        }
    }

    async fn summary(&self, name: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/summary", self.base_url))
            .query(&[("name", name)])
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn error_code(res: reqwest::Response) -> String {
    let body: serde_json::Value = res.json().await.unwrap();
    body["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    assert_eq!(srv.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn parse_normalizes_names() {
    let srv = TestServer::spawn().await;

    let res = srv.post("/parse", json!({ "input": "riz-kHaLiFa" })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "msg": "Riz Khalifa" }));

    let res = srv.post("/parse", json!({ "input": "Fried Rice" })).await;
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "Fried Rice");
}

#[tokio::test]
async fn parse_rejects_unrecoverable_input() {
    let srv = TestServer::spawn().await;

    for input in ["", "---", "123"] {
        let res = srv.post("/parse", json!({ "input": input })).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "input {input:?}");
        assert_eq!(error_code(res).await, "malformed_name");
    }
}

#[tokio::test]
async fn entry_admission_rules() {
    let srv = TestServer::spawn().await;

    srv.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 0 })).await;

    let cases = [
        (
            json!({ "type": "recipe", "name": "Egg", "requiredItems": [] }),
            "duplicate_entry_name",
        ),
        (
            json!({ "type": "ingredient", "name": "Egg", "cookTime": 3 }),
            "duplicate_entry_name",
        ),
        (
            json!({ "type": "pasta", "name": "Spaghetti", "cookTime": 3 }),
            "invalid_entry_type",
        ),
        (
            json!({ "name": "Spaghetti", "cookTime": 3 }),
            "invalid_entry_type",
        ),
        (
            json!({ "type": "ingredient", "name": "Beef", "cookTime": -1 }),
            "negative_cook_time",
        ),
        (
            json!({ "type": "ingredient", "name": "Beef" }),
            "missing_field",
        ),
        (
            json!({
                "type": "recipe",
                "name": "Omelette",
                "requiredItems": [
                    { "name": "Egg", "quantity": 1 },
                    { "name": "Egg", "quantity": 2 },
                ],
            }),
            "duplicate_required_item",
        ),
    ];

    for (body, expected) in cases {
        let res = srv.post("/entry", body.clone()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {body}");
        assert_eq!(error_code(res).await, expected, "payload {body}");
    }

    // Rejected payloads left nothing behind.
    assert_eq!(srv.get("/entry/Beef").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.get("/entry/Omelette").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stored_entries_can_be_read_back() {
    let srv = TestServer::spawn().await;

    let recipe = json!({
        "type": "recipe",
        "name": "Omelette",
        "requiredItems": [{ "name": "Egg", "quantity": 2 }],
    });
    srv.add(recipe.clone()).await;

    let res = srv.get("/entry/Omelette").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, recipe);
}

#[tokio::test]
async fn summary_of_single_level_recipe() {
    let srv = TestServer::spawn().await;

    srv.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })).await;
    srv.add(json!({
        "type": "recipe",
        "name": "Omelette",
        "requiredItems": [{ "name": "Egg", "quantity": 2 }],
    }))
    .await;

    let res = srv.summary("Omelette").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Omelette",
            "cookTime": 10,
            "ingredients": [{ "name": "Egg", "quantity": 2 }],
        })
    );
}

#[tokio::test]
async fn summary_merges_shared_ingredients_across_sub_recipes() {
    let srv = TestServer::spawn().await;

    srv.add(json!({
        "type": "recipe",
        "name": "Skibidi Spaghetti",
        "requiredItems": [
            { "name": "Meatball", "quantity": 3 },
            { "name": "Pasta", "quantity": 1 },
            { "name": "Tomato", "quantity": 2 },
        ],
    }))
    .await;
    srv.add(json!({
        "type": "recipe",
        "name": "Meatball",
        "requiredItems": [
            { "name": "Beef", "quantity": 2 },
            { "name": "Egg", "quantity": 1 },
        ],
    }))
    .await;
    srv.add(json!({
        "type": "recipe",
        "name": "Pasta",
        "requiredItems": [
            { "name": "Flour", "quantity": 3 },
            { "name": "Egg", "quantity": 1 },
        ],
    }))
    .await;
    srv.add(json!({ "type": "ingredient", "name": "Beef", "cookTime": 5 })).await;
    srv.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 3 })).await;
    srv.add(json!({ "type": "ingredient", "name": "Flour", "cookTime": 0 })).await;
    srv.add(json!({ "type": "ingredient", "name": "Tomato", "cookTime": 2 })).await;

    let res = srv.summary("Skibidi Spaghetti").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Skibidi Spaghetti",
            "cookTime": 46,
            "ingredients": [
                { "name": "Beef", "quantity": 6 },
                { "name": "Egg", "quantity": 4 },
                { "name": "Flour", "quantity": 3 },
                { "name": "Tomato", "quantity": 2 },
            ],
        })
    );
}

#[tokio::test]
async fn summary_failures_are_client_errors() {
    let srv = TestServer::spawn().await;

    srv.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })).await;
    srv.add(json!({
        "type": "recipe",
        "name": "Cake",
        "requiredItems": [
            { "name": "Egg", "quantity": 2 },
            { "name": "Flour", "quantity": 1 },
        ],
    }))
    .await;
    srv.add(json!({
        "type": "recipe",
        "name": "Sourdough",
        "requiredItems": [{ "name": "Starter", "quantity": 1 }],
    }))
    .await;
    srv.add(json!({
        "type": "recipe",
        "name": "Starter",
        "requiredItems": [{ "name": "Sourdough", "quantity": 1 }],
    }))
    .await;

    for (name, expected) in [
        ("Cake", "recipe_not_found"),
        ("Egg", "recipe_not_found"),
        ("Soup", "recipe_not_found"),
        ("Sourdough", "cyclic_reference"),
    ] {
        let res = srv.summary(name).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "summary of {name}");
        assert_eq!(error_code(res).await, expected, "summary of {name}");
    }

    // No name at all reads as an unknown recipe.
    let res = srv.get("/summary").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, "recipe_not_found");
}

#[tokio::test]
async fn malformed_bodies_use_the_error_envelope() {
    let srv = TestServer::spawn().await;

    for (path, body) in [
        ("/entry", json!({ "type": "ingredient", "cookTime": 1 })),
        ("/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": "five" })),
        ("/parse", json!({})),
    ] {
        let res = srv.post(path, body.clone()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path} {body}");
        let envelope: serde_json::Value = res.json().await.unwrap();
        assert_eq!(envelope["error"], "invalid_body", "{path} {body}");
        assert!(envelope["message"].is_string(), "{path} {body}");
    }

    let res = srv
        .client
        .post(format!("{}/entry", srv.base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, "invalid_body");

    let res = srv
        .client
        .post(format!("{}/parse", srv.base_url))
        .body(r#"{"input":"fried rice"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, "invalid_body");

    // Nothing was admitted along the way.
    let listing: serde_json::Value = srv.get("/entry").await.json().await.unwrap();
    assert_eq!(listing, json!({ "items": [] }));
}

#[tokio::test]
async fn entries_are_listed_in_admission_order() {
    let srv = TestServer::spawn().await;

    let omelette = json!({
        "type": "recipe",
        "name": "Omelette",
        "requiredItems": [{ "name": "Egg", "quantity": 2 }],
    });
    let egg = json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 });
    srv.add(omelette.clone()).await;
    srv.add(egg.clone()).await;
    assert_eq!(
        srv.post("/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": 1 }))
            .await
            .status(),
        StatusCode::BAD_REQUEST
    );

    let res = srv.get("/entry").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "items": [omelette, egg] }));
}

#[tokio::test]
async fn each_app_has_its_own_cookbook() {
    let first = TestServer::spawn().await;
    let second = TestServer::spawn().await;

    first.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })).await;

    assert_eq!(first.get("/entry/Egg").await.status(), StatusCode::OK);
    assert_eq!(second.get("/entry/Egg").await.status(), StatusCode::NOT_FOUND);
    second.add(json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })).await;
}
