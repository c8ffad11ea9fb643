// tests/api_leads.rs
//
// End-to-end tests over the REST surface with Rocket's local client and a
// throwaway SQLite file per test.
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

use swift_leads::config::Config;
use swift_leads::content::ContentCatalog;
use swift_leads::db::create_db_pool;
use swift_leads::server::build_rocket;

async fn test_client() -> Client {
    let mut config = Config::default();
    let db_path = std::env::temp_dir().join(format!(
        "swift-leads-api-test-{}.db",
        uuid::Uuid::new_v4()
    ));
    config.database.path = db_path.to_string_lossy().into_owned();

    let pool = create_db_pool(&config.database.path)
        .await
        .expect("test db pool");
    let rocket = build_rocket(config, pool, ContentCatalog::load());
    Client::tracked(rocket).await.expect("rocket test client")
}

fn jane() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "trade": "Plumber",
        "areas": "Reading",
        "message": "Need a quote"
    })
}

async fn create_lead(client: &Client, body: &Value) -> Value {
    let response = client.post("/api/leads").json(body).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    response.into_json::<Value>().await.unwrap()
}

#[rocket::async_test]
async fn create_assigns_new_status_and_identity() {
    let client = test_client().await;

    let envelope = create_lead(&client, &jane()).await;
    assert_eq!(envelope["success"], true);

    let lead = &envelope["data"];
    assert_eq!(lead["name"], "Jane");
    assert_eq!(lead["email"], "jane@x.com");
    assert_eq!(lead["trade"], "Plumber");
    assert_eq!(lead["areas"], "Reading");
    assert_eq!(lead["message"], "Need a quote");
    assert_eq!(lead["status"], "new");
    assert!(!lead["id"].as_str().unwrap().is_empty());
    assert!(!lead["created_at"].as_str().unwrap().is_empty());
}

#[rocket::async_test]
async fn create_rejects_malformed_email() {
    let client = test_client().await;

    let envelope = create_lead(
        &client,
        &json!({
            "name": "Jane",
            "email": "not-an-email",
            "trade": "Plumber",
            "areas": "Reading",
            "message": "Need a quote"
        }),
    )
    .await;

    assert_eq!(envelope["success"], false);
    assert!(envelope["error"]
        .as_str()
        .unwrap()
        .contains("Invalid email address"));

    let listed = client
        .get("/api/leads")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
}

#[rocket::async_test]
async fn create_rejects_missing_fields() {
    let client = test_client().await;

    let response = client
        .post("/api/leads")
        .json(&json!({ "name": "Jane", "email": "jane@x.com" }))
        .dispatch()
        .await;
    assert!(response.status().code >= 400);
}

#[rocket::async_test]
async fn list_filters_by_status() {
    let client = test_client().await;

    let a = create_lead(&client, &jane()).await;
    let a_id = a["data"]["id"].as_str().unwrap().to_string();

    let mut omar = jane();
    omar["name"] = json!("Omar");
    omar["email"] = json!("omar@x.com");
    create_lead(&client, &omar).await;

    let response = client
        .patch(format!("/api/leads/{}/status?status=contacted", a_id))
        .dispatch()
        .await;
    let envelope = response.into_json::<Value>().await.unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["status"], "contacted");

    let contacted = client
        .get("/api/leads?status=contacted")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    let leads = contacted["data"].as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["id"], a_id.as_str());
    assert!(leads.iter().all(|l| l["status"] == "contacted"));

    let fresh = client
        .get("/api/leads?status=new")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(fresh["data"].as_array().unwrap().len(), 1);
    assert_eq!(fresh["data"][0]["name"], "Omar");
}

#[rocket::async_test]
async fn stats_reconcile_and_track_updates() {
    let client = test_client().await;

    let a = create_lead(&client, &jane()).await;
    let a_id = a["data"]["id"].as_str().unwrap().to_string();

    let mut omar = jane();
    omar["name"] = json!("Omar");
    omar["email"] = json!("omar@x.com");
    create_lead(&client, &omar).await;

    let mut priya = jane();
    priya["name"] = json!("Priya");
    priya["email"] = json!("priya@x.com");
    create_lead(&client, &priya).await;

    let stats = client
        .get("/api/leads/stats")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    let data = &stats["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["new"], 3);
    assert_eq!(
        data["total"].as_i64().unwrap(),
        data["new"].as_i64().unwrap()
            + data["contacted"].as_i64().unwrap()
            + data["converted"].as_i64().unwrap()
    );

    client
        .patch(format!("/api/leads/{}/status?status=converted", a_id))
        .dispatch()
        .await;

    let stats = client
        .get("/api/leads/stats")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    let data = &stats["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["new"], 2);
    assert_eq!(data["converted"], 1);
    assert_eq!(
        data["total"].as_i64().unwrap(),
        data["new"].as_i64().unwrap()
            + data["contacted"].as_i64().unwrap()
            + data["converted"].as_i64().unwrap()
    );
}

#[rocket::async_test]
async fn delete_removes_the_lead() {
    let client = test_client().await;

    let a = create_lead(&client, &jane()).await;
    let a_id = a["data"]["id"].as_str().unwrap().to_string();

    let mut omar = jane();
    omar["name"] = json!("Omar");
    omar["email"] = json!("omar@x.com");
    create_lead(&client, &omar).await;

    let envelope = client
        .delete(format!("/api/leads/{}", a_id))
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["message"], "Lead deleted");

    let listed = client
        .get("/api/leads")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    let leads = listed["data"].as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert!(leads.iter().all(|l| l["id"] != a_id.as_str()));

    let stats = client
        .get("/api/leads/stats")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(stats["data"]["total"], 1);
}

#[rocket::async_test]
async fn unknown_ids_yield_error_envelopes() {
    let client = test_client().await;

    let envelope = client
        .patch("/api/leads/does-not-exist/status?status=contacted")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Lead not found");

    let envelope = client
        .delete("/api/leads/does-not-exist")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Lead not found");
}

#[rocket::async_test]
async fn chat_widget_payload_is_stored_verbatim() {
    let client = test_client().await;

    let envelope = create_lead(
        &client,
        &json!({
            "name": "Jane",
            "email": "jane@x.com",
            "trade": "Quick Chat",
            "areas": "Not specified",
            "message": "How much for a rewire?"
        }),
    )
    .await;

    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["trade"], "Quick Chat");
    assert_eq!(envelope["data"]["areas"], "Not specified");
    assert_eq!(envelope["data"]["status"], "new");
}

#[rocket::async_test]
async fn content_lookup_and_fallbacks() {
    let client = test_client().await;

    let reading = client
        .get("/api/content/locations/reading")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(reading["data"]["name"], "Reading");

    // Unknown locations select the London page
    let fallback = client
        .get("/api/content/locations/atlantis")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(fallback["data"]["name"], "London");

    let industries = client
        .get("/api/content/industries")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(industries["data"].as_array().unwrap().len(), 6);

    let post = client
        .get("/api/content/posts/local-seo-checklist")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(post["success"], true);
    assert_eq!(post["data"]["category"], "Guides");

    let missing = client
        .get("/api/content/posts/definitely-not-a-post")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(missing["success"], false);
    assert_eq!(missing["error"], "Post not found");

    let pricing = client
        .get("/api/content/pricing")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(pricing["data"].as_array().unwrap().len(), 3);
}

#[rocket::async_test]
async fn status_checks_and_health() {
    let client = test_client().await;

    let health = client
        .get("/api/health")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "swift-leads-api");

    let created = client
        .post("/api/status")
        .json(&json!({ "client_name": "uptime-probe" }))
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["client_name"], "uptime-probe");

    let listed = client
        .get("/api/status")
        .dispatch()
        .await
        .into_json::<Value>()
        .await
        .unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}
