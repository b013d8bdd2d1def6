use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::ServerState;
use service::auth::JwtVerifier;
use service::seed::SAMPLE_LICENSE_KEY;
use service::AppServices;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::new(
        AppServices::seeded(),
        Arc::new(JwtVerifier::new("test-secret", Some("seller-mock"))),
    );
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn project_token(project: &str, exp_offset: i64) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Claims { sub: String, exp: i64, iss: String, aud: String }
    let claims = Claims {
        sub: "seller-1".into(),
        exp: chrono::Utc::now().timestamp() + exp_offset,
        iss: format!("https://securetoken.google.com/{project}"),
        aud: project.into(),
    };
    Ok(encode(&Header::default(), &claims, &EncodingKey::from_secret("test-secret".as_bytes()))?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_license_verification_counts_uses() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/licenses/verify", app.base_url);
    let payload = json!({"productId": "1", "licenseKey": SAMPLE_LICENSE_KEY});

    let first = c.post(&url).json(&payload).send().await?.json::<serde_json::Value>().await?;
    let second = c.post(&url).json(&payload).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(first["uses"], 1);
    assert_eq!(second["uses"], 2);
    assert_eq!(second["purchase"]["licenseKey"], SAMPLE_LICENSE_KEY);

    let res = c.post(&url)
        .json(&json!({"productId": "2", "licenseKey": SAMPLE_LICENSE_KEY}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_user_requires_project_token() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/user", app.base_url);

    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c.get(&url).bearer_auth(project_token("other-project", 3600)?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c.get(&url).bearer_auth(project_token("seller-mock", -3600)?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c.get(&url).bearer_auth(project_token("seller-mock", 3600)?).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "johnsmith@gumroad.com");
    Ok(())
}
