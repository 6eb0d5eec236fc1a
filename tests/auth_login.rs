//! Integration tests for the mock login endpoint.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .json(&json!({"email": "carlos@ferreiracosta.com", "senha": "minha-senha"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login realizado com sucesso");

    let data = &body["data"];
    assert_eq!(data["token"], "demo_jwt_token_12345");
    assert_eq!(data["expiresIn"], "24h");
    assert_eq!(data["usuario"]["id"], 1);
    assert_eq!(data["usuario"]["nome"], "Demo User");
    assert_eq!(data["usuario"]["email"], "carlos@ferreiracosta.com");
    assert_eq!(data["usuario"]["role"], "Admin");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_accepts_any_non_empty_credentials() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .json(&json!({"email": "x", "senha": "1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["usuario"]["email"], "x");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_with_empty_credentials_is_400() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .json(&json!({"email": "", "senha": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email e senha são obrigatórios");
    assert!(body.get("data").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_with_missing_fields_is_400() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .json(&json!({"email": "carlos@ferreiracosta.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Email e senha são obrigatórios");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_with_empty_body_is_400() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email e senha são obrigatórios");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_with_malformed_json_is_400() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .header("content-type", "application/json")
        .body("isto não é json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Corpo da requisição inválido");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_without_content_type_is_400() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/api/auth/login", addr))
        .body(r#"{"email": "a@b.com", "senha": "s"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Corpo da requisição inválido");

    shutdown.trigger();
}

#[tokio::test]
async fn test_login_rejects_get() {
    let (addr, shutdown) = common::spawn_demo_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/api/auth/login", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);

    shutdown.trigger();
}
