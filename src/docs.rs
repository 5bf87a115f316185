use crate::security::REALM;
use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

#[get("/v3/api-docs")]
pub async fn api_docs() -> impl Responder {
    let user_schema = json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "format": "int32" },
            "username": { "type": "string" },
            "email": { "type": "string" },
            "password": { "type": "string" },
            "creatdAt": { "type": "integer", "format": "int64", "description": "epoch milliseconds" }
        }
    });

    let json_body = |schema: &str| {
        json!({ "application/json": { "schema": { "$ref": format!("#/components/schemas/{schema}") } } })
    };
    let ok = |schema: &str| json!({ "200": { "description": "OK", "content": json_body(schema) } });

    let get_user = json!({
        "operationId": "getUserById",
        "parameters": [
            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
            { "name": "param", "in": "query", "required": true, "schema": { "type": "string" } }
        ],
        "responses": ok("User")
    });
    let register_user = json!({
        "operationId": "registerUser",
        "requestBody": { "required": false, "content": { "text/plain": { "schema": { "type": "string" } } } },
        "responses": ok("RegisterApiResponse")
    });
    let login_user = json!({
        "operationId": "loginUser",
        "requestBody": { "required": true, "content": json_body("User") },
        "responses": ok("LoginResponse")
    });

    let schemas = json!({
        "User": user_schema,
        "RegisterApiResponse": {
            "type": "object",
            "properties": {
                "status": { "type": "string" },
                "message": { "type": "string" }
            }
        },
        "LoginResponse": { "type": "object" }
    });

    let doc = json!({
        "openapi": "3.0.1",
        "info": { "title": "userservice", "version": env!("CARGO_PKG_VERSION") },
        "components": {
            "securitySchemes": {
                "basicAuth": { "type": "http", "scheme": "basic", "description": REALM }
            },
            "schemas": schemas
        },
        "security": [{ "basicAuth": [] }],
        "paths": {
            "/users/{id}": { "get": get_user },
            "/users/register": { "post": register_user },
            "/users/login": { "post": login_user }
        }
    });

    HttpResponse::Ok().json(doc)
}

#[get("/swagger-ui.html")]
pub async fn index() -> impl Responder {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>userservice API</title>
        <style>
            body { font-family: monospace; padding: 40px; }
            code { background: #eee; padding: 2px 6px; border-radius: 4px; }
            li { margin-bottom: 10px; }
        </style>
    </head>
    <body>
        <h1>userservice API</h1>
        <p>All <code>/users</code> routes need HTTP Basic credentials.</p>
        <ul>
            <li><code>GET /users/{id}?param=...</code> – Look up a user</li>
            <li><code>POST /users/register</code> – Register a user</li>
            <li><code>POST /users/login</code> – Log in</li>
            <li><code>GET /v3/api-docs</code> – OpenAPI description</li>
        </ul>
    </body>
    </html>
    "#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_docs).service(index);
}
