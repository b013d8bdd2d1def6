use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::Response,
};
use service::auth::bearer_token;
use tracing::{debug, warn};

use crate::errors::ApiError;
use crate::state::ServerState;

/// 受保护路由的中间件：校验 `Authorization: Bearer <jwt>`。
/// CORS 预检直接放行；缺失、格式错误或校验失败一律 401。
/// 校验通过后把 `Identity` 写入请求扩展供 handler 使用。
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path().to_owned();
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = match bearer_token(header) {
        Ok(token) => token.to_owned(),
        Err(e) => {
            warn!(path = %path, code = e.code(), err = %e, "bearer token missing or malformed");
            return Err(e.into());
        }
    };

    let identity = match state.verifier.verify(&token).await {
        Ok(identity) => identity,
        Err(e) => {
            warn!(path = %path, code = e.code(), err = %e, "token validation failed");
            return Err(e.into());
        }
    };

    debug!(path = %path, subject = %identity.subject, "request authenticated");
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
