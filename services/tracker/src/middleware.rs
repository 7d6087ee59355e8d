use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts, MatchedPath, RawPathParams, Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;

use devtrack_auth_types::identity::IdentityHeaders;

use crate::domain::audit::RequestFacts;
use crate::domain::repository::ActivityLogRepository;
use crate::domain::types::ClientInfo;
use crate::router::route_name;
use crate::usecase::activity::ActivityRecorder;

/// Audit every routed request after the handler has produced its response.
///
/// Apply with `Router::layer` so routing has already resolved the matched path
/// and path parameters. The response is returned unchanged whatever happens to
/// the audit write.
pub async fn record_activity<R>(
    State(recorder): State<ActivityRecorder<R>>,
    request: Request,
    next: Next,
) -> Response
where
    R: ActivityLogRepository + Clone + 'static,
{
    let (mut parts, body) = request.into_parts();

    if !recorder.rules().should_log(parts.uri.path()) {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let path_params = match RawPathParams::from_request_parts(&mut parts, &()).await {
        Ok(params) => params
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect(),
        Err(_) => Vec::new(),
    };
    let facts = RequestFacts {
        method: parts.method.as_str().to_owned(),
        path: parts.uri.path().to_owned(),
        route_name: parts
            .extensions
            .get::<MatchedPath>()
            .and_then(|matched| route_name(&parts.method, matched.as_str())),
        path_params,
    };
    let user_id = IdentityHeaders::from_headers(&parts.headers).map(|identity| identity.user_id);
    let client = ClientInfo {
        ip_address: parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_default(),
        user_agent: parts
            .headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned(),
    };

    let response = next.run(Request::from_parts(parts, body)).await;
    recorder.record_request(user_id, &facts, &client).await;
    response
}
