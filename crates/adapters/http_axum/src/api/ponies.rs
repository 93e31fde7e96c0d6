//! Handlers for the pony collection.

use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, RawQuery, State};
use axum::http::StatusCode;
use axum::http::request::Parts;

use corral_app::ports::PonyRepository;
use corral_domain::pony::{Pony, PonyDraft};

use crate::error::ApiError;
use crate::form;
use crate::response::XJson;
use crate::state::AppState;

/// Query parameter holding the comma-separated names to keep.
const IDS_PARAM: &str = "ids";

/// Key of a single pony, taken from the last path segment.
///
/// Only ASCII letters, digits and whitespace (vertical tab included) are
/// accepted (after percent-decoding). Anything else means the path did not match a route,
/// so the request is rejected with an empty `404`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PonyKey(pub String);

impl PonyKey {
    fn is_valid(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '\x0b')
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PonyKey {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        if Self::is_valid(&key) {
            Ok(Self(key))
        } else {
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Names listed in the `ids` query parameter, if any.
///
/// The first non-blank `ids` value is used. It is percent-decoded once more
/// because clients encode the list before putting it in the query string.
fn requested_names(query: Option<&str>) -> Option<Vec<String>> {
    let pairs = form::parse_pairs(query?.as_bytes());
    let (_, ids) = pairs
        .into_iter()
        .find(|(key, value)| key == IDS_PARAM && !value.is_empty())?;
    Some(
        form::decode_percent(&ids)
            .split(',')
            .map(str::to_string)
            .collect(),
    )
}

fn draft_from_body(body: &Bytes) -> PonyDraft {
    form::parse_pairs(body).into_iter().collect()
}

/// `GET /ponies/` (optionally `?ids=a,b,c`)
pub async fn list<R>(
    State(state): State<AppState<R>>,
    RawQuery(query): RawQuery,
) -> Result<XJson<Vec<Pony>>, ApiError>
where
    R: PonyRepository + Send + Sync + 'static,
{
    let names = requested_names(query.as_deref());
    let ponies = state.pony_service.list_ponies(names.as_deref()).await?;
    Ok(XJson(ponies))
}

/// `GET /ponies/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    PonyKey(key): PonyKey,
) -> Result<XJson<Pony>, ApiError>
where
    R: PonyRepository + Send + Sync + 'static,
{
    let pony = state.pony_service.get_pony(&key).await?;
    Ok(XJson(pony))
}

/// `POST /ponies/`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<XJson<Pony>, ApiError>
where
    R: PonyRepository + Send + Sync + 'static,
{
    let pony = state.pony_service.create_pony(draft_from_body(&body)).await?;
    Ok(XJson(pony))
}

/// `PUT /ponies/{id}`
pub async fn replace<R>(
    State(state): State<AppState<R>>,
    PonyKey(key): PonyKey,
    body: Bytes,
) -> Result<XJson<Pony>, ApiError>
where
    R: PonyRepository + Send + Sync + 'static,
{
    let pony = state
        .pony_service
        .replace_pony(&key, draft_from_body(&body))
        .await?;
    Ok(XJson(pony))
}

/// `GET /clear`
pub async fn clear<R>(State(state): State<AppState<R>>) -> Result<XJson<()>, ApiError>
where
    R: PonyRepository + Send + Sync + 'static,
{
    state.pony_service.clear().await?;
    Ok(XJson(()))
}

/// `OPTIONS /ponies/{id}`
pub async fn preflight(_key: PonyKey) -> StatusCode {
    StatusCode::OK
}
