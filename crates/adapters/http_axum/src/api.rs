//! REST fixture handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod ponies;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, get};

use corral_app::ports::PonyRepository;

use crate::state::AppState;

/// Build the fixture's route table.
///
/// | Path           | Resource | Methods            |
/// |----------------|----------|--------------------|
/// | `/ponies/`     | all      | `GET`, `POST`      |
/// | `/ponies/{id}` | one      | `GET`, `PUT`       |
/// | `/clear`       | clear    | `GET`              |
///
/// Every resource also answers `OPTIONS` with an empty `200`. Any other
/// method on a known path is a `404`, not a `405`. That includes `HEAD`,
/// which axum would otherwise hand to the `GET` handler.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: PonyRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/ponies/",
            resource(get(ponies::list::<R>).post(ponies::create::<R>).options(preflight)),
        )
        .route(
            "/ponies/{id}",
            resource(
                get(ponies::get::<R>)
                    .put(ponies::replace::<R>)
                    .options(ponies::preflight),
            ),
        )
        .route("/clear", resource(get(ponies::clear::<R>).options(preflight)))
}

fn resource<S>(methods: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    methods.head(not_found).fallback(not_found)
}

/// `OPTIONS` on any known path (CORS preflight).
async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
