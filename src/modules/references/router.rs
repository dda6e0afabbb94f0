use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

use super::controller::{
    create_reference, delete_reference, get_all_references, get_reference_by_id, update_reference,
};

pub fn init_references_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_references).post(create_reference))
        .route(
            "/{id}",
            get(get_reference_by_id)
                .put(update_reference)
                .delete(delete_reference),
        )
}
