use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

use super::controller::{
    create_course, delete_course, get_all_courses, get_course_by_id, update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_courses).post(create_course))
        .route(
            "/{id}",
            get(get_course_by_id)
                .put(update_course)
                .delete(delete_course),
        )
}
