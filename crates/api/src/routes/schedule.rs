use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedules",
            post(handlers::schedule::create_schedule).get(handlers::schedule::list_schedules),
        )
        .route(
            "/api/schedules/:id",
            get(handlers::schedule::get_schedule)
                .put(handlers::schedule::update_schedule)
                .delete(handlers::schedule::delete_schedule),
        )
        .route("/api/schedules/:id/slots", post(handlers::slots::add_time_slot))
        .route(
            "/api/schedules/:id/slots/:slot_id",
            delete(handlers::slots::remove_time_slot),
        )
        .route(
            "/api/schedules/:id/slots/:slot_id/active",
            put(handlers::slots::set_slot_active),
        )
}
