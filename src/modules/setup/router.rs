use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::auto_setup;

pub fn init_setup_router() -> Router<AppState> {
    Router::new().route("/auto-setup", post(auto_setup))
}
