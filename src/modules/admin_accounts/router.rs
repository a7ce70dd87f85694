use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_admin, list_admins, seed_admins, seed_default_admins};

pub fn init_admin_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/seed-admin", get(seed_default_admins).post(seed_admins))
        .route("/delete-admin", get(list_admins).post(delete_admin))
}
