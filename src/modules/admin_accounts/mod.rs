pub mod controller;
pub mod router;

pub use router::init_admin_accounts_router;
