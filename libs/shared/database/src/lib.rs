pub mod error;
pub mod state;
pub mod supabase;

pub use error::DatabaseError;
pub use state::AppState;
pub use supabase::{ClientRole, SupabaseClient};
