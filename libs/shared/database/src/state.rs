use once_cell::sync::OnceCell;

use shared_config::AppConfig;

use crate::error::DatabaseError;
use crate::supabase::SupabaseClient;

/// Shared router state: configuration plus the two data-store handles.
///
/// Each client is built on first use and then reused for the lifetime of the
/// state. `OnceCell` guarantees a single successful initialization even under
/// concurrent first access; a failed construction is not cached, so the error
/// resurfaces on every call until the environment is fixed.
pub struct AppState {
    pub config: AppConfig,
    service_client: OnceCell<SupabaseClient>,
    public_client: OnceCell<SupabaseClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            service_client: OnceCell::new(),
            public_client: OnceCell::new(),
        }
    }

    /// Privileged client for server-only routes.
    pub fn service_client(&self) -> Result<&SupabaseClient, DatabaseError> {
        self.service_client
            .get_or_try_init(|| SupabaseClient::service_role(&self.config))
    }

    /// Client that respects row-level security.
    pub fn public_client(&self) -> Result<&SupabaseClient, DatabaseError> {
        self.public_client
            .get_or_try_init(|| SupabaseClient::public(&self.config))
    }
}
