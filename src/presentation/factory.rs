//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{Catalog, ContactUseCase, PersonaCheckUseCase, ThemeService};
use crate::config::Config;
use crate::error::{FolioError, FolioResult};
use crate::infrastructure::{
    EnvColorScheme, HttpFormTransport, JsonRecordSource, LocalFs, TomlKeyValueStore,
};

/// Type alias for the concrete ContactUseCase
pub type ConcreteContactUseCase = ContactUseCase<HttpFormTransport>;

/// Type alias for the concrete PersonaCheckUseCase
pub type ConcretePersonaCheckUseCase = PersonaCheckUseCase<LocalFs>;

/// Load the catalog from a JSON file.
pub fn load_catalog(path: &Path) -> FolioResult<Catalog> {
    let source = JsonRecordSource::new(path);
    Ok(Catalog::load(&source)?)
}

/// Create a contact use case posting to `endpoint` with the configured timeout.
pub fn create_contact_use_case(
    config: &Config,
    endpoint: &str,
) -> FolioResult<ConcreteContactUseCase> {
    if endpoint.trim().is_empty() {
        return Err(FolioError::MissingEndpoint);
    }
    let transport = HttpFormTransport::new(endpoint, config.contact.timeout())?;
    Ok(ContactUseCase::new(transport))
}

/// Create a theme service backed by the user settings file and the environment.
pub fn create_theme_service(config: &Config) -> ThemeService {
    create_theme_service_with_store(config, TomlKeyValueStore::new())
}

/// Create a theme service with a specific settings store
///
/// Useful for tests and for pointing at a different settings file.
pub fn create_theme_service_with_store(config: &Config, store: TomlKeyValueStore) -> ThemeService {
    ThemeService::new(Arc::new(store), Arc::new(EnvColorScheme::new()))
        .with_key(config.theme.key.clone())
}

/// Create a persona check use case over the local file system
pub fn create_persona_check_use_case() -> ConcretePersonaCheckUseCase {
    PersonaCheckUseCase::new(LocalFs::new())
}
