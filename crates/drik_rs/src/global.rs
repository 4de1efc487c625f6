//! Process-wide engine.
//!
//! The periodic-term tables are checked once, when the engine is built.
//! Applications should call [`init`] (custom settings) or
//! [`ensure_initialized`] (defaults) at process start so a malformed table
//! is reported there. A caller that skips both gets the default engine
//! built by the first chart request, and a table error surfaces from that
//! request instead.

use std::sync::OnceLock;

use drik_core::{Engine, EngineConfig};
use log::info;

use crate::error::DrikError;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Build and install the global engine. Fails if one is already installed.
pub fn init(config: EngineConfig) -> Result<(), DrikError> {
    let engine = Engine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| DrikError::AlreadyInitialized)?;
    info!("global engine installed");
    Ok(())
}

/// Install the default engine unless one is already present, validating
/// the reference tables now.
pub fn ensure_initialized() -> Result<(), DrikError> {
    engine().map(|_| ())
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The global engine, built with defaults on first use.
pub(crate) fn engine() -> Result<&'static Engine, DrikError> {
    if let Some(engine) = ENGINE.get() {
        return Ok(engine);
    }
    let built = Engine::new(EngineConfig::default())?;
    let engine = ENGINE.get_or_init(|| built);
    info!("default global engine installed");
    Ok(engine)
}
