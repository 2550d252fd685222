//! File-facing side of the alchemy engine: catalog files, session config,
//! the progress save format, and the [`session::Session`] that ties them
//! to a graph and a ledger.

pub mod config;
pub mod loader;
pub mod save;
pub mod session;

pub use config::{CatalogMode, PlayerRecipe, SessionConfig, load_config, load_config_from_dir};
pub use loader::{DataLoadError, Format, load_catalog};
pub use save::{SaveError, SaveFile};
pub use session::{CatalogSource, InMemoryCatalogs, Session, SessionError};
