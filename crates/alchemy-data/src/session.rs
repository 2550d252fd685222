//! A play session: one catalog, one ledger, and the screen flow around them.
//!
//! The session owns the only [`CombinationGraph`] and [`DiscoveryLedger`]
//! in play. Leaving the play screen exports the ledger with
//! [`Session::exit_to_menu`]; coming back reconciles it with
//! [`Session::resume`]. Saving, loading, switching catalog mode and adding
//! player recipes all go through here.

use alchemy_core::catalog::{self, ElementRecord};
use alchemy_core::graph::{CombinationGraph, GraphError};
use alchemy_core::ledger::{CombineOutcome, DiscoveryLedger, LedgerPager, PageEntry, Progress};
use alchemy_core::transfer::{self, TransferError, UpdateOutcome};
use std::path::PathBuf;

use crate::config::{CatalogMode, PlayerRecipe, SessionConfig};
use crate::loader::{self, DataLoadError};
use crate::save::{self, SaveError, SaveFile};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while running a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to load catalog: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("progress file error: {0}")]
    Save(#[from] SaveError),

    #[error("progress transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("invalid recipe: {0}")]
    Graph(#[from] GraphError),
}

// ===========================================================================
// Catalog sources
// ===========================================================================

/// Supplies a freshly built graph for a catalog mode.
pub trait CatalogSource {
    fn load_catalog(&self, mode: CatalogMode) -> Result<CombinationGraph, DataLoadError>;
}

/// Catalog files named in the session config.
impl CatalogSource for SessionConfig {
    fn load_catalog(&self, mode: CatalogMode) -> Result<CombinationGraph, DataLoadError> {
        loader::load_catalog(self.catalog_path(mode))
    }
}

/// Catalogs held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogs {
    pub default: Vec<ElementRecord>,
    pub chemistry: Vec<ElementRecord>,
}

impl CatalogSource for InMemoryCatalogs {
    fn load_catalog(&self, mode: CatalogMode) -> Result<CombinationGraph, DataLoadError> {
        let records = match mode {
            CatalogMode::Default => &self.default,
            CatalogMode::Chemistry => &self.chemistry,
        };
        catalog::load(records).map_err(|source| DataLoadError::Catalog {
            file: PathBuf::from(format!("<memory:{mode:?}>")),
            source,
        })
    }
}

// ===========================================================================
// Session
// ===========================================================================

pub struct Session {
    config: SessionConfig,
    source: Box<dyn CatalogSource>,
    mode: CatalogMode,
    graph: CombinationGraph,
    ledger: DiscoveryLedger,
    pager: LedgerPager,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("elements", &self.graph.len())
            .field("discovered", &self.ledger.len())
            .field("pager", &self.pager)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a session reading catalogs from the files named in `config`.
    ///
    /// `discovered` is progress carried over from a previous screen or save;
    /// pass an empty slice for a new game.
    pub fn start(
        config: SessionConfig,
        mode: CatalogMode,
        discovered: &[String],
    ) -> Result<Self, SessionError> {
        let source = Box::new(config.clone());
        Self::with_source(config, source, mode, discovered)
    }

    /// Start a session with an explicit catalog source.
    pub fn with_source(
        config: SessionConfig,
        source: Box<dyn CatalogSource>,
        mode: CatalogMode,
        discovered: &[String],
    ) -> Result<Self, SessionError> {
        let graph = build_graph(source.as_ref(), mode, &config.player_recipes)?;
        let ledger = DiscoveryLedger::new(&graph);
        let pager = LedgerPager::new(config.page_size);
        let mut session = Self {
            config,
            source,
            mode,
            graph,
            ledger,
            pager,
        };
        if !discovered.is_empty() {
            session.resume(discovered)?;
        }
        tracing::info!(
            mode = ?session.mode,
            elements = session.graph.len(),
            discovered = session.ledger.len(),
            "session started"
        );
        Ok(session)
    }

    // -- Gameplay --

    /// Try to craft `first + second`.
    pub fn combine(&mut self, first: &str, second: &str) -> CombineOutcome {
        self.graph.combine(&mut self.ledger, first, second)
    }

    pub fn progress(&self) -> Progress {
        self.graph.progress(&self.ledger)
    }

    /// The visible sidebar entries.
    pub fn page(&self) -> Vec<PageEntry<'_>> {
        self.pager.page(&self.ledger, &self.graph)
    }

    pub fn scroll_down(&mut self) -> bool {
        self.pager.scroll_down(&self.ledger)
    }

    pub fn scroll_up(&mut self) -> bool {
        self.pager.scroll_up()
    }

    // -- Screen transitions --

    /// Export progress when leaving the play screen.
    pub fn exit_to_menu(&self) -> Result<Vec<String>, SessionError> {
        Ok(transfer::downdate(&self.graph, &self.ledger)?)
    }

    /// Reconcile progress carried back from another screen.
    pub fn resume<S: AsRef<str>>(&mut self, discovered: &[S]) -> Result<UpdateOutcome, SessionError> {
        Ok(transfer::update(&self.graph, &mut self.ledger, discovered)?)
    }

    // -- Player recipes --

    /// Add a player recipe to the current catalog and remember it for later
    /// catalog loads. Returns whether the current catalog accepted it.
    pub fn add_player_recipe(
        &mut self,
        first: &str,
        second: &str,
        product: &str,
    ) -> Result<bool, SessionError> {
        let added = self.graph.define_combo(first, second, product)?;
        let recipe = PlayerRecipe::new(first, second, product);
        if !self.config.player_recipes.contains(&recipe) {
            self.config.player_recipes.push(recipe);
        }
        Ok(added)
    }

    // -- Mode --

    /// Switch catalog. Progress from the previous catalog is discarded.
    pub fn switch_mode(&mut self, mode: CatalogMode) -> Result<(), SessionError> {
        if mode == self.mode {
            return Ok(());
        }
        let graph = build_graph(self.source.as_ref(), mode, &self.config.player_recipes)?;
        let ledger = DiscoveryLedger::new(&graph);
        self.install(mode, graph, ledger);
        Ok(())
    }

    /// Replace catalog and progress in one step.
    fn install(&mut self, mode: CatalogMode, graph: CombinationGraph, ledger: DiscoveryLedger) {
        self.graph = graph;
        self.ledger = ledger;
        self.pager.reset();
        tracing::info!(from = ?self.mode, to = ?mode, "catalog mode switched");
        self.mode = mode;
    }

    // -- Persistence --

    /// Write progress to the configured save file.
    pub fn save(&self) -> Result<(), SessionError> {
        let save = SaveFile {
            mode: self.mode,
            discovered: self.exit_to_menu()?,
        };
        save::save_to_path(&self.config.save_file, &save)?;
        Ok(())
    }

    /// Restore progress from the configured save file.
    ///
    /// A save made in the other catalog mode switches the session to that
    /// catalog. On any error the session keeps its mode and progress.
    pub fn load(&mut self) -> Result<UpdateOutcome, SessionError> {
        let save = save::load_from_path(&self.config.save_file)?;
        if save.mode == self.mode {
            return self.resume(&save.discovered);
        }

        tracing::warn!(saved = ?save.mode, active = ?self.mode, "save file uses another catalog");
        let graph = build_graph(self.source.as_ref(), save.mode, &self.config.player_recipes)?;
        let mut ledger = DiscoveryLedger::new(&graph);
        let outcome = transfer::update(&graph, &mut ledger, &save.discovered)?;
        self.install(save.mode, graph, ledger);
        Ok(outcome)
    }

    // -- Accessors --

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn graph(&self) -> &CombinationGraph {
        &self.graph
    }

    pub fn ledger(&self) -> &DiscoveryLedger {
        &self.ledger
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player_recipes(&self) -> &[PlayerRecipe] {
        &self.config.player_recipes
    }
}

/// Load a catalog and layer the player recipes on top.
fn build_graph(
    source: &dyn CatalogSource,
    mode: CatalogMode,
    recipes: &[PlayerRecipe],
) -> Result<CombinationGraph, SessionError> {
    let mut graph = source.load_catalog(mode)?;
    for recipe in recipes {
        graph.define_combo(&recipe.first, &recipe.second, &recipe.product)?;
    }
    Ok(graph)
}

// ===========================================================================
// Tests
// ===========================================================================
