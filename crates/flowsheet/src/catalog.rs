//! Diagram catalogues.
//!
//! A [`Catalog`] maps diagram ids to shared, immutable [`Diagram`]s in
//! insertion order. [`Catalog::builtin`] holds the diagrams that ship with
//! the crate; more can be loaded from TOML tables with
//! [`Catalog::from_toml_str`].
//!
//! # TOML layout
//!
//! ```toml
//! [[diagram]]
//! id = "pilot"
//! title = "Pilot skid"
//!
//! [[diagram.node]]
//! id = "feed"
//! name = "Feed Tank"
//! shape = "tank"
//! fill = "#bfdbfe"
//! x = 20
//! y = 40
//! width = 100
//! height = 140
//! specification = "2 m³"
//!
//! [[diagram.edge]]
//! from = "feed"
//! to = "pump"
//! ```

mod tables;

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use flowsheet_core::identifier::Id;

use crate::{
    FlowsheetError,
    diagram::{Diagram, DiagramRecord},
};

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// An ordered collection of diagrams keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    diagrams: IndexMap<Id, Arc<Diagram>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "diagram")]
    diagrams: Vec<DiagramRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in catalogue, constructing it on first access.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = Catalog::new();
            catalog.insert(tables::membrane_bioreactor());
            catalog.insert(tables::reverse_osmosis());
            catalog.insert(tables::anaerobic_digestion());
            debug!(diagrams = catalog.len(); "Built-in catalog initialized");
            catalog
        })
    }

    /// Parses a catalogue from TOML diagram tables.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::Catalog`] if the source is not valid TOML
    /// or does not match the table layout.
    pub fn from_toml_str(source: &str) -> Result<Self, FlowsheetError> {
        let file: CatalogFile = toml::from_str(source)?;

        let mut catalog = Catalog::new();
        for record in file.diagrams {
            catalog.insert(Diagram::from(record));
        }
        info!(diagrams = catalog.len(); "Catalog loaded");

        Ok(catalog)
    }

    /// Adds a diagram, replacing any existing diagram with the same id.
    pub fn insert(&mut self, diagram: Diagram) {
        self.diagrams.insert(diagram.id(), Arc::new(diagram));
    }

    /// Adds every diagram of `other`; diagrams with an existing id replace
    /// the old entry in place.
    pub fn extend(&mut self, other: Catalog) {
        self.diagrams.extend(other.diagrams);
    }

    /// Looks up a diagram by id.
    pub fn get(&self, id: &str) -> Option<Arc<Diagram>> {
        self.diagrams.get(&Id::new(id)).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.diagrams.contains_key(&Id::new(id))
    }

    /// Diagram ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.diagrams.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Diagram>> {
        self.diagrams.values()
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}
