//! Static pokemon catalog.
//!
//! Loaded once at startup from the bundled JSON document and treated as
//! read-only for the life of the process. The loaded catalog reaches the
//! routed demo through a composition local, the same mechanism the demos
//! teach.

use std::rc::Rc;

use pergola_core::Local;
use serde::Deserialize;
use thiserror::Error;

static POKEMON_JSON: &str = include_str!("../data/plant-pokemon.json");

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed pokemon data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Ordered, immutable list of pokemon; indexed by position.
#[derive(Clone)]
pub struct Catalog(Rc<Vec<Pokemon>>);

impl Catalog {
    pub fn load() -> Result<Catalog, CatalogError> {
        let list: Vec<Pokemon> = serde_json::from_str(POKEMON_JSON)?;
        Ok(Catalog(Rc::new(list)))
    }

    pub fn from_list(list: Vec<Pokemon>) -> Catalog {
        Catalog(Rc::new(list))
    }

    /// Position lookup; out-of-range is `None`, never a panic.
    pub fn get(&self, index: usize) -> Option<&Pokemon> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.0.iter()
    }
}

pub static CATALOG: Local<Catalog> = Local::new("catalog", || Catalog(Rc::new(Vec::new())));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses_in_order() {
        let catalog = Catalog::load().expect("bundled catalog parses");
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).map(|p| p.name.as_str()), Some("Bulbasaur"));
        assert_eq!(catalog.get(catalog.len()), None);
    }

    #[test]
    fn the_local_defaults_to_an_empty_catalog() {
        assert!(CATALOG.get().is_empty());
        let provided = Catalog::from_list(vec![Pokemon {
            name: "Tangela".into(),
        }]);
        let len = CATALOG.provide(provided, || CATALOG.get().len());
        assert_eq!(len, 1);
    }
}
