//! Session context owning the canonical dataset.
//!
//! Replaces ambient/global dataset state: the session is constructed once
//! per invocation, loads the store through the normalizer and is handed
//! by reference to each pipeline stage. Filtered results are memoized per
//! (generation, selection); a reload bumps the generation and drops the
//! whole cache. Correctness never depends on the cache.

use crate::core::filters::apply_filters;
use crate::core::normalize::normalize;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::filter::FilterSelection;
use crate::models::record::Dataset;
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

pub struct Session {
    dataset: Dataset,
    generation: u64,
    cache: RefCell<HashMap<u64, Dataset>>,
}

impl Session {
    /// Load the full store and normalize it into the canonical dataset.
    pub fn open(pool: &mut DbPool) -> AppResult<Self> {
        let raw = queries::load_all(pool)?;
        Ok(Self::from_dataset(normalize(raw)))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            generation: 0,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Re-read the store after an import replaced the data generation.
    pub fn reload(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let raw = queries::load_all(pool)?;
        self.dataset = normalize(raw);
        self.generation += 1;
        self.cache.borrow_mut().clear();
        Ok(())
    }

    /// Filtered view of the dataset, memoized per selection.
    pub fn filtered(&self, selection: &FilterSelection) -> Dataset {
        let key = self.cache_key(selection);

        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }

        let out = apply_filters(&self.dataset, selection);
        self.cache.borrow_mut().insert(key, out.clone());
        out
    }

    fn cache_key(&self, selection: &FilterSelection) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.generation.hash(&mut hasher);
        selection.hash(&mut hasher);
        hasher.finish()
    }
}
