//! Random unseen-question selection

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::catalog::{CatalogError, CatalogResult};
use crate::storage::{Question, StoreError};

/// Drop every candidate whose id is in `previous`, then pick one uniformly.
///
/// Returns `None` when nothing unseen remains.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    unseen.choose(rng).cloned()
}

/// Quiz selector with an injected random source
pub struct QuizSelector<R: RngCore + Send = StdRng> {
    rng: Mutex<R>,
}

impl QuizSelector<StdRng> {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> QuizSelector<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Next question for the session, or NotFound once it is exhausted
    pub fn next_question(
        &self,
        candidates: Vec<Question>,
        previous: &[i64],
    ) -> CatalogResult<Question> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;

        pick_unseen(candidates, previous, &mut *rng)
            .ok_or_else(|| CatalogError::not_found("quiz exhausted"))
    }
}
