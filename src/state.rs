use std::sync::{Arc, RwLock};

use crate::{config::Config, error::AppError, models::Question};

/// Process-wide state: the configuration and the current question pool.
///
/// The pool slot holds an `Arc` that is swapped wholesale on refresh.
/// Readers clone the `Arc` once per request and work off that snapshot, so
/// a concurrent replacement can never produce a torn read.
pub struct AppState {
    pub config: Config,
    pool: RwLock<Arc<Vec<Question>>>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            pool: RwLock::new(Arc::new(Vec::new())),
        })
    }

    /// One consistent pool value for the whole request.
    pub fn snapshot(&self) -> Result<Arc<Vec<Question>>, AppError> {
        let guard = self
            .pool
            .read()
            .map_err(|_| AppError::Internal("question pool lock poisoned".into()))?;

        Ok(Arc::clone(&guard))
    }

    /// Wholesale replacement. The new pool is fully built before this is
    /// called, so the write lock is only held for the swap.
    pub fn publish(&self, pool: Vec<Question>) -> Result<(), AppError> {
        let mut guard = self
            .pool
            .write()
            .map_err(|_| AppError::Internal("question pool lock poisoned".into()))?;
        *guard = Arc::new(pool);

        Ok(())
    }
}
