use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::PortfolioData;

/// Store double backed by a mutex. Failure switches let tests drive every
/// error path of the services and the editor.
#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    document: Mutex<Option<PortfolioData>>,
    pub fail_find: bool,
    pub fail_seed: bool,
    pub fail_replace: bool,
    /// Seed reports success but writes nothing.
    pub drop_seed: bool,
    seed_calls: AtomicUsize,
    replace_calls: AtomicUsize,
}

impl InMemoryPortfolioRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(data: PortfolioData) -> Self {
        Self {
            document: Mutex::new(Some(data)),
            ..Self::default()
        }
    }

    pub fn failing_find() -> Self {
        Self {
            fail_find: true,
            ..Self::default()
        }
    }

    pub fn failing_seed() -> Self {
        Self {
            fail_seed: true,
            ..Self::default()
        }
    }

    pub fn dropping_seed() -> Self {
        Self {
            drop_seed: true,
            ..Self::default()
        }
    }

    pub fn failing_replace(data: PortfolioData) -> Self {
        Self {
            fail_replace: true,
            ..Self::with(data)
        }
    }

    pub fn snapshot(&self) -> Option<PortfolioData> {
        self.document.lock().unwrap().clone()
    }

    pub fn seed_calls(&self) -> usize {
        self.seed_calls.load(Ordering::SeqCst)
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        if self.fail_find {
            return Err(PortfolioRepositoryError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(self.snapshot())
    }

    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        self.seed_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_seed {
            return Err(PortfolioRepositoryError::DatabaseError(
                "seed insert failed".to_string(),
            ));
        }
        if self.drop_seed {
            return Ok(());
        }
        let mut guard = self.document.lock().unwrap();
        if guard.is_none() {
            *guard = Some(data.clone());
        }
        Ok(())
    }

    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_replace {
            return Err(PortfolioRepositoryError::DatabaseError(
                "write failed".to_string(),
            ));
        }
        *self.document.lock().unwrap() = Some(data.clone());
        Ok(())
    }
}
