//! Acronym service - orchestrates acronym operations.

use std::sync::Arc;

use crate::domain::{Acronym, AcronymId, AcronymSort, NewAcronym};
use crate::ports::{AcronymRepository, CoreError, Repos};

/// Service for acronym CRUD and query operations.
#[derive(Clone)]
pub struct AcronymService {
    repo: Arc<dyn AcronymRepository>,
}

impl AcronymService {
    /// Create a new acronym service.
    pub fn new(repo: Arc<dyn AcronymRepository>) -> Self {
        Self { repo }
    }

    /// Create a service from the repository container.
    pub fn from_repos(repos: &Repos) -> Self {
        Self::new(Arc::clone(&repos.acronyms))
    }

    /// Persist a new acronym and return it with its assigned identity.
    pub async fn create(&self, acronym: NewAcronym) -> Result<Acronym, CoreError> {
        let created = self.repo.insert(&acronym).await?;
        tracing::debug!(id = %created.id, short = %created.short, "Created acronym");
        Ok(created)
    }

    /// All acronyms in storage order.
    pub async fn list(&self) -> Result<Vec<Acronym>, CoreError> {
        Ok(self.repo.list(None).await?)
    }

    pub async fn get(&self, id: AcronymId) -> Result<Acronym, CoreError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Replace `short` and `long` of an existing acronym.
    ///
    /// Identity always comes from `id`; the stored row is overwritten in a
    /// single statement, so a concurrently deleted row stays deleted.
    pub async fn update(&self, id: AcronymId, changes: NewAcronym) -> Result<Acronym, CoreError> {
        let updated = changes.with_id(id);
        self.repo.update(&updated).await?;
        tracing::debug!(id = %id, "Updated acronym");
        Ok(updated)
    }

    pub async fn delete(&self, id: AcronymId) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::debug!(id = %id, "Deleted acronym");
        Ok(())
    }

    /// Acronyms whose short or long form equals `term` exactly.
    pub async fn search(&self, term: &str) -> Result<Vec<Acronym>, CoreError> {
        Ok(self.repo.search(term).await?)
    }

    /// The first acronym in storage order.
    pub async fn first(&self) -> Result<Acronym, CoreError> {
        self.repo
            .first(None)
            .await?
            .ok_or_else(|| CoreError::NotFound("No acronyms stored".to_string()))
    }

    /// All acronyms under the given ordering.
    pub async fn sorted(&self, sort: AcronymSort) -> Result<Vec<Acronym>, CoreError> {
        Ok(self.repo.list(Some(sort)).await?)
    }

    /// The first acronym under the given ordering.
    pub async fn sorted_first(&self, sort: AcronymSort) -> Result<Acronym, CoreError> {
        self.repo
            .first(Some(sort))
            .await?
            .ok_or_else(|| CoreError::NotFound("No acronyms stored".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField};
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Vec-backed repository; insertion order is storage order.
    struct MockAcronymRepo {
        rows: Mutex<Vec<Acronym>>,
    }

    impl MockAcronymRepo {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }

        fn sorted(&self, sort: Option<AcronymSort>) -> Vec<Acronym> {
            let mut rows = self.rows.lock().unwrap().clone();
            if let Some(sort) = sort {
                rows.sort_by(|a, b| {
                    let ord = match sort.field() {
                        SortField::Short => a.short.cmp(&b.short),
                        SortField::Long => a.long.cmp(&b.long),
                    };
                    match sort.direction() {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
            rows
        }
    }

    #[async_trait]
    impl AcronymRepository for MockAcronymRepo {
        async fn list(&self, sort: Option<AcronymSort>) -> Result<Vec<Acronym>, RepositoryError> {
            Ok(self.sorted(sort))
        }

        async fn first(
            &self,
            sort: Option<AcronymSort>,
        ) -> Result<Option<Acronym>, RepositoryError> {
            Ok(self.sorted(sort).into_iter().next())
        }

        async fn get_by_id(&self, id: AcronymId) -> Result<Acronym, RepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("Acronym with ID {id}")))
        }

        async fn search(&self, term: &str) -> Result<Vec<Acronym>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.short == term || a.long == term)
                .cloned()
                .collect())
        }

        async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, RepositoryError> {
            let created = acronym.clone().with_id(AcronymId::new());
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, acronym: &Acronym) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|a| a.id == acronym.id)
                .ok_or_else(|| RepositoryError::NotFound(format!("Acronym with ID {}", acronym.id)))?;
            *row = acronym.clone();
            Ok(())
        }

        async fn delete(&self, id: AcronymId) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.id != id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound(format!("Acronym with ID {id}")));
            }
            Ok(())
        }
    }

    fn service() -> AcronymService {
        AcronymService::new(Arc::new(MockAcronymRepo::new()))
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();

        let created = service
            .create(NewAcronym::new("LOL", "laugh out loud"))
            .await
            .unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.short, "LOL");
        assert_eq!(fetched.long, "laugh out loud");
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let service = service();
        let created = service
            .create(NewAcronym::new("OMG", "Oh My God"))
            .await
            .unwrap();

        let updated = service
            .update(created.id, NewAcronym::new("OMG", "Oh My Gosh"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.long, "Oh My Gosh");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();
        let err = service
            .update(AcronymId::new(), NewAcronym::new("A", "B"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_fails_second_time() {
        let service = service();
        let created = service.create(NewAcronym::new("BRB", "be right back")).await.unwrap();

        service.delete(created.id).await.unwrap();
        let err = service.delete(created.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_first_on_empty_is_not_found() {
        let service = service();
        assert!(service.first().await.unwrap_err().is_not_found());
        assert!(
            service
                .sorted_first(AcronymSort::ShortAscending)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_sorted_orders_by_short() {
        let service = service();
        for short in ["b", "a", "c"] {
            service.create(NewAcronym::new(short, short)).await.unwrap();
        }

        let shorts: Vec<String> = service
            .sorted(AcronymSort::ShortAscending)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.short)
            .collect();
        assert_eq!(shorts, ["a", "b", "c"]);

        let first = service
            .sorted_first(AcronymSort::ShortAscending)
            .await
            .unwrap();
        assert_eq!(first.short, "a");

        let unsorted_first = service.first().await.unwrap();
        assert_eq!(unsorted_first.short, "b");
    }

    #[tokio::test]
    async fn test_search_matches_either_field_exactly() {
        let service = service();
        service.create(NewAcronym::new("TIL", "today I learned")).await.unwrap();
        service.create(NewAcronym::new("IMO", "in my opinion")).await.unwrap();

        assert_eq!(service.search("TIL").await.unwrap().len(), 1);
        assert_eq!(service.search("in my opinion").await.unwrap().len(), 1);
        assert!(service.search("TI").await.unwrap().is_empty());
    }
}
