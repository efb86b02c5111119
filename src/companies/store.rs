//! Company Store Module
//!
//! CRUD over a single JSON file. Each mutation reads the whole file, edits it
//! and writes it back while holding the store's lock.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::model::{
    Company, CompanyFile, MAX_INDUSTRY_CHARS, MAX_INITIATIVES, MAX_NAME_CHARS,
};
use crate::error::{AppError, Result};

// == Company Store ==
#[derive(Debug)]
pub struct CompanyStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CompanyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Reads ==
    pub async fn list(&self) -> Result<Vec<Company>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.companies)
    }

    pub async fn get(&self, id: &str) -> Result<Company> {
        self.list()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("company {id}")))
    }

    /// Companies whose name contains `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Result<Vec<Company>> {
        let query = query.to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect())
    }

    // == Create ==
    pub async fn create(
        &self,
        name: &str,
        industry: &str,
        initiatives: Vec<String>,
    ) -> Result<Company> {
        let name = validate_name(name)?;
        let industry = validate_industry(industry)?;
        let initiatives = clean_initiatives(initiatives)?;

        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;

        if data.companies.iter().any(|c| c.name.to_lowercase() == name.to_lowercase()) {
            return Err(AppError::Conflict(format!("company '{name}' already exists")));
        }

        let now = Utc::now();
        let company = Company {
            id: Uuid::new_v4().to_string(),
            name,
            industry,
            initiatives,
            created_at: now,
            updated_at: now,
        };

        data.companies.push(company.clone());
        self.save(&data).await?;
        info!(id = %company.id, name = %company.name, "company created");
        Ok(company)
    }

    // == Update ==
    /// Changes only the fields that are given.
    pub async fn update(
        &self,
        id: &str,
        name: Option<&str>,
        industry: Option<&str>,
        initiatives: Option<Vec<String>>,
    ) -> Result<Company> {
        let name = name.map(validate_name).transpose()?;
        let industry = industry.map(validate_industry).transpose()?;
        let initiatives = initiatives.map(clean_initiatives).transpose()?;

        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;

        if let Some(name) = &name {
            if data
                .companies
                .iter()
                .any(|c| c.id != id && c.name.to_lowercase() == name.to_lowercase())
            {
                return Err(AppError::Conflict(format!("company '{name}' already exists")));
            }
        }

        let company = data
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("company {id}")))?;

        if let Some(name) = name {
            company.name = name;
        }
        if let Some(industry) = industry {
            company.industry = industry;
        }
        if let Some(initiatives) = initiatives {
            company.initiatives = initiatives;
        }
        company.updated_at = Utc::now();

        let updated = company.clone();
        self.save(&data).await?;
        debug!(id, "company updated");
        Ok(updated)
    }

    // == Delete ==
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;

        let before = data.companies.len();
        data.companies.retain(|c| c.id != id);
        if data.companies.len() == before {
            return Err(AppError::NotFound(format!("company {id}")));
        }

        self.save(&data).await?;
        info!(id, "company deleted");
        Ok(())
    }

    // == File Access ==
    /// Missing or unreadable JSON is treated as an empty store.
    async fn load(&self) -> Result<CompanyFile> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CompanyFile::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "company file is not valid JSON, starting empty");
            CompanyFile::default()
        }))
    }

    async fn save(&self, data: &CompanyFile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

// == Field Validation ==
fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidRequest("company name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::InvalidRequest(format!(
            "company name exceeds {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_industry(industry: &str) -> Result<String> {
    let industry = industry.trim();
    if industry.chars().count() > MAX_INDUSTRY_CHARS {
        return Err(AppError::InvalidRequest(format!(
            "industry exceeds {MAX_INDUSTRY_CHARS} characters"
        )));
    }
    Ok(industry.to_string())
}

/// Trims entries, drops blanks, then enforces the initiative limit.
fn clean_initiatives(initiatives: Vec<String>) -> Result<Vec<String>> {
    let cleaned: Vec<String> = initiatives
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    if cleaned.len() > MAX_INITIATIVES {
        return Err(AppError::InvalidRequest(format!(
            "maximum {MAX_INITIATIVES} initiatives allowed"
        )));
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (CompanyStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = CompanyStore::new(dir.path().join("data").join("companies.json"));
        (store, dir)
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let (store, _dir) = store();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (store, _dir) = store();
        let created = store
            .create(" Acme ", "Banking", vec!["Cloud".into(), "  ".into(), "AI".into()])
            .await
            .unwrap();

        assert_eq!(created.name, "Acme");
        assert_eq!(created.initiatives, vec!["Cloud", "AI"]);
        assert_eq!(store.get(&created.id).await.unwrap(), created);
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let (store, _dir) = store();
        store.create("Acme", "", vec![]).await.unwrap();

        let result = store.create("ACME", "", vec![]).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_too_many_initiatives() {
        let (store, _dir) = store();
        let result = store
            .create("Acme", "", vec!["a".into(), "b".into(), "c".into(), "d".into()])
            .await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let (store, _dir) = store();
        store.create("Acme Bank", "", vec![]).await.unwrap();
        store.create("Globex", "", vec![]).await.unwrap();

        let found = store.search("acme").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Acme Bank");
    }

    #[tokio::test]
    async fn test_update_partial_fields() {
        let (store, _dir) = store();
        let created = store.create("Acme", "Banking", vec!["Cloud".into()]).await.unwrap();

        let updated = store
            .update(&created.id, None, Some("Fintech"), None)
            .await
            .unwrap();

        assert_eq!(updated.name, "Acme");
        assert_eq!(updated.industry, "Fintech");
        assert_eq!(updated.initiatives, vec!["Cloud"]);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_company() {
        let (store, _dir) = store();
        let result = store.update("nope", Some("X"), None, None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, _dir) = store();
        let created = store.create("Acme", "", vec![]).await.unwrap();

        store.delete(&created.id).await.unwrap();
        assert!(matches!(store.get(&created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(&created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty() {
        let (store, _dir) = store();
        tokio::fs::create_dir_all(store.path().parent().unwrap()).await.unwrap();
        tokio::fs::write(store.path(), "{not json").await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_persist() {
        let (store, _dir) = store();
        let store = std::sync::Arc::new(store);

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&format!("Company {i}"), "", vec![]).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list().await.unwrap().len(), 10);
    }
}
