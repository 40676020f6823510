//! In-memory job role catalog.
//!
//! Seeded once at startup from an optional JSON file, then grown by
//! `POST /api/v1/job-roles`. Shared as `Arc<RwLock<JobRoleCatalog>>`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_role::{JobRole, NewJobRole};

#[derive(Debug, Default)]
pub struct JobRoleCatalog {
    roles: Vec<JobRole>,
}

impl JobRoleCatalog {
    /// Wraps an existing role list. Roles without an id get a fresh uuid.
    pub fn new(roles: Vec<JobRole>) -> Self {
        let roles = roles
            .into_iter()
            .map(|mut role| {
                if role.id.is_null() {
                    role.id = Value::String(Uuid::new_v4().to_string());
                }
                role
            })
            .collect();
        Self { roles }
    }

    /// Reads a JSON array of job roles from `path`.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job roles from {}", path.display()))?;
        let roles: Vec<JobRole> = serde_json::from_str(&raw)
            .with_context(|| format!("Job roles file {} is not a JSON array of roles", path.display()))?;

        info!("Loaded {} job roles from {}", roles.len(), path.display());
        Ok(Self::new(roles))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// All roles ordered by `role_name`.
    pub fn list(&self) -> Vec<JobRole> {
        let mut roles = self.roles.clone();
        roles.sort_by(|a, b| a.role_name.cmp(&b.role_name));
        roles
    }

    pub fn get(&self, id: &str) -> Option<&JobRole> {
        self.roles
            .iter()
            .find(|role| role.id_key().as_deref() == Some(id))
    }

    /// Adds a role. Role names are unique, compared after Unicode lower-casing.
    pub fn create(&mut self, new_role: NewJobRole) -> Result<JobRole, AppError> {
        let role_name = new_role.role_name.trim();
        if role_name.is_empty() {
            return Err(AppError::Validation("Role name is required".to_string()));
        }
        let folded = role_name.to_lowercase();
        if self
            .roles
            .iter()
            .any(|r| r.role_name.trim().to_lowercase() == folded)
        {
            return Err(AppError::Conflict("Job role already exists".to_string()));
        }

        let role = JobRole {
            id: Value::String(Uuid::new_v4().to_string()),
            role_name: role_name.to_string(),
            category: non_blank(new_role.category),
            description: non_blank(new_role.description),
            requirements: non_blank(new_role.requirements),
            ..JobRole::default()
        };
        self.roles.push(role.clone());

        info!("Created job role '{}' ({})", role.role_name, role.id_key().unwrap_or_default());
        Ok(role)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for category in self.roles.iter().filter_map(|r| r.category.as_ref()) {
            if !out.contains(category) {
                out.push(category.clone());
            }
        }
        out
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
