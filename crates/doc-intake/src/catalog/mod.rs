//! Read-only table of services and the document slots each one asks for.

mod standard;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// A named document slot accepting zero or more files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub multiple: bool,
}

/// How a free-text extra field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Text,
    Password,
}

impl InputKind {
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// A free-text input attached to a service, such as a portal password or a case number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFieldSpec {
    pub id: String,
    pub label: String,
    #[serde(default, rename = "type")]
    pub kind: InputKind,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notice: String,
    pub fields: Vec<FieldSpec>,
    #[serde(default, rename = "extraFields", alias = "extra_fields")]
    pub extra_fields: Vec<ExtraFieldSpec>,
}

impl ServiceDefinition {
    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == field_id)
    }

    pub fn extra_field(&self, field_id: &str) -> Option<&ExtraFieldSpec> {
        self.extra_fields.iter().find(|field| field.id == field_id)
    }

    fn ensure_unique_field_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let ids = self
            .fields
            .iter()
            .map(|field| field.id.as_str())
            .chain(self.extra_fields.iter().map(|field| field.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateField {
                    service_id: self.id.clone(),
                    field_id: id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Identifier and display name pair for a service picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<ServiceDefinition>,
}

impl ServiceCatalog {
    /// Built-in catalog of legal-assistance services.
    pub fn standard() -> Self {
        Self {
            services: standard::standard_services(),
        }
    }

    pub fn new(services: Vec<ServiceDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateService(service.id.clone()));
            }
            service.ensure_unique_field_ids()?;
        }
        Ok(Self { services })
    }

    /// Load a catalog from a JSON array of service definitions.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let services: Vec<ServiceDefinition> = serde_json::from_reader(reader)?;
        Self::new(services)
    }

    pub fn get(&self, service_id: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|service| service.id == service_id)
    }

    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn options(&self) -> Vec<ServiceOption<'_>> {
        self.services
            .iter()
            .map(|service| ServiceOption {
                value: &service.id,
                label: &service.name,
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid service catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("service '{0}' is defined more than once")]
    DuplicateService(String),
    #[error("service '{service_id}' defines field '{field_id}' more than once")]
    DuplicateField {
        service_id: String,
        field_id: String,
    },
}
