// src/api/properties.rs

use std::sync::Arc;

use serde::Deserialize;

use crate::api::{ApiClient, FlagToggle, QueryParams, ResourceApi};
use crate::common::error::AppError;
use crate::models::property::{Property, PropertyDraft};

#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub area: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl QueryParams for PropertyFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(area) = &self.area {
            pairs.push(("area", area.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("property_type", kind.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
struct AreasResponse {
    areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TypesResponse {
    types: Vec<String>,
}

#[derive(Clone)]
pub struct PropertiesApi {
    client: Arc<ApiClient>,
}

impl PropertiesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Valores distintos de localidade entre os imóveis do corretor.
    pub async fn areas(&self) -> Result<Vec<String>, AppError> {
        let response: AreasResponse = self
            .client
            .get_json("/properties/areas/list", &[])
            .await?;
        Ok(response.areas)
    }

    /// Tipos de imóvel em uso.
    pub async fn types(&self) -> Result<Vec<String>, AppError> {
        let response: TypesResponse = self
            .client
            .get_json("/properties/types/list", &[])
            .await?;
        Ok(response.types)
    }
}

impl ResourceApi for PropertiesApi {
    type Entity = Property;
    type Draft = PropertyDraft;
    type Filter = PropertyFilter;

    fn base_path(&self) -> &'static str {
        "/properties"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl FlagToggle for PropertiesApi {
    fn flag_path(&self) -> &'static str {
        "hot"
    }
}
