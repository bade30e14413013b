// src/api/deals.rs

use std::sync::Arc;

use crate::api::{ApiClient, QueryParams, ResourceApi};
use crate::common::error::AppError;
use crate::models::dashboard::{BrokerageAnalytics, BrokerageMonth};
use crate::models::deal::{Deal, DealDraft};

#[derive(Debug, Clone, Default)]
pub struct DealFilter {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl QueryParams for DealFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

#[derive(Clone)]
pub struct DealsApi {
    client: Arc<ApiClient>,
}

impl DealsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Série mensal de corretagem dos negócios fechados.
    pub async fn brokerage_analytics(&self) -> Result<Vec<BrokerageMonth>, AppError> {
        let response: BrokerageAnalytics = self
            .client
            .get_json("/deals/analytics/brokerage", &[])
            .await?;
        Ok(response.brokerage_data)
    }
}

impl ResourceApi for DealsApi {
    type Entity = Deal;
    type Draft = DealDraft;
    type Filter = DealFilter;

    fn base_path(&self) -> &'static str {
        "/deals"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}
