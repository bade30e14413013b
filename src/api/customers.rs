// src/api/customers.rs

use std::sync::Arc;

use crate::api::{ApiClient, FlagToggle, QueryParams, ResourceApi};
use crate::models::customer::{Customer, CustomerDraft};

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl QueryParams for CustomerFilter {
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
pub struct CustomersApi {
    client: Arc<ApiClient>,
}

impl CustomersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ResourceApi for CustomersApi {
    type Entity = Customer;
    type Draft = CustomerDraft;
    type Filter = CustomerFilter;

    fn base_path(&self) -> &'static str {
        "/customers"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl FlagToggle for CustomersApi {
    fn flag_path(&self) -> &'static str {
        "important"
    }
}
