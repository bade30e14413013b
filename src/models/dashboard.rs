// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Deserialize;

// 1. Cards do topo (corretor)
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerStats {
    pub total_properties: u32,
    pub total_customers: u32,
    pub active_deals: u32,
    pub monthly_brokerage: String,
    pub total_brokerage: String,
}

// 2. Cards do topo (construtor)
#[derive(Debug, Clone, Deserialize)]
pub struct BuilderStats {
    pub total_projects: u32,
    pub total_plots: u32,
    pub sold_plots: u32,
    pub monthly_revenue: String,
    pub total_revenue: String,
}

// A API devolve o formato conforme o papel do usuário autenticado
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DashboardStats {
    Broker(BrokerStats),
    Builder(BuilderStats),
}

// 3. Série mensal de corretagem (GET /deals/analytics/brokerage)
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerageMonth {
    pub month: String,
    pub amount: Decimal,
    pub deals_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrokerageAnalytics {
    pub brokerage_data: Vec<BrokerageMonth>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_untagged_by_role() {
        let broker: DashboardStats = serde_json::from_str(
            r#"{"total_properties":4,"total_customers":9,"active_deals":2,
                "monthly_brokerage":"₹2.75 Lakh","total_brokerage":"₹12.40 Lakh"}"#,
        )
        .unwrap();
        assert!(matches!(broker, DashboardStats::Broker(_)));

        let builder: DashboardStats = serde_json::from_str(
            r#"{"total_projects":2,"total_plots":110,"sold_plots":64,
                "monthly_revenue":"₹36 Lakh","total_revenue":"₹1.90 Cr"}"#,
        )
        .unwrap();
        assert!(matches!(builder, DashboardStats::Builder(_)));
    }
}
