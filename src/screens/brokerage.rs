// src/screens/brokerage.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::api::{DealFilter, DealsApi};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::dashboard::BrokerageMonth;
use crate::models::deal::Deal;
use crate::screens::state::Frame;
use crate::services::metrics::{average, best_by, growth_rate, sum_money};
use crate::services::store::CollectionStore;
use crate::session::Session;

// Tela de análise de corretagem: série mensal vinda da API de analytics +
// agregados derivados dos negócios carregados.
pub struct BrokerageScreen {
    session: Arc<Session>,
    deals: CollectionStore<DealsApi>,
    pub months: Vec<BrokerageMonth>,
    pub frame: Frame,
}

impl BrokerageScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            deals: CollectionStore::new(state.deals_api.clone()),
            months: Vec::new(),
            frame: Frame::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.frame.begin_load();
        let result = self.load_all().await;
        self.frame.finish_load(result);
    }

    async fn load_all(&mut self) -> Result<(), AppError> {
        self.session.require_role(UserRole::Broker)?;
        self.months = self.deals.api().brokerage_analytics().await?;
        self.deals.load(&DealFilter::default()).await?;
        Ok(())
    }

    fn amounts(&self) -> Vec<Decimal> {
        self.months.iter().map(|m| m.amount).collect()
    }

    pub fn total_earnings(&self) -> Decimal {
        self.amounts().iter().copied().sum()
    }

    pub fn average_monthly(&self) -> Decimal {
        average(&self.amounts())
    }

    /// Melhor mês da série; empate fica com o primeiro.
    pub fn best_month(&self) -> Option<&BrokerageMonth> {
        best_by(&self.months, |m| m.amount)
    }

    /// Crescimento entre o primeiro e o último mês, em percentual.
    pub fn growth_percent(&self) -> Decimal {
        growth_rate(&self.amounts()) * Decimal::from(100)
    }

    pub fn deals_count(&self) -> u32 {
        self.months.iter().map(|m| m.deals_count).sum()
    }

    /// Valor somado dos negócios ganhos (cards laterais da tela).
    pub fn won_deal_value(&self) -> Decimal {
        let won: Vec<&Deal> = self
            .deals
            .items()
            .iter()
            .filter(|d| d.status.is_won())
            .collect();
        sum_money(&won, |d| d.deal_value.as_str())
    }

    /// Participação de cada mês no total, para as barras do gráfico.
    pub fn share_of_best(&self, month: &BrokerageMonth) -> Decimal {
        let max = self
            .months
            .iter()
            .map(|m| m.amount)
            .max()
            .unwrap_or(Decimal::ZERO);
        if max.is_zero() {
            return Decimal::ZERO;
        }
        month.amount * Decimal::from(100) / max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<BrokerageMonth> {
        // A série de seis meses usada como fixture de demonstração
        [
            ("Jan", 125_000),
            ("Feb", 180_000),
            ("Mar", 220_000),
            ("Apr", 190_000),
            ("May", 250_000),
            ("Jun", 275_000),
        ]
        .into_iter()
        .map(|(month, amount)| BrokerageMonth {
            month: month.to_string(),
            amount: Decimal::from(amount),
            deals_count: 2,
        })
        .collect()
    }

    #[test]
    fn test_series_aggregates() {
        let months = months();
        let amounts: Vec<Decimal> = months.iter().map(|m| m.amount).collect();

        let total: Decimal = amounts.iter().copied().sum();
        assert_eq!(total, Decimal::from(1_240_000));

        let best = best_by(&months, |m| m.amount).unwrap();
        assert_eq!(best.month, "Jun");

        // (275000 − 125000) / 125000 = 1.2
        assert_eq!(growth_rate(&amounts), Decimal::new(12, 1));
    }
}
