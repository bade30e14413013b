// src/services/export.rs

use crate::common::error::AppError;
use crate::models::customer::Customer;
use crate::models::deal::Deal;

// Exportação CSV gerada no cliente: uma entidade por linha, sem cabeçalho,
// nome de arquivo fixo por recurso.
pub struct CsvExport {
    pub filename: &'static str,
    pub content: String,
}

impl CsvExport {
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

pub fn customers_csv(customers: &[Customer]) -> Result<CsvExport, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for customer in customers {
        writer.write_record([
            customer.name.as_str(),
            customer.phone.as_str(),
            customer.email.as_deref().unwrap_or(""),
            customer.budget.as_str(),
            customer.status.as_str(),
            customer.interest.as_str(),
            customer.notes.as_deref().unwrap_or(""),
            &customer.created_at.to_rfc3339(),
        ])?;
    }

    finish(writer, "customers.csv")
}

pub fn deals_csv(deals: &[Deal]) -> Result<CsvExport, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for deal in deals {
        writer.write_record([
            deal.property_title.as_str(),
            deal.customer_name.as_str(),
            deal.status.as_str(),
            deal.deal_value.as_str(),
            deal.brokerage_amount.as_str(),
            &deal.start_date.to_rfc3339(),
            &deal
                .close_date
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
            deal.notes.as_deref().unwrap_or(""),
        ])?;
    }

    finish(writer, "deals.csv")
}

fn finish(writer: csv::Writer<Vec<u8>>, filename: &'static str) -> Result<CsvExport, AppError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("flush do CSV falhou: {}", e)))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV não é UTF-8: {}", e)))?;

    Ok(CsvExport { filename, content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::CustomerStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn customer(name: &str, notes: Option<&str>) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "+91 98765 43210".to_string(),
            email: Some("amit@email.com".to_string()),
            budget: "₹80L - 1.2Cr".to_string(),
            interest: "3-4 BHK em Baner".to_string(),
            status: CustomerStatus::Interested,
            is_important: false,
            follow_up_date: None,
            notes: notes.map(|n| n.to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_one_line_per_customer_no_header() {
        let customers = vec![customer("Amit Sharma", None), customer("Sneha Reddy", None)];
        let export = customers_csv(&customers).unwrap();

        assert_eq!(export.filename, "customers.csv");
        assert_eq!(export.line_count(), 2);
        assert!(export.content.starts_with("Amit Sharma,"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let customers = vec![customer("Amit Sharma", Some("prefere Baner, perto do parque"))];
        let export = customers_csv(&customers).unwrap();
        assert!(export.content.contains("\"prefere Baner, perto do parque\""));
    }
}
