// src/services/currency.rs

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::common::error::AppError;

// Parse canônico dos valores monetários formatados que circulam pela API
// ("₹2.5 Cr", "₹25,000/month", "₹80 Lakh"). Tudo vira rupia em Decimal;
// formatar de volta reproduz um valor equivalente, não o texto idêntico.

const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;
const THOUSAND: u64 = 1_000;

pub fn parse_money(raw: &str) -> Result<Decimal, AppError> {
    let mut text = raw.trim();

    // Sufixo de aluguel não altera a grandeza
    for suffix in ["/month", "/Month", "/mo"] {
        if let Some(stripped) = text.strip_suffix(suffix) {
            text = stripped.trim();
            break;
        }
    }

    let text = text.trim_start_matches('₹').trim();

    let (digits, multiplier) = split_unit(text);
    let digits: String = digits
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if digits.is_empty() {
        return Err(AppError::MoneyParse(raw.to_string()));
    }

    let value =
        Decimal::from_str(&digits).map_err(|_| AppError::MoneyParse(raw.to_string()))?;
    Ok(value * Decimal::from(multiplier))
}

fn split_unit(text: &str) -> (&str, u64) {
    let lowered = text.to_lowercase();
    for (unit, factor) in [
        ("crore", CRORE),
        ("cr", CRORE),
        ("lakh", LAKH),
        ("lac", LAKH),
        ("l", LAKH),
        ("k", THOUSAND),
    ] {
        if lowered.ends_with(unit) {
            return (&text[..text.len() - unit.len()], factor);
        }
    }
    (text, 1)
}

/// Formatação de exibição: ≥ 1 Cr em crores, ≥ 1 Lakh em lakhs, senão
/// rupias com agrupamento indiano.
pub fn format_money(value: Decimal) -> String {
    let crore = Decimal::from(CRORE);
    let lakh = Decimal::from(LAKH);

    if value >= crore {
        format!("₹{:.2} Cr", value / crore)
    } else if value >= lakh {
        format!("₹{:.2} Lakh", value / lakh)
    } else {
        format!("₹{}", group_indian(value))
    }
}

// Agrupamento en-IN: os três últimos dígitos, depois grupos de dois
// (1234567 → 12,34,567).
fn group_indian(value: Decimal) -> String {
    let rounded = value.round();
    let raw = rounded.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_chars: Vec<char> = head.chars().collect();
    let mut index = head_chars.len();
    while index > 0 {
        let start = index.saturating_sub(2);
        groups.push(head_chars[start..index].iter().collect::<String>());
        index = start;
    }
    groups.reverse();

    format!("{}{},{}", sign, groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crore() {
        // "₹2.5 Cr" vale 25.000.000 de rupias
        assert_eq!(parse_money("₹2.5 Cr").unwrap(), Decimal::from(25_000_000));
    }

    #[test]
    fn test_parse_lakh_and_thousand() {
        assert_eq!(parse_money("₹2.5 Lakh").unwrap(), Decimal::from(250_000));
        assert_eq!(parse_money("₹80 Lakh").unwrap(), Decimal::from(8_000_000));
        assert_eq!(parse_money("45k").unwrap(), Decimal::from(45_000));
    }

    #[test]
    fn test_parse_rent_with_grouping() {
        assert_eq!(parse_money("₹25,000/month").unwrap(), Decimal::from(25_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_money("").is_err());
        assert!(parse_money("₹").is_err());
        assert!(parse_money("a combinar").is_err());
    }

    #[test]
    fn test_round_trip_preserves_value() {
        for raw in ["₹2.5 Cr", "₹2.75 Lakh", "₹25,000/month", "₹950"] {
            let value = parse_money(raw).unwrap();
            let formatted = format_money(value);
            assert_eq!(parse_money(&formatted).unwrap(), value, "entrada: {}", raw);
        }
    }

    #[test]
    fn test_format_thresholds() {
        assert_eq!(format_money(Decimal::from(25_000_000)), "₹2.50 Cr");
        assert_eq!(format_money(Decimal::from(275_000)), "₹2.75 Lakh");
        assert_eq!(format_money(Decimal::from(25_000)), "₹25,000");
        assert_eq!(format_money(Decimal::from(1_234_567_0)), "₹1.23 Cr");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian(Decimal::from(999)), "999");
        assert_eq!(group_indian(Decimal::from(25_000)), "25,000");
        assert_eq!(group_indian(Decimal::from(99_999)), "99,999");
    }
}
