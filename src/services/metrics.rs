// src/services/metrics.rs

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

use crate::services::currency::parse_money;

// Agregações puras para os cards do dashboard e as telas de análise.
// Nenhuma divisão por zero escapa para a interface: os casos degenerados
// viram 0, nunca NaN/infinito.

/// Contagem por chave (tipicamente o status). A soma das contagens é
/// sempre o tamanho da coleção.
pub fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Soma de um campo monetário formatado, via parse canônico. Valores fora
/// do formato contam como zero em vez de derrubar o agregado.
pub fn sum_money<T, F>(items: &[T], amount: F) -> Decimal
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .map(|item| parse_money(amount(item)).unwrap_or(Decimal::ZERO))
        .sum()
}

/// Fração do total (0 quando o total é 0).
pub fn percentage_of_total(part: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part as u64) * Decimal::from(100) / Decimal::from(total as u64)
}

/// Taxa de crescimento entre o primeiro e o último ponto de uma série
/// ordenada no tempo: (último − primeiro) / primeiro. Série curta ou
/// primeiro ponto zero → 0.
pub fn growth_rate(series: &[Decimal]) -> Decimal {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Decimal::ZERO;
    };
    if series.len() < 2 || first.is_zero() {
        return Decimal::ZERO;
    }
    (*last - *first) / *first
}

/// Maior elemento segundo a chave; empate fica com a primeira ocorrência.
pub fn best_by<'a, T, K, F>(items: &'a [T], key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<&T> = None;
    for item in items {
        match best {
            // Apenas estritamente maior substitui — primeira ocorrência vence
            Some(current) if key(item) > key(current) => best = Some(item),
            Some(_) => {}
            None => best = Some(item),
        }
    }
    best
}

/// Média simples da série (0 para série vazia).
pub fn average(series: &[Decimal]) -> Decimal {
    if series.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = series.iter().copied().sum();
    total / Decimal::from(series.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_sums_to_len() {
        let statuses = ["Closed", "Agreement", "Closed", "Registry", "Closed"];
        let counts = count_by(&statuses, |s| *s);
        assert_eq!(counts["Closed"], 3);
        assert_eq!(counts.values().sum::<usize>(), statuses.len());
    }

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage_of_total(3, 0), Decimal::ZERO);
        assert_eq!(percentage_of_total(1, 4), Decimal::from(25));
    }

    // Cenário: [100, 150] cresce 0.5; primeiro ponto 0 devolve 0, não ∞.
    #[test]
    fn test_growth_rate() {
        let series = [Decimal::from(100), Decimal::from(150)];
        assert_eq!(growth_rate(&series), Decimal::new(5, 1));

        let from_zero = [Decimal::ZERO, Decimal::from(150)];
        assert_eq!(growth_rate(&from_zero), Decimal::ZERO);

        assert_eq!(growth_rate(&[]), Decimal::ZERO);
        assert_eq!(growth_rate(&[Decimal::from(100)]), Decimal::ZERO);
    }

    #[test]
    fn test_best_by_first_occurrence_wins() {
        let months = [("Jan", 250_000), ("May", 275_000), ("Jun", 275_000)];
        let best = best_by(&months, |(_, amount)| *amount).unwrap();
        assert_eq!(best.0, "May");
    }

    #[test]
    fn test_sum_money_ignores_unparseable() {
        let amounts = ["₹2.5 Lakh", "a combinar", "₹50,000"];
        assert_eq!(sum_money(&amounts, |a| a), Decimal::from(300_000));
    }

    #[test]
    fn test_average() {
        let series = [Decimal::from(100), Decimal::from(200)];
        assert_eq!(average(&series), Decimal::from(150));
        assert_eq!(average(&[]), Decimal::ZERO);
    }
}
