// src/services/calculators.rs

use rust_decimal::Decimal;

// Calculadoras financeiras das ferramentas do corretor. Aritmética pura em
// Decimal; as alíquotas são a tabela aproximada de Maharashtra.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    Feet,
    Meters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampPropertyType {
    Residential,
    Commercial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StampDuty {
    pub stamp_duty: Decimal,
    pub registration_fee: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appreciation {
    pub future_value: Decimal,
    pub total_appreciation: Decimal,
}

/// Área do lote em pés quadrados (1 m² = 10,764 sq ft).
pub fn plot_area(length: Decimal, width: Decimal, unit: AreaUnit) -> Decimal {
    let area = length * width;
    match unit {
        AreaUnit::Feet => area,
        AreaUnit::Meters => area * Decimal::new(10_764, 3),
    }
}

/// Imposto de transmissão: 5% residencial / 6% comercial + 1% de registro.
pub fn stamp_duty(value: Decimal, kind: StampPropertyType) -> StampDuty {
    let rate = match kind {
        StampPropertyType::Residential => Decimal::new(5, 2),
        StampPropertyType::Commercial => Decimal::new(6, 2),
    };
    let stamp = value * rate;
    let registration = value * Decimal::new(1, 2);
    StampDuty {
        stamp_duty: stamp,
        registration_fee: registration,
        total: stamp + registration,
    }
}

/// Corretagem simples: valor × percentual / 100.
pub fn brokerage(value: Decimal, percent: Decimal) -> Decimal {
    value * percent / Decimal::from(100)
}

/// Valorização composta ano a ano. Laço explícito em vez de potência: o
/// número de anos é pequeno e Decimal não expõe powi sem feature extra.
pub fn appreciation(current: Decimal, rate_percent: Decimal, years: u32) -> Appreciation {
    let factor = Decimal::ONE + rate_percent / Decimal::from(100);
    let mut future = current;
    for _ in 0..years {
        future *= factor;
    }
    Appreciation {
        future_value: future,
        total_appreciation: future - current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_converts_meters() {
        let in_feet = plot_area(Decimal::from(40), Decimal::from(60), AreaUnit::Feet);
        assert_eq!(in_feet, Decimal::from(2_400));

        let in_meters = plot_area(Decimal::from(10), Decimal::from(10), AreaUnit::Meters);
        assert_eq!(in_meters, Decimal::new(1_076_400, 3));
    }

    #[test]
    fn test_stamp_duty_rates() {
        let value = Decimal::from(5_000_000);

        let residential = stamp_duty(value, StampPropertyType::Residential);
        assert_eq!(residential.stamp_duty, Decimal::from(250_000));
        assert_eq!(residential.registration_fee, Decimal::from(50_000));
        assert_eq!(residential.total, Decimal::from(300_000));

        let commercial = stamp_duty(value, StampPropertyType::Commercial);
        assert_eq!(commercial.stamp_duty, Decimal::from(300_000));
    }

    #[test]
    fn test_brokerage_percent() {
        assert_eq!(
            brokerage(Decimal::from(5_000_000), Decimal::from(2)),
            Decimal::from(100_000)
        );
    }

    #[test]
    fn test_appreciation_compounds() {
        let result = appreciation(Decimal::from(1_000_000), Decimal::from(10), 2);
        assert_eq!(result.future_value, Decimal::from(1_210_000));
        assert_eq!(result.total_appreciation, Decimal::from(210_000));
    }
}
