//! Monthly payroll computation.
//!
//! Every component derives from the basic salary alone, so the computation
//! is a pure function: the same basic salary and period always produce the
//! same line. All money flows through `Decimal`; no floats.

use rust_decimal::Decimal;

use crate::payroll::errors::PayrollError;
use crate::payroll::models::Allowances;
use crate::payroll::models::Deductions;
use crate::payroll::models::PayPeriod;
use crate::payroll::models::PayrollLine;

/// House rent allowance rate, 40% of basic.
const HOUSE_RENT_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);
/// Dearness allowance rate, 10% of basic.
const DEARNESS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// Special allowance rate, 5% of basic.
const SPECIAL_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// Fixed monthly conveyance allowance.
const CONVEYANCE: Decimal = Decimal::from_parts(1600, 0, 0, false, 0);
/// Fixed monthly medical allowance.
const MEDICAL: Decimal = Decimal::from_parts(1250, 0, 0, false, 0);

/// Provident fund rate, 12% of basic.
const PROVIDENT_FUND_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);
/// State insurance rate, 0.75% of basic plus house rent plus dearness.
const STATE_INSURANCE_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);
/// Fixed monthly professional tax.
const PROFESSIONAL_TAX: Decimal = Decimal::from_parts(200, 0, 0, false, 0);
/// Fixed monthly insurance premium.
const INSURANCE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

// Annual income tax slabs and the cumulative tax owed at each lower bound.
const SLAB_EXEMPT_CEILING: Decimal = Decimal::from_parts(250_000, 0, 0, false, 0);
const SLAB_LOWER_CEILING: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);
const SLAB_MIDDLE_CEILING: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
const SLAB_LOWER_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
const SLAB_MIDDLE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
const SLAB_UPPER_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
const SLAB_MIDDLE_BASE: Decimal = Decimal::from_parts(12_500, 0, 0, false, 0);
const SLAB_UPPER_BASE: Decimal = Decimal::from_parts(112_500, 0, 0, false, 0);

/// Compute one employee's payroll line for a period.
///
/// # Errors
/// * `NegativeBasicSalary` - `basic_salary` is below zero
pub fn compute(
    employee_id: i64,
    basic_salary: Decimal,
    period: PayPeriod,
) -> Result<PayrollLine, PayrollError> {
    if basic_salary < Decimal::ZERO {
        return Err(PayrollError::NegativeBasicSalary);
    }

    let allowances = Allowances {
        house_rent: basic_salary * HOUSE_RENT_RATE,
        dearness: basic_salary * DEARNESS_RATE,
        conveyance: CONVEYANCE,
        medical: MEDICAL,
        special: basic_salary * SPECIAL_RATE,
    };

    // Both state insurance and income tax are assessed on basic plus the
    // salary-linked house rent and dearness components, not the full gross.
    let taxable_monthly = basic_salary + allowances.house_rent + allowances.dearness;

    let deductions = Deductions {
        provident_fund: basic_salary * PROVIDENT_FUND_RATE,
        state_insurance: taxable_monthly * STATE_INSURANCE_RATE,
        professional_tax: PROFESSIONAL_TAX,
        income_tax: monthly_income_tax(taxable_monthly),
        insurance: INSURANCE,
    };

    let gross_salary = basic_salary + allowances.total();
    let total_deductions = deductions.total();

    Ok(PayrollLine {
        employee_id,
        basic_salary,
        allowances,
        deductions,
        gross_salary,
        total_deductions,
        net_salary: gross_salary - total_deductions,
        period,
    })
}

/// Monthly income tax for a monthly taxable amount.
///
/// The amount is annualized, run through the slab schedule, and the annual
/// tax is spread evenly back over twelve months.
pub fn monthly_income_tax(taxable_monthly: Decimal) -> Decimal {
    let annual = taxable_monthly * MONTHS_PER_YEAR;
    if annual <= SLAB_EXEMPT_CEILING {
        return Decimal::ZERO;
    }

    let annual_tax = if annual <= SLAB_LOWER_CEILING {
        (annual - SLAB_EXEMPT_CEILING) * SLAB_LOWER_RATE
    } else if annual <= SLAB_MIDDLE_CEILING {
        SLAB_MIDDLE_BASE + (annual - SLAB_LOWER_CEILING) * SLAB_MIDDLE_RATE
    } else {
        SLAB_UPPER_BASE + (annual - SLAB_MIDDLE_CEILING) * SLAB_UPPER_RATE
    };

    annual_tax / MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> PayPeriod {
        PayPeriod::new(3, 2024).unwrap()
    }

    #[test]
    fn test_compute_basic_50000() {
        let line = compute(7, Decimal::from(50_000), period()).unwrap();

        assert_eq!(line.allowances.house_rent, Decimal::from(20_000));
        assert_eq!(line.allowances.dearness, Decimal::from(5_000));
        assert_eq!(line.allowances.conveyance, Decimal::from(1_600));
        assert_eq!(line.allowances.medical, Decimal::from(1_250));
        assert_eq!(line.allowances.special, Decimal::from(2_500));
        assert_eq!(line.gross_salary, Decimal::from(80_350));

        assert_eq!(line.deductions.provident_fund, Decimal::from(6_000));
        assert_eq!(line.deductions.state_insurance, Decimal::new(56250, 2));
        assert_eq!(line.deductions.professional_tax, Decimal::from(200));
        assert_eq!(line.deductions.insurance, Decimal::from(500));
        // Annual taxable 900000 lands in the 20% slab
        assert_eq!(
            line.deductions.income_tax,
            Decimal::from(92_500) / Decimal::from(12)
        );

        assert_eq!(line.total_deductions, line.deductions.total());
        assert_eq!(line.net_salary, line.gross_salary - line.total_deductions);
        assert_eq!(line.employee_id, 7);
        assert_eq!(line.period, period());
    }

    #[test]
    fn test_income_tax_exempt_slab() {
        // Annual 240000, under the exemption ceiling
        assert_eq!(monthly_income_tax(Decimal::from(20_000)), Decimal::ZERO);
        assert_eq!(monthly_income_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_income_tax_slab_boundaries() {
        // Annual exactly 250000 is still exempt
        let at_exempt = Decimal::from(250_000) / Decimal::from(12);
        assert_eq!(monthly_income_tax(at_exempt), Decimal::ZERO);

        // Annual 300000: (300000 - 250000) * 5% / 12
        assert_eq!(
            monthly_income_tax(Decimal::from(25_000)),
            Decimal::from(2_500) / Decimal::from(12)
        );

        // Annual 600000: (12500 + 100000 * 20%) / 12
        assert_eq!(
            monthly_income_tax(Decimal::from(50_000)),
            Decimal::from(32_500) / Decimal::from(12)
        );

        // Annual 1200000: (112500 + 200000 * 30%) / 12
        assert_eq!(
            monthly_income_tax(Decimal::from(100_000)),
            Decimal::from(172_500) / Decimal::from(12)
        );
    }

    #[test]
    fn test_zero_basic_keeps_fixed_components() {
        let line = compute(1, Decimal::ZERO, period()).unwrap();

        // Only the fixed conveyance and medical allowances remain
        assert_eq!(line.gross_salary, Decimal::from(2_850));
        // Only the fixed professional tax and insurance remain
        assert_eq!(line.total_deductions, Decimal::from(700));
        assert_eq!(line.net_salary, Decimal::from(2_150));
    }

    #[test]
    fn test_negative_basic_rejected() {
        let result = compute(1, Decimal::from(-1), period());
        assert_eq!(result, Err(PayrollError::NegativeBasicSalary));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let first = compute(3, Decimal::new(42_750_50, 2), period()).unwrap();
        let second = compute(3, Decimal::new(42_750_50, 2), period()).unwrap();
        assert_eq!(first, second);
    }
}
