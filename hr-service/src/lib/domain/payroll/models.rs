use rust_decimal::Decimal;
use serde::Serialize;

use crate::payroll::errors::PayrollError;

/// Calendar month a payroll line is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayPeriod {
    pub month: u32,
    pub year: i32,
}

impl PayPeriod {
    /// # Errors
    /// * `InvalidMonth` - `month` is outside 1..=12
    pub fn new(month: u32, year: i32) -> Result<Self, PayrollError> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::InvalidMonth { month });
        }
        Ok(Self { month, year })
    }
}

/// Monthly allowances derived from the basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowances {
    pub house_rent: Decimal,
    pub dearness: Decimal,
    pub conveyance: Decimal,
    pub medical: Decimal,
    pub special: Decimal,
}

impl Allowances {
    pub fn total(&self) -> Decimal {
        self.house_rent + self.dearness + self.conveyance + self.medical + self.special
    }
}

/// Monthly deductions withheld from the gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    pub provident_fund: Decimal,
    pub state_insurance: Decimal,
    pub professional_tax: Decimal,
    pub income_tax: Decimal,
    pub insurance: Decimal,
}

impl Deductions {
    pub fn total(&self) -> Decimal {
        self.provident_fund
            + self.state_insurance
            + self.professional_tax
            + self.income_tax
            + self.insurance
    }
}

/// One employee's computed payroll for a period.
///
/// `gross_salary`, `total_deductions`, and `net_salary` are carried
/// precomputed so the line serializes without the reader re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollLine {
    pub employee_id: i64,
    pub basic_salary: Decimal,
    pub allowances: Allowances,
    pub deductions: Deductions,
    pub gross_salary: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub period: PayPeriod,
}
