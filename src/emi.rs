//! Loan EMI (Equated Monthly Installment) arithmetic.
//!
//! Closed-form fixed-payment amortization, independent of the HTTP and
//! persistence layers.

/// Result of an EMI computation: the monthly installment and the total
/// amount repaid over the full tenure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiQuote {
    pub installment: f64,
    pub total: f64,
}

impl EmiQuote {
    pub const ZERO: EmiQuote = EmiQuote {
        installment: 0.0,
        total: 0.0,
    };

    /// Installment rounded to the nearest whole currency unit for display.
    pub fn installment_rounded(&self) -> i64 {
        self.installment.round() as i64
    }

    /// Total repayment rounded to the nearest whole currency unit.
    pub fn total_rounded(&self) -> i64 {
        self.total.round() as i64
    }
}

/// Computes the EMI for `principal` at `annual_rate_percent` over
/// `tenure_months`.
///
/// Nonsensical inputs (non-positive principal, negative rate, zero tenure,
/// non-finite values) yield a zero quote rather than an error; the portal
/// shows ₹0 instead of a failure. A zero rate is the removable singularity
/// of the closed form and amortizes the principal evenly.
pub fn calculate(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> EmiQuote {
    if !principal.is_finite() || !annual_rate_percent.is_finite() {
        return EmiQuote::ZERO;
    }
    if principal <= 0.0 || annual_rate_percent < 0.0 || tenure_months == 0 {
        return EmiQuote::ZERO;
    }

    let n = tenure_months as f64;
    if annual_rate_percent == 0.0 {
        return EmiQuote {
            installment: principal / n,
            total: principal,
        };
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let growth = (1.0 + monthly_rate).powf(n);
    let installment = principal * monthly_rate * growth / (growth - 1.0);

    EmiQuote {
        installment,
        total: installment * n,
    }
}
