//! Loan amortization.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MortgageError {
    #[error("enter an interest rate above zero")]
    InvalidRate,
}

/// Standard amortization monthly payment. Zero and negative rates are
/// rejected rather than computed as the limiting principal-over-n case.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<f64, MortgageError> {
    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    if monthly_rate <= 0.0 {
        return Err(MortgageError::InvalidRate);
    }
    let periods = (term_years * 12) as i32;
    let growth = (1.0 + monthly_rate).powi(periods);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_standard_amortization_table() {
        let payment = monthly_payment(100_000.0, 7.0, 20).expect("positive rate");
        assert!((payment - 775.30).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(
            monthly_payment(100_000.0, 0.0, 20),
            Err(MortgageError::InvalidRate)
        );
        assert_eq!(
            monthly_payment(1.0, 0.0, 1),
            Err(MortgageError::InvalidRate)
        );
    }

    #[test]
    fn negative_rate_is_rejected() {
        assert_eq!(
            monthly_payment(100_000.0, -1.0, 20),
            Err(MortgageError::InvalidRate)
        );
    }
}
