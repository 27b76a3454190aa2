//! Cost accounting for generation calls
//!
//! The ledger is an explicit accumulator: the batch driver creates a fresh
//! ledger per company and sums them itself, so no spend state crosses company
//! boundaries.

/// Price per million input tokens, USD.
pub const USD_PER_MILLION_INPUT: f64 = 0.05;

/// Price per million output tokens, USD.
pub const USD_PER_MILLION_OUTPUT: f64 = 0.20;

/// Conversion rate applied to reported costs.
pub const INR_PER_USD: f64 = 84.0;

/// Accumulated generation spend for one company.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostLedger {
    total_inr: f64,
}

impl CostLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one generation attempt.
    pub fn record(&mut self, input_tokens: u64, output_tokens: u64) {
        let usd = (input_tokens as f64 / 1e6) * USD_PER_MILLION_INPUT
            + (output_tokens as f64 / 1e6) * USD_PER_MILLION_OUTPUT;
        self.total_inr += usd * INR_PER_USD;
    }

    /// Fold another ledger into this one (batch totals).
    pub fn merge(&mut self, other: &CostLedger) {
        self.total_inr += other.total_inr;
    }

    /// Total spend in INR.
    pub fn total_inr(&self) -> f64 {
        self.total_inr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        assert_eq!(CostLedger::new().total_inr(), 0.0);
    }

    #[test]
    fn test_record_accumulates() {
        let mut ledger = CostLedger::new();
        ledger.record(1_000_000, 0);
        let one_million_input = USD_PER_MILLION_INPUT * INR_PER_USD;
        assert!((ledger.total_inr() - one_million_input).abs() < 1e-9);

        ledger.record(0, 1_000_000);
        let expected = one_million_input + USD_PER_MILLION_OUTPUT * INR_PER_USD;
        assert!((ledger.total_inr() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_merge_sums_companies() {
        let mut a = CostLedger::new();
        a.record(500_000, 100_000);
        let mut b = CostLedger::new();
        b.record(250_000, 50_000);

        let mut total = CostLedger::new();
        total.merge(&a);
        total.merge(&b);
        assert!((total.total_inr() - (a.total_inr() + b.total_inr())).abs() < 1e-9);
    }
}
