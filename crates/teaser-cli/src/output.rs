//! Batch summary formatting.

use crate::company::CompanyOutcome;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Render the end-of-run summary table.
pub fn batch_summary(outcomes: &[CompanyOutcome], color_enabled: bool) -> String {
    if !color_enabled {
        colored::control::set_override(false);
    }

    let mut builder = Builder::default();
    builder.push_record(["Status", "Company", "Cost (INR)"]);
    let mut total_cost = 0.0;
    for outcome in outcomes {
        let status = if outcome.success { "ok" } else { "failed" };
        let cost = format!("{:.2}", outcome.cost_inr);
        builder.push_record([status, outcome.company.as_str(), cost.as_str()]);
        total_cost += outcome.cost_inr;
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let successes = outcomes.iter().filter(|o| o.success).count();
    let failures = outcomes.len() - successes;
    let tally = format!("{} succeeded, {} failed", successes, failures);
    let tally = if failures == 0 {
        tally.green().to_string()
    } else {
        tally.yellow().to_string()
    };

    format!(
        "BATCH PROCESSING SUMMARY\n{}\n{}\nTOTAL RUN COST: INR {:.2}\n",
        table, tally, total_cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(company: &str, success: bool, cost_inr: f64) -> CompanyOutcome {
        CompanyOutcome {
            company: company.to_string(),
            success,
            cost_inr,
        }
    }

    #[test]
    fn test_summary_lists_companies_and_total() {
        let outcomes = vec![
            outcome("Acme", true, 12.5),
            outcome("Centum", false, 3.25),
        ];
        let summary = batch_summary(&outcomes, false);

        assert!(summary.contains("Acme"));
        assert!(summary.contains("Centum"));
        assert!(summary.contains("12.50"));
        assert!(summary.contains("1 succeeded, 1 failed"));
        assert!(summary.contains("TOTAL RUN COST: INR 15.75"));
    }

    #[test]
    fn test_empty_batch() {
        let summary = batch_summary(&[], false);
        assert!(summary.contains("TOTAL RUN COST: INR 0.00"));
    }
}
