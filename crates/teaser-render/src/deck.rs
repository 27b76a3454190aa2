//! Markdown deck writer: the fixed three-slide presentation

use crate::RenderError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use teaser_domain::AnalysisResult;
use tracing::info;

const FOOTER: &str = "Strictly Private & Confidential";

/// Write the deck for one company.
pub fn write_deck(
    result: &AnalysisResult,
    images: &[Option<PathBuf>],
    path: &Path,
) -> Result<(), RenderError> {
    std::fs::write(path, deck_markdown(result, images))?;
    info!("deck saved: {}", path.display());
    Ok(())
}

/// Render the three slides as Markdown.
pub fn deck_markdown(result: &AnalysisResult, images: &[Option<PathBuf>]) -> String {
    let mut out = String::new();

    // Slide 1: investment theme
    out.push_str(&format!("# {}\n\n", result.code_name));
    out.push_str(&format!("## {}\n\n", result.slide_1.headline));
    if !result.slide_1.sub_headline.is_empty() {
        out.push_str(&format!("*{}*\n\n", result.slide_1.sub_headline));
    }
    for bullet in &result.slide_1.bullets {
        out.push_str(&format!("- {}\n", bullet));
    }
    push_image(&mut out, images, 0);
    out.push_str("\n---\n\n");

    // Slide 2: financial snapshot
    out.push_str("## Financial Snapshot\n\n");
    if !result.slide_2.metrics.is_empty() {
        out.push_str("| Metric | Value |\n|---|---|\n");
        for (name, value) in &result.slide_2.metrics {
            out.push_str(&format!("| {} | {} |\n", name, metric_display(value)));
        }
        out.push('\n');
    }
    let chart = &result.slide_2.chart_data;
    if !chart.years.is_empty() {
        out.push_str("| Year | Revenue |\n|---|---|\n");
        for (year, revenue) in chart.years.iter().zip(&chart.revenue_values) {
            out.push_str(&format!("| {} | {} |\n", year, revenue));
        }
        if !chart.data_quality.is_empty() {
            out.push_str(&format!("\nData quality: {}\n", chart.data_quality));
        }
        out.push('\n');
    }
    push_image(&mut out, images, 1);
    out.push_str("\n---\n\n");

    // Slide 3: investment hooks
    out.push_str("## Investment Hooks\n\n");
    for hook in &result.slide_3.hooks {
        out.push_str(&format!("- {}\n", hook));
    }
    push_image(&mut out, images, 2);
    out.push_str(&format!("\n---\n\n{}\n", FOOTER));

    out
}

fn push_image(out: &mut String, images: &[Option<PathBuf>], index: usize) {
    if let Some(Some(path)) = images.get(index) {
        out.push_str(&format!("\n![slide visual]({})\n", path.display()));
    }
}

/// Metric values arrive as a mix of strings and numbers.
fn metric_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use teaser_domain::{ChartData, SlideOne, SlideThree, SlideTwo};

    fn result() -> AnalysisResult {
        let metrics = match json!({"Revenue (Latest)": "120 Cr", "EBITDA": 22}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        AnalysisResult {
            code_name: "Project X".to_string(),
            sector: "Pharma".to_string(),
            slide_1: SlideOne {
                headline: "Niche API platform".to_string(),
                sub_headline: "A profitable specialty maker".to_string(),
                bullets: vec!["WHO-GMP certified".to_string()],
            },
            slide_2: SlideTwo {
                metrics,
                chart_data: ChartData {
                    years: vec!["2023".to_string(), "2024".to_string()],
                    revenue_values: vec![100.0, 120.0],
                    data_quality: "Actuals".to_string(),
                },
            },
            slide_3: SlideThree {
                hooks: vec!["Sticky customer base".to_string()],
            },
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn test_deck_contains_all_slides() {
        let deck = deck_markdown(&result(), &[]);
        assert!(deck.contains("# Project X"));
        assert!(deck.contains("## Niche API platform"));
        assert!(deck.contains("- WHO-GMP certified"));
        assert!(deck.contains("| Revenue (Latest) | 120 Cr |"));
        assert!(deck.contains("| EBITDA | 22 |"));
        assert!(deck.contains("| 2024 | 120 |"));
        assert!(deck.contains("Data quality: Actuals"));
        assert!(deck.contains("- Sticky customer base"));
        assert!(deck.contains(FOOTER));
    }

    #[test]
    fn test_images_referenced_when_present() {
        let images = vec![
            Some(PathBuf::from("temp_Acme_0.jpg")),
            None,
            Some(PathBuf::from("temp_Acme_2.jpg")),
        ];
        let deck = deck_markdown(&result(), &images);
        assert!(deck.contains("temp_Acme_0.jpg"));
        assert!(deck.contains("temp_Acme_2.jpg"));
        assert_eq!(deck.matches("![slide visual]").count(), 2);
    }

    #[test]
    fn test_empty_result_still_renders() {
        let deck = deck_markdown(&AnalysisResult::default(), &[]);
        assert!(deck.contains("Financial Snapshot"));
        assert!(deck.contains(FOOTER));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output_Acme.md");
        write_deck(&result(), &[], &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Project X"));
    }
}
