//! Generation prompt engineering

use teaser_domain::Sector;

/// Builds the analyst task prompt for one company.
pub struct PromptBuilder {
    company_name: String,
    sector: Sector,
}

impl PromptBuilder {
    /// Create a prompt builder for a company and its detected sector.
    pub fn new(company_name: impl Into<String>, sector: Sector) -> Self {
        Self {
            company_name: company_name.into(),
            sector,
        }
    }

    /// Build the complete task prompt.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("Strict M&A Analyst Task.\n");
        prompt.push_str(&format!(
            "INPUT: Name: \"{}\" (FORBIDDEN). Sector: {}.\n\n",
            self.company_name, self.sector
        ));

        prompt.push_str("RULES:\n");
        prompt.push_str(&format!(
            "1. ANONYMIZE: Replace \"{}\" with \"Project X\".\n",
            self.company_name
        ));
        prompt.push_str(
            "2. CITATIONS: Use [ID]. In 'source_display', NEVER use filenames. Use \"Internal Doc\".\n",
        );
        prompt.push_str("3. FINANCIALS: Extract 'Revenue', 'EBITDA' for latest available year.\n");
        prompt.push_str("4. OUTPUT JSON:\n");
        prompt.push_str(&format!(
            "{}\n",
            OUTPUT_TEMPLATE.replace("{sector}", self.sector.as_str())
        ));

        prompt
    }
}

const OUTPUT_TEMPLATE: &str = r#"{
    "code_name": "Project X",
    "sector": "{sector}",
    "slide_1": { "headline": "Key Investment Theme", "sub_headline": "One sentence summary", "bullets": ["Highlight 1", "Highlight 2 (Include Certifications)"] },
    "slide_2": { "metrics": { "Revenue (Latest)": "100 Mn", "EBITDA": "20 Mn" }, "chart_data": { "years": ["2022","2023","2024"], "revenue_values": [100, 120, 150], "data_quality": "Actuals" } },
    "slide_3": { "hooks": ["Strong Growth", "Market Leader", "High Margins", "Global Reach"] },
    "citations": [ { "id": "...", "claim": "...", "source_display": "Internal Doc" } ],
    "visual_keywords": ["keyword for slide 1", "keyword for slide 2", "keyword for slide 3"]
}"#;
