//! Console rendering of a prediction.

use crate::predictor::{ConfidenceBand, Prediction};

const CONFIDENCE_BAR_WIDTH: usize = 40;
const CHART_BAR_WIDTH: usize = 36;

/// Everything shown for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub prediction: Prediction,
    pub top_features: Vec<(&'a str, f64)>,
    pub explanations: Vec<&'static str>,
    pub balance: f64,
}

/// Plain-text renderer with optional ANSI colors.
pub struct ConsoleRenderer {
    pub use_color: bool,
}

impl ConsoleRenderer {
    /// `use_color` toggles ANSI escape codes.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn band_color(band: ConfidenceBand) -> &'static str {
        match band {
            ConfidenceBand::High => "\x1b[32m",     // green
            ConfidenceBand::Moderate => "\x1b[36m", // cyan
            ConfidenceBand::Low => "\x1b[33m",      // yellow
        }
    }

    /// Renders the full report: result, insights, explanations, comparison.
    pub fn render(&self, report: &Report<'_>) -> String {
        let mut output = String::new();
        self.render_result(&mut output, &report.prediction);
        self.render_insights(&mut output, &report.top_features);
        self.render_explanations(&mut output, &report.explanations);
        self.render_comparison(&mut output, report.balance);
        output
    }

    fn heading(&self, output: &mut String, title: &str) {
        output.push_str(&self.paint("\x1b[1m", title));
        output.push('\n');
    }

    fn render_result(&self, output: &mut String, prediction: &Prediction) {
        self.heading(output, "Prediction Result");
        let verdict = if prediction.subscribes() {
            self.paint("\x1b[1;32m", "Likely to Subscribe")
        } else {
            self.paint("\x1b[1;31m", "Unlikely to Subscribe")
        };
        output.push_str(&format!("  {verdict}\n"));
        output.push_str(&format!(
            "  Confidence: {:.2}%\n\n",
            prediction.probability * 100.0
        ));

        let band = prediction.band();
        let color = Self::band_color(band);
        output.push_str("  Subscription Confidence\n");
        output.push_str(&format!(
            "  [{}] {:>3}%\n",
            self.paint(color, &confidence_bar(prediction.confidence)),
            prediction.confidence
        ));
        output.push_str(&format!("  {}\n\n", self.paint(color, band.advice())));
    }

    fn render_insights(&self, output: &mut String, top: &[(&str, f64)]) {
        self.heading(output, "Model Insights");
        output.push_str("  Top Influential Features\n");
        let label_width = top.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let max = top.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        for (name, importance) in top {
            output.push_str(&format!(
                "  {name:>label_width$} | {} {importance:.4}\n",
                self.paint("\x1b[34m", &chart_bar(*importance, max)),
            ));
        }
        output.push_str(&format!("  {:>label_width$}   Importance Score\n\n", ""));
    }

    fn render_explanations(&self, output: &mut String, explanations: &[&str]) {
        self.heading(output, "Explanation");
        for reason in explanations {
            output.push_str(&format!("  • {reason}\n"));
        }
        output.push('\n');
    }

    fn render_comparison(&self, output: &mut String, balance: f64) {
        self.heading(output, "Customer Comparison");
        for line in comparison_lines(balance) {
            output.push_str(&format!("  {line}\n"));
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// The static comparison block, headed by its title line.
pub fn comparison_lines(balance: f64) -> [String; 4] {
    [
        "Compared to average bank customer:".to_string(),
        format!("• Account balance entered: ${}", format_amount(balance)),
        "• Optimal campaign success occurs within ≤ 2 contacts".to_string(),
        "• Loan-free profiles show higher subscription probability".to_string(),
    ]
}

fn confidence_bar(confidence: u8) -> String {
    let filled = usize::from(confidence.min(100)) * CONFIDENCE_BAR_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(CONFIDENCE_BAR_WIDTH - filled)
    )
}

fn chart_bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * CHART_BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.clamp(1, CHART_BAR_WIDTH))
}

/// Whole-unit amount with thousands separators, e.g. `1,234,568`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
