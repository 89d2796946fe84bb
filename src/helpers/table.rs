use crate::structs::distribution::Distribution;
use crate::structs::respondent::Respondent;

/// Plain terminal tables standing in for the web UI's result list and
/// drill-down modal.
pub struct TablePrinter;

impl TablePrinter {
    pub fn print_distribution(title: &str, rows: &[Distribution]) {
        println!("\n📊 {}", title);
        if rows.is_empty() {
            println!("  (no data)");
            return;
        }

        let label_width = rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(8);

        for row in rows {
            let pad = label_width.saturating_sub(row.label.chars().count());
            println!(
                "  {}{}  {:>8}  {:>7.2}%  {}",
                row.label,
                " ".repeat(pad),
                row.value,
                row.percentage,
                Self::bar(row.percentage),
            );
        }
    }

    pub fn print_respondents(respondents: &[Respondent], limit: usize) {
        if respondents.is_empty() {
            println!("  (no respondents)");
            return;
        }

        println!("  {:<16} {:>7}  {:<8} {:<10} {:<12}", "user_id", "score", "gender", "age_group", "region");
        for respondent in respondents.iter().take(limit) {
            let demo = &respondent.demographic_info;
            println!(
                "  {:<16} {:>7.3}  {:<8} {:<10} {:<12}",
                respondent.user_id,
                respondent.score,
                demo.gender.as_deref().unwrap_or("-"),
                demo.age_group.as_deref().unwrap_or("-"),
                demo.region.as_deref().unwrap_or("-"),
            );
        }
        if respondents.len() > limit {
            println!("  ... and {} more", respondents.len() - limit);
        }
    }

    fn bar(percentage: f64) -> String {
        let blocks = (percentage / 2.5).round().max(0.0) as usize;
        "█".repeat(blocks.min(40))
    }
}
