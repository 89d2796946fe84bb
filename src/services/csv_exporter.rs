use std::fs;
use std::path::Path;
use crate::config::constants::CSV_BOM;
use crate::errors::{PanelError, PanelResult};
use crate::structs::respondent::Respondent;

/// CSV export of a (filtered) respondent list. Boundary format is fixed:
/// UTF-8 with BOM prefix, comma separators, `\n` line endings, header row
/// first, fields quoted when they contain comma, quote or newline, embedded
/// quotes doubled.
pub struct CsvExporter;

pub const CSV_HEADERS: &[&str] = &[
    "user_id",
    "score",
    "gender",
    "age_group",
    "region",
    "sub_region",
    "birth_year",
    "marital_status",
    "occupation",
    "smoker",
    "drinker",
    "has_vehicle",
    "survey_datetime",
];

impl CsvExporter {

    pub fn build_csv(records: &[&Respondent]) -> String {
        let mut out = String::from(CSV_BOM);
        out.push_str(&Self::build_row(CSV_HEADERS.iter().map(|h| h.to_string())));
        for record in records {
            out.push_str(&Self::build_row(Self::record_fields(record).into_iter()));
        }
        out
    }

    pub fn export_to_file(records: &[&Respondent], path: &Path) -> PanelResult<()> {
        let content = Self::build_csv(records);
        fs::write(path, content)
            .map_err(|e| PanelError::export_error(&path.display().to_string(), &e.to_string()))?;
        log::info!("Exported {} respondents to {}", records.len(), path.display());
        Ok(())
    }

    fn build_row(fields: impl Iterator<Item = String>) -> String {
        let mut row = fields
            .map(|field| Self::escape_field(&field))
            .collect::<Vec<String>>()
            .join(",");
        row.push('\n');
        row
    }

    fn record_fields(record: &Respondent) -> Vec<String> {
        let demo = &record.demographic_info;
        let behaviors = &record.behaviors_info;
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();
        vec![
            record.user_id.clone(),
            record.score.to_string(),
            opt(&demo.gender),
            opt(&demo.age_group),
            opt(&demo.region),
            opt(&demo.sub_region),
            demo.birth_year.map(|y| y.to_string()).unwrap_or_default(),
            opt(&demo.marital_status),
            opt(&demo.occupation),
            opt(&behaviors.smoker),
            opt(&behaviors.drinker),
            opt(&behaviors.has_vehicle),
            opt(&record.survey_datetime),
        ]
    }

    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::respondent::{BehaviorsInfo, DemographicInfo};

    fn respondent(id: &str, gender: Option<&str>) -> Respondent {
        Respondent {
            user_id: id.to_string(),
            score: 0.5,
            demographic_info: DemographicInfo {
                gender: gender.map(|s| s.to_string()),
                ..DemographicInfo::default()
            },
            behaviors_info: BehaviorsInfo::default(),
            survey_datetime: None,
        }
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let csv = CsvExporter::build_csv(&[]);
        assert!(csv.starts_with('\u{FEFF}'));
        let without_bom = csv.trim_start_matches('\u{FEFF}');
        assert!(without_bom.starts_with("user_id,score,gender"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        let mut r = respondent("u1", Some("남"));
        r.demographic_info.occupation = Some("대표, \"CEO\"".to_string());
        let binding = [&r];
        let csv = CsvExporter::build_csv(&binding);
        assert!(csv.contains("\"대표, \"\"CEO\"\"\""));
    }

    #[test]
    fn uses_unix_line_endings_only() {
        let r1 = respondent("u1", Some("남"));
        let r2 = respondent("u2", Some("여"));
        let binding = [&r1, &r2];
        let csv = CsvExporter::build_csv(&binding);
        assert!(!csv.contains('\r'));
        assert_eq!(csv.matches('\n').count(), 3);
    }

    #[test]
    fn byte_exact_output_for_one_record() {
        let r = respondent("u1", Some("남"));
        let binding = [&r];
        let csv = CsvExporter::build_csv(&binding);
        let expected = format!(
            "\u{FEFF}{}\nu1,0.5,남,,,,,,,,,,\n",
            CSV_HEADERS.join(",")
        );
        assert_eq!(csv, expected);
    }
}
