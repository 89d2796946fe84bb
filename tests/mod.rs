use std::collections::BTreeMap;
use std::fs;
use proptest::prelude::*;
use tempfile::tempdir;

use panelscope_cli::config::constants::UNKNOWN_LABEL;
use panelscope_cli::enums::category::Category;
use panelscope_cli::enums::chart_type::ChartType;
use panelscope_cli::enums::dimension::Dimension;
use panelscope_cli::services::aggregator::Aggregator;
use panelscope_cli::services::classifier::Classifier;
use panelscope_cli::services::csv_exporter::CsvExporter;
use panelscope_cli::services::record_filter::RecordFilter;
use panelscope_cli::structs::respondent::{BehaviorsInfo, DemographicInfo, Respondent};
use panelscope_cli::structs::statistic::{AnswerEntry, Statistic};

fn respondent(id: &str, gender: Option<&str>, age_group: Option<&str>, region: Option<&str>) -> Respondent {
    Respondent {
        user_id: id.to_string(),
        score: 0.9,
        demographic_info: DemographicInfo {
            gender: gender.map(|s| s.to_string()),
            age_group: age_group.map(|s| s.to_string()),
            region: region.map(|s| s.to_string()),
            ..DemographicInfo::default()
        },
        behaviors_info: BehaviorsInfo::default(),
        survey_datetime: Some("2025-03-01T09:30:00".to_string()),
    }
}

fn statistic(description: &str, answers: &[(&str, u64, f64)]) -> Statistic {
    Statistic {
        question_description: Some(description.to_string()),
        answer_distribution: answers
            .iter()
            .map(|(answer, count, percentage)| AnswerEntry {
                answer: answer.to_string(),
                count: *count,
                percentage: *percentage,
            })
            .collect(),
    }
}

fn gender_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("남".to_string())),
        Just(Some("여".to_string())),
        Just(Some("기타".to_string())),
    ]
}

proptest! {
    #[test]
    fn bucket_counts_always_sum_to_record_count(genders in prop::collection::vec(gender_strategy(), 0..200)) {
        let records: Vec<Respondent> = genders
            .iter()
            .enumerate()
            .map(|(i, g)| respondent(&format!("u{}", i), g.as_deref(), None, None))
            .collect();

        let out = Aggregator::aggregate_dimension(&records, Dimension::Gender);
        let total: u64 = out.iter().map(|d| d.value).sum();
        prop_assert_eq!(total, records.len() as u64);
    }

    #[test]
    fn percentages_sum_to_100_within_rounding_tolerance(genders in prop::collection::vec(gender_strategy(), 1..200)) {
        let records: Vec<Respondent> = genders
            .iter()
            .enumerate()
            .map(|(i, g)| respondent(&format!("u{}", i), g.as_deref(), None, None))
            .collect();

        let out = Aggregator::aggregate_dimension(&records, Dimension::Gender);
        let pct: f64 = out.iter().map(|d| d.percentage).sum();
        let tolerance = 0.1 * out.len() as f64;
        prop_assert!((pct - 100.0).abs() <= tolerance, "sum {} over {} buckets", pct, out.len());
    }

    #[test]
    fn every_bucket_drills_down_to_exactly_its_count(genders in prop::collection::vec(gender_strategy(), 0..100)) {
        let records: Vec<Respondent> = genders
            .iter()
            .enumerate()
            .map(|(i, g)| respondent(&format!("u{}", i), g.as_deref(), None, None))
            .collect();

        let out = Aggregator::aggregate_dimension(&records, Dimension::Gender);
        for bucket in &out {
            let matched = RecordFilter::filter_by_label(&records, Dimension::Gender, &bucket.label);
            prop_assert_eq!(matched.len() as u64, bucket.value, "bucket {}", &bucket.label);
        }
    }
}

#[test]
fn aggregating_nothing_is_empty_not_an_error() {
    let out = Aggregator::aggregate_dimension(&[], Dimension::Region);
    assert!(out.is_empty());
}

#[test]
fn missing_fields_collapse_into_one_unknown_bucket() {
    let records = vec![
        respondent("a", None, None, None),
        respondent("b", Some(""), None, None),
        respondent("c", Some("남"), None, None),
    ];
    let out = Aggregator::aggregate_dimension(&records, Dimension::Gender);
    assert_eq!(out.len(), 2);
    let unknown = out.iter().find(|d| d.label == UNKNOWN_LABEL).unwrap();
    assert_eq!(unknown.value, 2);
}

#[test]
fn age_buckets_keep_ordinal_order_regardless_of_input_order() {
    let records = vec![
        respondent("a", None, Some("50대"), None),
        respondent("b", None, Some("20대"), None),
        respondent("c", None, Some("30대"), None),
        respondent("d", None, Some("20대"), None),
    ];
    let out = Aggregator::aggregate_dimension(&records, Dimension::AgeGroup);
    let labels: Vec<&str> = out.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["20대", "30대", "50대"]);
}

#[test]
fn unknown_drill_down_ignores_literal_unknown_strings() {
    let records = vec![
        respondent("null", None, None, None),
        respondent("empty", Some(""), None, None),
        respondent("literal", Some(UNKNOWN_LABEL), None, None),
    ];
    let matched = RecordFilter::filter_by_label(&records, Dimension::Gender, UNKNOWN_LABEL);
    let ids: Vec<&str> = matched.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(ids, vec!["null", "empty"]);
}

#[test]
fn full_statistics_map_classifies_into_expected_categories_and_types() {
    let mut statistics = BTreeMap::new();
    statistics.insert("q_gender".to_string(), statistic("성별", &[("남", 60, 60.0), ("여", 40, 40.0)]));
    statistics.insert("q_region".to_string(), statistic("거주 지역", &[("서울", 50, 50.0), ("부산", 50, 50.0)]));
    statistics.insert("q_car_owned".to_string(), statistic("차량 보유 여부", &[("있음", 55, 55.0), ("없음", 45, 45.0)]));
    statistics.insert(
        "q_household_income".to_string(),
        statistic("가구 소득", &[("~200만원", 30, 30.0), ("200~400만원", 40, 40.0), ("400만원~", 30, 30.0)]),
    );

    let groups = Classifier::classify(&statistics);

    let region = &groups.get(&Category::Region).unwrap()[0].charts[0];
    assert_eq!(region.chart_type, ChartType::Bar);

    let gender = &groups.get(&Category::Demographics).unwrap()[0].charts[0];
    assert_eq!(gender.chart_type, ChartType::Pie);

    let car = &groups.get(&Category::Consumption).unwrap()[0].charts[0];
    assert_eq!(car.chart_type, ChartType::Pie);
    assert_eq!(
        car.colors.as_deref(),
        Some(&["#10b981".to_string(), "#06b6d4".to_string()][..])
    );

    let income = &groups.get(&Category::Income).unwrap()[0].charts[0];
    assert_eq!(income.chart_type, ChartType::Area);
}

#[test]
fn csv_export_writes_bom_prefixed_file_byte_for_byte() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("subset.csv");

    let r = respondent("u1", Some("남"), Some("30대"), Some("서울"));
    let records = [&r];
    CsvExporter::export_to_file(&records, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);

    let content = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = content.trim_start_matches('\u{FEFF}').split('\n').collect();
    assert_eq!(lines[0], "user_id,score,gender,age_group,region,sub_region,birth_year,marital_status,occupation,smoker,drinker,has_vehicle,survey_datetime");
    assert_eq!(lines[1], "u1,0.9,남,30대,서울,,,,,,,,2025-03-01T09:30:00");
    assert_eq!(lines[2], "");
    assert!(!content.contains('\r'));
}

#[test]
fn respondent_with_missing_nested_objects_still_deserializes() {
    let raw = r#"{"user_id":"u9"}"#;
    let r: Respondent = serde_json::from_str(raw).unwrap();
    assert!(r.demographic_info.gender.is_none());
    assert!(r.behaviors_info.smoker.is_none());

    let out = Aggregator::aggregate_dimension(&[r], Dimension::Gender);
    assert_eq!(out[0].label, UNKNOWN_LABEL);
    assert_eq!(out[0].percentage, 100.0);
}
