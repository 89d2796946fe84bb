use std::collections::{BTreeMap, HashMap};
use once_cell::sync::Lazy;
use crate::config::constants::{AREA_CHART_COLOR, CAR_OWNED_COLORS, GENDER_COLORS, MARRIAGE_COLORS};
use crate::enums::category::Category;
use crate::enums::chart_type::ChartType;
use crate::structs::chart_item::{CategoryGroups, ChartItem, ChartRow};
use crate::structs::distribution::Distribution;
use crate::structs::statistic::Statistic;

/// Hardcoded pie palettes for specific low-cardinality questions.
static PIE_PALETTES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut palettes: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    palettes.insert("gender", GENDER_COLORS);
    palettes.insert("marriage", MARRIAGE_COLORS);
    palettes.insert("car_owned", CAR_OWNED_COLORS);
    palettes
});

/// Inputs one classification decision looks at: canonical question key
/// (`q_` prefix stripped), question description and distinct answer count.
pub struct RuleContext<'a> {
    pub key: &'a str,
    pub description: &'a str,
    pub answer_count: usize,
}

struct TypeRule {
    name: &'static str,
    applies: fn(&RuleContext) -> bool,
    outcome: fn(&RuleContext) -> (ChartType, Option<Vec<String>>),
}

fn plain(chart_type: ChartType) -> (ChartType, Option<Vec<String>>) {
    (chart_type, None)
}

fn pie_with_palette(ctx: &RuleContext) -> (ChartType, Option<Vec<String>>) {
    let colors = PIE_PALETTES
        .get(ctx.key)
        .map(|palette| palette.iter().map(|c| c.to_string()).collect());
    (ChartType::Pie, colors)
}

/// Chart-type rules, evaluated top to bottom, first match wins. The order
/// here is the precedence; do not reorder.
static TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        name: "region keys are bar",
        applies: |ctx| matches!(ctx.key, "region" | "sub_region"),
        outcome: |_| plain(ChartType::Bar),
    },
    TypeRule {
        name: "smoking-experience and education descriptions are bar",
        applies: |ctx| ctx.description.contains("흡연경험") || ctx.description.contains("최종학력"),
        outcome: |_| plain(ChartType::Bar),
    },
    TypeRule {
        name: "income and birth-year keys are area",
        applies: |ctx| matches!(ctx.key, "personal_income" | "household_income" | "birth_year"),
        outcome: |_| (ChartType::Area, Some(vec![AREA_CHART_COLOR.to_string()])),
    },
    TypeRule {
        name: "age and household-size keys are bar",
        applies: |ctx| matches!(ctx.key, "age" | "family_count" | "children_count"),
        outcome: |_| plain(ChartType::Bar),
    },
    TypeRule {
        name: "more than 10 answers is bar",
        applies: |ctx| ctx.answer_count > 10,
        outcome: |_| plain(ChartType::Bar),
    },
    TypeRule {
        name: "3 or fewer answers is pie",
        applies: |ctx| ctx.answer_count <= 3,
        outcome: pie_with_palette,
    },
    TypeRule {
        name: "default pie",
        applies: |_| true,
        outcome: |_| plain(ChartType::Pie),
    },
];

struct CategoryRule {
    name: &'static str,
    applies: fn(&RuleContext) -> bool,
    category: Category,
}

/// Category rules, evaluated top to bottom, first match wins; anything
/// unmatched defaults to demographics.
static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "region",
        applies: |ctx| matches!(ctx.key, "region" | "sub_region") || ctx.description.contains("지역"),
        category: Category::Region,
    },
    CategoryRule {
        name: "education",
        applies: |ctx| ctx.key == "education" || ctx.description.contains("최종학력") || ctx.description.contains("학력"),
        category: Category::Education,
    },
    CategoryRule {
        name: "income",
        applies: |ctx| matches!(ctx.key, "personal_income" | "household_income") || ctx.description.contains("소득"),
        category: Category::Income,
    },
    CategoryRule {
        name: "lifestyle",
        applies: |ctx| {
            matches!(ctx.key, "smoker" | "smoke" | "drinker" | "drink")
                || ctx.description.contains("흡연")
                || ctx.description.contains("음주")
        },
        category: Category::Lifestyle,
    },
    CategoryRule {
        name: "consumption",
        applies: |ctx| {
            ctx.key == "car_owned"
                || ctx.key.contains("product")
                || ctx.description.contains("구매")
                || ctx.description.contains("보유")
        },
        category: Category::Consumption,
    },
];

/// Classifies backend statistics into chart type and sidebar category, then
/// bundles the charts of each category into display rows.
pub struct Classifier;

impl Classifier {

    pub fn classify(statistics: &BTreeMap<String, Statistic>) -> CategoryGroups {
        let mut by_category: BTreeMap<Category, Vec<ChartItem>> = BTreeMap::new();

        for (raw_key, statistic) in statistics {
            let key = canonical_key(raw_key);
            let description = statistic.question_description.as_deref().unwrap_or("");
            let ctx = RuleContext {
                key,
                description,
                answer_count: statistic.answer_distribution.len(),
            };

            let (chart_type, colors) = Self::chart_type_for(&ctx);
            let category = Self::category_for(&ctx);
            log::debug!(
                "classified '{}' as {}/{} ({} answers)",
                raw_key, category, chart_type, ctx.answer_count
            );

            let title = if description.is_empty() {
                key.to_string()
            } else {
                description.to_string()
            };

            let item = ChartItem {
                key: key.to_string(),
                title,
                data: statistic
                    .answer_distribution
                    .iter()
                    .map(|entry| Distribution::new(entry.answer.clone(), entry.count, entry.percentage))
                    .collect(),
                chart_type,
                colors,
            };
            by_category.entry(category).or_default().push(item);
        }

        by_category
            .into_iter()
            .map(|(category, items)| (category, group_rows(category, items)))
            .collect()
    }

    pub fn chart_type_for(ctx: &RuleContext) -> (ChartType, Option<Vec<String>>) {
        for rule in TYPE_RULES {
            if (rule.applies)(ctx) {
                log::trace!("type rule matched: {}", rule.name);
                return (rule.outcome)(ctx);
            }
        }
        // The rule table ends with a catch-all, so this is unreachable, but
        // the classifier stays total either way.
        plain(ChartType::Pie)
    }

    pub fn category_for(ctx: &RuleContext) -> Category {
        for rule in CATEGORY_RULES {
            if (rule.applies)(ctx) {
                log::trace!("category rule matched: {}", rule.name);
                return rule.category;
            }
        }
        Category::Demographics
    }
}

pub fn canonical_key(raw_key: &str) -> &str {
    raw_key.strip_prefix("q_").unwrap_or(raw_key)
}

/// Presentation policy: bundles a category's charts into 1- or 2-column
/// rows. Category and chart-type assignment are the contract; this layout
/// is only a display heuristic.
fn group_rows(category: Category, items: Vec<ChartItem>) -> Vec<ChartRow> {
    match category {
        Category::Region => chunk_rows(items, 2),
        Category::Income => chunk_rows(items, 1),
        Category::Demographics => {
            let mut pies = Vec::new();
            let mut household = Vec::new();
            let mut singles = Vec::new();
            for item in items {
                if matches!(item.key.as_str(), "family_count" | "children_count") {
                    household.push(item);
                } else if item.chart_type == ChartType::Pie {
                    pies.push(item);
                } else {
                    singles.push(item);
                }
            }
            let mut rows = chunk_rows(pies, 2);
            rows.extend(chunk_rows(household, 2));
            rows.extend(chunk_rows(singles, 1));
            rows
        }
        Category::Consumption => {
            let (products, singles): (Vec<_>, Vec<_>) =
                items.into_iter().partition(|item| item.key.contains("product"));
            let mut rows = chunk_rows(products, 2);
            rows.extend(chunk_rows(singles, 1));
            rows
        }
        Category::Education | Category::Lifestyle => chunk_rows(items, 1),
    }
}

fn chunk_rows(items: Vec<ChartItem>, cols: usize) -> Vec<ChartRow> {
    let mut rows = Vec::new();
    let mut buffer: Vec<ChartItem> = Vec::new();
    for item in items {
        buffer.push(item);
        if buffer.len() == cols {
            rows.push(ChartRow {
                cols: buffer.len() as u8,
                charts: std::mem::take(&mut buffer),
            });
        }
    }
    if !buffer.is_empty() {
        rows.push(ChartRow {
            cols: buffer.len() as u8,
            charts: buffer,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::statistic::AnswerEntry;

    fn statistic(description: &str, answers: &[(&str, u64, f64)]) -> Statistic {
        Statistic {
            question_description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
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

    fn single(key: &str, statistic: Statistic) -> BTreeMap<String, Statistic> {
        let mut map = BTreeMap::new();
        map.insert(key.to_string(), statistic);
        map
    }

    #[test]
    fn region_key_is_always_bar_in_region_category() {
        for answers in [2usize, 8, 20] {
            let entries: Vec<(&str, u64, f64)> =
                std::iter::repeat(("서울", 1u64, 5.0)).take(answers).collect();
            let groups = Classifier::classify(&single("q_region", statistic("거주 지역", &entries)));
            let rows = groups.get(&Category::Region).unwrap();
            assert_eq!(rows[0].charts[0].chart_type, ChartType::Bar);
        }
    }

    #[test]
    fn car_owned_with_two_answers_is_consumption_pie_with_palette() {
        let stat = statistic("차량 보유 여부", &[("있음", 60, 60.0), ("없음", 40, 40.0)]);
        let groups = Classifier::classify(&single("q_car_owned", stat));
        let rows = groups.get(&Category::Consumption).unwrap();
        let chart = &rows[0].charts[0];
        assert_eq!(chart.chart_type, ChartType::Pie);
        assert_eq!(
            chart.colors.as_deref(),
            Some(&["#10b981".to_string(), "#06b6d4".to_string()][..])
        );
    }

    #[test]
    fn gender_example_is_one_demographics_pie_summing_to_100() {
        let stat = statistic("성별", &[("남", 60, 60.0), ("여", 40, 40.0)]);
        let groups = Classifier::classify(&single("q_gender", stat));
        let rows = groups.get(&Category::Demographics).unwrap();
        assert_eq!(rows.len(), 1);
        let chart = &rows[0].charts[0];
        assert_eq!(chart.chart_type, ChartType::Pie);
        assert_eq!(chart.data.len(), 2);
        let pct: f64 = chart.data.iter().map(|d| d.percentage).sum();
        assert!((pct - 100.0).abs() < 0.2);
    }

    #[test]
    fn smoking_experience_description_beats_answer_count_rules() {
        let stat = statistic("흡연경험", &[("있음", 50, 50.0), ("없음", 50, 50.0)]);
        let groups = Classifier::classify(&single("q_smoke_experience", stat));
        let rows = groups.get(&Category::Lifestyle).unwrap();
        // Two answers would be pie by rule, but the description rule comes first.
        assert_eq!(rows[0].charts[0].chart_type, ChartType::Bar);
    }

    #[test]
    fn income_keys_are_area_with_fixed_color() {
        let entries: Vec<(&str, u64, f64)> = (0..12).map(|_| ("구간", 1u64, 8.3)).collect();
        let groups = Classifier::classify(&single("q_personal_income", statistic("개인 소득", &entries)));
        let rows = groups.get(&Category::Income).unwrap();
        let chart = &rows[0].charts[0];
        assert_eq!(chart.chart_type, ChartType::Area);
        assert_eq!(chart.colors.as_deref(), Some(&["#6366f1".to_string()][..]));
        assert_eq!(rows[0].cols, 1);
    }

    #[test]
    fn more_than_ten_answers_falls_back_to_bar() {
        let entries: Vec<(&str, u64, f64)> = (0..11).map(|_| ("답", 1u64, 9.0)).collect();
        let groups = Classifier::classify(&single("q_hobby", statistic("취미", &entries)));
        let rows = groups.get(&Category::Demographics).unwrap();
        assert_eq!(rows[0].charts[0].chart_type, ChartType::Bar);
    }

    #[test]
    fn missing_description_defaults_to_demographics_pie() {
        let stat = statistic("", &[("예", 70, 70.0), ("아니오", 30, 30.0)]);
        let groups = Classifier::classify(&single("q_mystery", stat));
        let rows = groups.get(&Category::Demographics).unwrap();
        let chart = &rows[0].charts[0];
        assert_eq!(chart.chart_type, ChartType::Pie);
        assert!(chart.colors.is_none());
        assert_eq!(chart.title, "mystery");
    }

    #[test]
    fn region_charts_are_paired_two_per_row() {
        let mut map = BTreeMap::new();
        map.insert("q_region".to_string(), statistic("거주 지역", &[("서울", 5, 50.0), ("부산", 5, 50.0)]));
        map.insert("q_sub_region".to_string(), statistic("세부 지역", &[("강남", 5, 50.0), ("해운대", 5, 50.0)]));
        let groups = Classifier::classify(&map);
        let rows = groups.get(&Category::Region).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cols, 2);
    }

    #[test]
    fn demographics_pies_are_paired_two_per_row() {
        let mut map = BTreeMap::new();
        map.insert("q_gender".to_string(), statistic("성별", &[("남", 6, 60.0), ("여", 4, 40.0)]));
        map.insert("q_marriage".to_string(), statistic("결혼 여부", &[("기혼", 5, 50.0), ("미혼", 5, 50.0)]));
        let groups = Classifier::classify(&map);
        let rows = groups.get(&Category::Demographics).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cols, 2);
        assert_eq!(rows[0].charts.len(), 2);
    }
}
