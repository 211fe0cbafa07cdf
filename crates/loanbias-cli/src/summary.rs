use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use loanbias_model::{BiasFlags, Distribution};

use crate::types::{AnalysisResult, DecisionResult};

pub fn print_summary(result: &AnalysisResult) {
    let comparison = &result.comparison;
    println!("Input: {}", result.input.display());
    println!("Records: {}", comparison.original.records);
    println!(
        "Decisions flipped by injected bias: {}",
        result.flipped_decisions
    );
    if let Some(export) = &result.export {
        println!("Biased dataset: {}", export.path.display());
    }
    if let Some(path) = &result.report_json {
        println!("Report: {}", path.display());
    }

    print_metrics_table(result);
    print_flags_table(&comparison.original.bias_present, &comparison.biased.bias_present);

    let original = &comparison.original.visualization_data;
    let biased = &comparison.biased.visualization_data;
    print_distribution_table(
        "Gender",
        &original.gender_distribution,
        &biased.gender_distribution,
    );
    print_distribution_table(
        "Credit score",
        &original.credit_score_ranges,
        &biased.credit_score_ranges,
    );
    print_distribution_table("Income", &original.income_ranges, &biased.income_ranges);
}

pub fn print_decision(result: &DecisionResult) {
    let status = if result.approved {
        Cell::new("Approved")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("Denied")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Credit score"),
        header_cell("Income"),
        header_cell("Loan application status"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.credit_score),
        Cell::new(format_amount(result.income)),
        status,
    ]);
    println!("{table}");
}

fn print_metrics_table(result: &AnalysisResult) {
    let original = &result.comparison.original.bias_metrics;
    let biased = &result.comparison.biased.bias_metrics;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Original"),
        header_cell("Biased"),
        header_cell("Change"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let rows = [
        (
            "Male approval rate",
            original.gender_bias.male_approval_rate,
            biased.gender_bias.male_approval_rate,
            Unit::Rate,
        ),
        (
            "Female approval rate",
            original.gender_bias.female_approval_rate,
            biased.gender_bias.female_approval_rate,
            Unit::Rate,
        ),
        (
            "Male avg income",
            original.income_bias.male_avg_income,
            biased.income_bias.male_avg_income,
            Unit::Amount,
        ),
        (
            "Female avg income",
            original.income_bias.female_avg_income,
            biased.income_bias.female_avg_income,
            Unit::Amount,
        ),
        (
            "Male avg credit score",
            original.credit_score_bias.male_avg_credit,
            biased.credit_score_bias.male_avg_credit,
            Unit::Score,
        ),
        (
            "Female avg credit score",
            original.credit_score_bias.female_avg_credit,
            biased.credit_score_bias.female_avg_credit,
            Unit::Score,
        ),
    ];
    for (label, before, after, unit) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(unit.format(before)),
            Cell::new(unit.format(after)),
            change_cell(after - before, unit),
        ]);
    }
    println!();
    println!("Bias metrics:");
    println!("{table}");
}

fn print_flags_table(original: &BiasFlags, biased: &BiasFlags) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Disparity"),
        header_cell("Original"),
        header_cell("Biased"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    let rows = [
        ("Approval rate", original.gender_bias, biased.gender_bias),
        ("Income", original.income_bias, biased.income_bias),
        (
            "Credit score",
            original.credit_score_bias,
            biased.credit_score_bias,
        ),
    ];
    for (label, before, after) in rows {
        table.add_row(vec![Cell::new(label), flag_cell(before), flag_cell(after)]);
    }
    println!();
    println!("Bias detected:");
    println!("{table}");
}

fn print_distribution_table(title: &str, original: &Distribution, biased: &Distribution) {
    let mut labels: Vec<&str> = original.labels().collect();
    for label in biased.labels() {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    if labels.is_empty() {
        return;
    }
    // Numeric ranges sort by their lower bound; categories keep listing order.
    if labels.iter().all(|label| range_start(label).is_some()) {
        labels.sort_by_key(|label| range_start(label));
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Original"),
        header_cell("Biased"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for label in labels {
        table.add_row(vec![
            Cell::new(label),
            count_cell(original.get(label)),
            count_cell(biased.get(label)),
        ]);
    }
    println!();
    println!("{title} distribution:");
    println!("{table}");
}

fn range_start(label: &str) -> Option<i64> {
    let (start, _) = label.split_once('-')?;
    start.parse().ok()
}

#[derive(Clone, Copy)]
enum Unit {
    Rate,
    Amount,
    Score,
}

impl Unit {
    fn format(self, value: f64) -> String {
        match self {
            Unit::Rate => format!("{:.1}%", value * 100.0),
            Unit::Amount => format_amount(value),
            Unit::Score => format!("{value:.1}"),
        }
    }
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn change_cell(delta: f64, unit: Unit) -> Cell {
    if delta.abs() < f64::EPSILON {
        return dim_cell("-");
    }
    let text = match unit {
        Unit::Rate => format!("{:+.1} pts", delta * 100.0),
        Unit::Amount => format!("{delta:+.2}"),
        Unit::Score => format!("{delta:+.1}"),
    };
    let color = if delta < 0.0 { Color::Red } else { Color::Green };
    Cell::new(text).fg(color)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("YES").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell("no")
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
