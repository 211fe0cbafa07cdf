use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace};

use loanbias_cli::config::{OptionOverrides, load_options, resolve_options};
use loanbias_cli::logging::redact_value;
use loanbias_core::{
    DecisionRule, apply_group_bias, apply_selection_bias, approves, inject_bias, run_comparison,
};
use loanbias_ingest::read_applicants;
use loanbias_model::{
    AnalysisOptions, Applicant, ApprovalRule, GenderMode, GroupBias, NumericColumn, SelectionBias,
    SelectionDirection,
};
use loanbias_report::{export_biased_dataset, write_dataset_file, write_report_json};

use crate::cli::{AnalysisArgs, AnalyzeArgs, ColumnArg, DecideArgs, DirectionArg, InjectArgs};
use crate::types::{AnalysisResult, DecisionResult};

fn analysis_options(args: &AnalysisArgs) -> Result<AnalysisOptions> {
    let options = load_options(args.config.as_deref())?;
    resolve_options(
        options,
        OptionOverrides {
            strict_gender: args.strict_gender,
            approval_threshold: args.approval_threshold,
            income_threshold: args.income_threshold,
            credit_threshold: args.credit_threshold,
        },
    )
}

fn load(input: &Path, mode: GenderMode) -> Result<Vec<Applicant>> {
    let start = Instant::now();
    let applicants = read_applicants(input, mode)
        .with_context(|| format!("ingest {}", input.display()))?;
    info!(
        records = applicants.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(applicants)
}

fn count_flipped(rule: &ApprovalRule, original: &[Applicant], biased: &[Applicant]) -> usize {
    let mut flipped = 0usize;
    for (index, (before, after)) in original.iter().zip(biased).enumerate() {
        if rule.is_approved(before) && !rule.is_approved(after) {
            flipped += 1;
            trace!(
                index,
                gender = redact_value(before.gender.as_str()),
                credit_score = redact_value(&before.credit_score.to_string()),
                income = redact_value(&before.income.to_string()),
                "decision flipped by injected bias"
            );
        }
    }
    flipped
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let options = analysis_options(&args.analysis)?;
    let applicants = load(&args.input, options.gender_mode)?;
    let mut comparison = run_comparison(&applicants, &options);
    let flipped_decisions = count_flipped(
        &options.approval_rule,
        &comparison.original_records,
        &comparison.biased_records,
    );

    let export = if args.no_export {
        None
    } else {
        let output_dir = args.output_dir.clone().unwrap_or_else(|| {
            args.input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("output")
        });
        let exported = export_biased_dataset(&output_dir, &comparison.biased_records)
            .context("export biased dataset")?;
        comparison.export_path = Some(exported.path.clone());
        Some(exported)
    };

    let report_json = match &args.json {
        Some(path) => {
            write_report_json(path, &comparison).context("write report json")?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(AnalysisResult {
        input: args.input.clone(),
        comparison,
        flipped_decisions,
        export,
        report_json,
    })
}

fn numeric_column(column: ColumnArg) -> NumericColumn {
    match column {
        ColumnArg::Age => NumericColumn::Age,
        ColumnArg::Income => NumericColumn::Income,
        ColumnArg::CreditScore => NumericColumn::CreditScore,
    }
}

fn group_bias(args: &InjectArgs) -> Result<Option<GroupBias>> {
    let Some(target) = args.group_target else {
        return Ok(None);
    };
    let bias = GroupBias::new(numeric_column(target), args.group_strength)
        .context("invalid group bias")?;
    Ok(Some(bias))
}

fn selection_bias(args: &InjectArgs) -> Result<Option<SelectionBias>> {
    let (Some(column), Some(threshold)) = (args.selection_column, args.selection_threshold)
    else {
        return Ok(None);
    };
    let direction = match args.selection_direction {
        DirectionArg::Above => SelectionDirection::Above,
        DirectionArg::Below => SelectionDirection::Below,
    };
    let bias = SelectionBias::new(numeric_column(column), threshold, direction)
        .context("invalid selection bias")?;
    Ok(Some(bias))
}

pub fn run_inject(args: &InjectArgs) -> Result<usize> {
    let span = info_span!("inject", input = %args.input.display());
    let _guard = span.enter();

    let mode = if args.strict_gender {
        GenderMode::Strict
    } else {
        GenderMode::Lenient
    };
    let group = group_bias(args)?;
    let selection = selection_bias(args)?;
    let applicants = load(&args.input, mode)?;
    let mut biased = inject_bias(&applicants);
    if let Some(group) = &group {
        biased = apply_group_bias(&biased, group);
    }
    if let Some(selection) = &selection {
        biased = apply_selection_bias(&biased, selection);
    }
    info!(
        records = applicants.len(),
        written = biased.len(),
        group_bias = group.is_some(),
        selection_bias = selection.is_some(),
        "bias injected"
    );
    write_dataset_file(&args.output, &biased)
        .with_context(|| format!("write {}", args.output.display()))?;
    Ok(biased.len())
}

pub fn run_decide(args: &DecideArgs) -> Result<DecisionResult> {
    if !args.income.is_finite() || args.income < 0.0 {
        bail!("income must be a non-negative number");
    }
    if args.credit_score < 0 {
        bail!("credit score must not be negative");
    }
    let options = resolve_options(
        load_options(args.config.as_deref())?,
        OptionOverrides::default(),
    )?;
    Ok(DecisionResult {
        income: args.income,
        credit_score: args.credit_score,
        approved: approves(&options.approval_rule, args.credit_score, args.income),
    })
}
