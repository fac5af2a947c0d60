//! Subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use tally_core::balance::{
    settlement_by_group, user_summary, BalanceDisplay, UserBalanceSummary,
};
use tally_core::expense::{normalize_for_submission, ExpenseValidator, SplitCalculator};
use tally_core::group::validate_group;
use tally_shared::types::{format_currency, UserId};
use tally_shared::{AppConfig, AppError, DisplaySettings};

use crate::snapshot::Snapshot;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Expense split and balance inspector")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the expense and group drafts of a snapshot.
    Validate {
        /// Snapshot file (JSON).
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Show a user's balance summary and settlement status per group.
    Balances {
        /// Snapshot file (JSON).
        #[arg(short, long)]
        input: PathBuf,
        /// Viewing user id.
        #[arg(short, long)]
        user: i64,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Preview an equal split.
    Split {
        /// Expense total.
        #[arg(short, long)]
        total: Decimal,
        /// Participant ids, comma separated.
        #[arg(short, long, value_delimiter = ',', required = true)]
        participants: Vec<i64>,
        /// Paying user id.
        #[arg(long)]
        payer: i64,
    },
}

/// Runs the parsed command, writing its output to stdout.
pub fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Validate { input } => validate(&load(&input)?, config, &mut out),
        Command::Balances { input, user, json } => {
            let report = balance_report(&load(&input)?, UserId::new(user), config);
            write_balances(&report, json, &mut out)
        }
        Command::Split {
            total,
            participants,
            payer,
        } => split(total, &participants, UserId::new(payer), config, &mut out),
    }
}

fn load(path: &Path) -> anyhow::Result<Snapshot> {
    Snapshot::load(path).with_context(|| format!("Failed to read snapshot {}", path.display()))
}

fn money(amount: Decimal, display: &DisplaySettings) -> String {
    format_currency(amount, &display.currency_symbol, display.decimal_places)
}

fn validate(snapshot: &Snapshot, config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let validator = ExpenseValidator::new(config.split);
    let mut rejected = 0usize;

    for input in &snapshot.expenses {
        match validator.validate(&input.draft) {
            Ok(validated) => {
                let submitted = normalize_for_submission(validated, input.payer_user_id);
                writeln!(
                    out,
                    "ok      {:<24} {} ({}), {} owed to payer",
                    submitted.description,
                    money(submitted.amount, &config.display),
                    submitted.division_strategy,
                    money(submitted.owed_to_payer(), &config.display),
                )?;
            }
            Err(errors) => {
                rejected += 1;
                writeln!(out, "invalid {:<24}", input.draft.description)?;
                for error in &errors {
                    let code = error.kind.error_code();
                    writeln!(out, "        {:<16} {} ({code})", error.field, error.kind)?;
                }
            }
        }
    }

    for draft in &snapshot.groups {
        match validate_group(draft) {
            Ok(group) => writeln!(
                out,
                "ok      group {:<18} {} members",
                group.name,
                group.member_ids.len()
            )?,
            Err(errors) => {
                rejected += 1;
                writeln!(out, "invalid group {}", draft.name)?;
                for error in &errors {
                    let code = error.kind.error_code();
                    writeln!(out, "        {:<16} {} ({code})", error.field, error.kind)?;
                }
            }
        }
    }

    info!(
        expenses = snapshot.expenses.len(),
        groups = snapshot.groups.len(),
        rejected,
        "Validation finished"
    );

    if rejected > 0 {
        return Err(AppError::Validation(format!("{rejected} draft(s) rejected")).into());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupReport {
    group_id: i64,
    settled: bool,
    lines: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceReport {
    user_id: UserId,
    summary: UserBalanceSummary,
    display: BalanceDisplay,
    groups: Vec<GroupReport>,
}

/// Plain credit/debt records take precedence over the signed entries.
fn balance_report(snapshot: &Snapshot, user: UserId, config: &AppConfig) -> BalanceReport {
    if snapshot.is_truncated() {
        warn!("Snapshot ends before the last page of balances; totals are partial");
    }

    let entries = snapshot.balance_entries();
    let summary = if snapshot.credits.is_empty() && snapshot.debts.is_empty() {
        user_summary(&entries, user)
    } else {
        UserBalanceSummary::from_records(&snapshot.credits, &snapshot.debts)
    };

    let groups: Vec<GroupReport> = settlement_by_group(&entries, user)
        .into_iter()
        .map(|group| GroupReport {
            group_id: group.group_id.into_inner(),
            settled: group.is_settled(),
            lines: group
                .lines
                .iter()
                .map(|line| line.render_with_amount(&snapshot.users, &config.display))
                .collect(),
        })
        .collect();

    info!(entries = entries.len(), groups = groups.len(), "Balances computed");
    BalanceReport {
        user_id: user,
        display: BalanceDisplay::new(&summary, &config.display),
        summary,
        groups,
    }
}

fn write_balances(report: &BalanceReport, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    writeln!(out, "You are owed  {}", report.display.credit)?;
    writeln!(out, "You owe       {}", report.display.debt)?;
    writeln!(out, "Net balance   {} ({:?})", report.display.net, report.display.tone)?;
    for group in &report.groups {
        writeln!(out)?;
        writeln!(out, "Group {}", group.group_id)?;
        for line in &group.lines {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

fn split(
    total: Decimal,
    participants: &[i64],
    payer: UserId,
    config: &AppConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let ids: Vec<UserId> = participants.iter().copied().map(UserId::new).collect();
    let split = SplitCalculator::new(config.split)
        .equal_shares(total, &ids, payer)
        .ok_or_else(|| AppError::Input(format!("cannot split {total} between {ids:?}")))?;

    for share in &split.shares {
        let marker = if share.user_id == payer { " (payer)" } else { "" };
        writeln!(out, "user {:<8} {}{marker}", share.user_id, share.share_amount)?;
    }
    writeln!(out, "owed to payer: {}", money(split.owed_to_payer(), &config.display))?;
    Ok(())
}
