//! Terminal tables.

use farm_positions_domain::format::format_usd;
use farm_positions_domain::{Holding, Pool, PortfolioSummary, Position, Price, Valuation};
use prettytable::{Table, format, row};
use rust_decimal::Decimal;

/// Fraction digits shown for token amounts.
const AMOUNT_DP: u32 = 6;

fn amount(holding: &Holding) -> String {
    if holding.amount.is_zero() {
        return "-".to_string();
    }
    let label = match (&holding.symbol, &holding.token) {
        (Some(symbol), _) => symbol.clone(),
        (None, Some(token)) => token.short(),
        (None, None) => String::new(),
    };
    format!("{} {}", holding.amount.round_dp(AMOUNT_DP).normalize(), label)
}

fn price(price: Option<Price>) -> String {
    price.map_or_else(|| "n/a".to_string(), |p| format_usd(p.value()))
}

fn position_row(rank: usize, position: &Position) -> prettytable::Row {
    match &position.valuation {
        Valuation::Resolved(value) => {
            let pending = value.pending_reward.as_ref().map_or_else(
                || "-".to_string(),
                |r| {
                    format!(
                        "{} ({})",
                        r.amount.round_dp(AMOUNT_DP).normalize(),
                        format_usd(r.value)
                    )
                },
            );
            row![
                rank,
                position.pool_name,
                amount(&value.token0),
                amount(&value.token1),
                r->format_usd(value.total_value),
                r->pending
            ]
        }
        Valuation::Unresolved { reason, .. } => row![
            rank,
            position.pool_name,
            H2->format!("unresolved: {reason}"),
            r->"-",
            r->"-"
        ],
    }
}

/// Ranked positions with a total row. Zero-stake pools are left out.
pub fn summary_table(summary: &PortfolioSummary) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["#", "Pool", "Token 0", "Token 1", "Value", "Pending"]);

    let shown = summary
        .positions
        .iter()
        .filter(|p| !p.is_resolved() || p.value().is_some_and(|v| !v.staked.is_zero()));
    for (index, position) in shown.enumerate() {
        table.add_row(position_row(index + 1, position));
    }

    let pending = match summary.pending_reward_value() {
        Some(pending) if pending.is_zero() => "-".to_string(),
        Some(pending) => format_usd(pending),
        None => "overflow".to_string(),
    };
    table.add_row(row![
        "",
        b->"Total",
        "",
        "",
        rb->format_usd(summary.total_value),
        r->pending
    ]);
    table
}

/// Configured pools, optionally with the staking contract's view of each.
pub fn pools_table(pools: &[Pool], checks: Option<&[String]>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    if checks.is_some() {
        table.set_titles(row!["Pool ID", "Name", "Pair", "Multiplier", "On-chain"]);
    } else {
        table.set_titles(row!["Pool ID", "Name", "Pair", "Multiplier"]);
    }

    for (index, pool) in pools.iter().enumerate() {
        let multiplier = pool.multiplier.clone().unwrap_or_else(|| "-".to_string());
        let mut row = row![r->pool.id, pool.name, pool.pair_address, multiplier];
        if let Some(check) = checks.and_then(|c| c.get(index)) {
            row.add_cell(prettytable::Cell::new(check));
        }
        table.add_row(row);
    }
    table
}

/// Catalog tokens and their current prices.
pub fn prices_table(prices: &[(String, Option<Price>)]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Feed", "USD"]);
    for (feed, quote) in prices {
        table.add_row(row![feed, r->price(*quote)]);
    }
    table
}

/// One-line summary printed under the positions table.
pub fn footer(summary: &PortfolioSummary) -> String {
    let mut line = format!(
        "{} active of {} pools at block {}, total {}",
        summary.active().count(),
        summary.positions.len(),
        summary.block_number,
        format_usd(summary.total_value)
    );
    if summary.unresolved > 0 {
        line.push_str(&format!(", {} unresolved", summary.unresolved));
    }
    if summary.total_value == Decimal::ZERO && summary.unresolved == 0 {
        line.push_str(" (no staked positions)");
    }
    line
}
