//! Dashboard handler — main landing page with account overview.

use axum::{
    extract::{Query, State},
    response::Html,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::handlers::transactions::{RecentTransaction, recent_transactions};
use crate::state::SharedState;
use teller_ledger::TransactionKind;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Demo chart series shown on the overview tab.
const CHART_MONTHS: [&str; 7] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];
const CHART_INCOME: [i64; 7] = [1200, 1900, 3000, 5000, 2000, 3000, 4500];
const CHART_EXPENSES: [i64; 7] = [2000, 3000, 2000, 5000, 1000, 4000, 3000];

#[derive(Deserialize, Default)]
pub struct DashboardQuery {
    pub user: Option<String>,
}

pub async fn dashboard(
    State(state): State<SharedState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let user = query
        .user
        .unwrap_or_else(|| state.config.dashboard.default_user.clone());

    // Viewing the dashboard never opens an account; unseen users see the
    // opening balance they would start with.
    let balance = state.ledger.balance_or_opening(&user);

    let recent = recent_transactions();
    let income: Decimal = recent
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Deposit)
        .map(|tx| tx.amount)
        .sum();
    let expenses: Decimal = recent
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Withdrawal)
        .map(|tx| tx.amount)
        .sum();

    Html(render_dashboard(&user, balance, income, expenses, &recent))
}

fn render_dashboard(
    user: &str,
    balance: Decimal,
    income: Decimal,
    expenses: Decimal,
    recent: &[RecentTransaction],
) -> String {
    let user = escape_html(user);
    let today = chrono::Utc::now().date_naive();

    let scale = CHART_INCOME
        .iter()
        .chain(CHART_EXPENSES.iter())
        .copied()
        .max()
        .unwrap_or(1);

    let chart_html: String = CHART_MONTHS
        .iter()
        .zip(CHART_INCOME.iter().zip(CHART_EXPENSES.iter()))
        .map(|(month, (income, expenses))| {
            format!(
                r#"
            <div class="chart-group">
                <div class="chart-bars">
                    <div class="chart-bar income" style="height:{}%" title="Income ${}"></div>
                    <div class="chart-bar expense" style="height:{}%" title="Expenses ${}"></div>
                </div>
                <div class="chart-label">{}</div>
            </div>"#,
                income * 100 / scale,
                income,
                expenses * 100 / scale,
                expenses,
                month
            )
        })
        .collect();

    let rows_html: String = recent
        .iter()
        .map(|tx| {
            let (amount_class, sign) = match tx.kind {
                TransactionKind::Deposit | TransactionKind::TransferIn => ("text-success", "+"),
                TransactionKind::Withdrawal | TransactionKind::TransferOut => ("text-danger", "-"),
            };
            format!(
                r#"
                        <tr>
                            <td>{}</td>
                            <td><span class="badge badge-outline">{}</span></td>
                            <td class="{}">{}${:.2}</td>
                        </tr>"#,
                tx.date,
                tx.kind.as_str(),
                amount_class,
                sign,
                tx.amount
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Dashboard — Teller</title>
    <link rel="stylesheet" href="/static/css/main.css?v=1.0.0">
</head>
<body>
<div class="app-container">
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">
                <svg width="36" height="36" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z"/></svg>
                Banking Dashboard
            </h1>
            <p class="text-muted">Signed in as <strong>{}</strong> · {}</p>
        </div>
        <div class="d-flex gap-3">
            <button class="btn btn-outline" onclick="location.reload()">Refresh</button>
        </div>
    </div>

    <!-- Stat cards -->
    <div class="stats-grid">
        <div class="stat-card card-hover">
            <div class="stat-value text-gradient">${:.2}</div>
            <div class="stat-label">Available Balance</div>
        </div>
        <div class="stat-card card-hover">
            <div class="stat-value text-success">${:.2}</div>
            <div class="stat-label">Monthly Income</div>
        </div>
        <div class="stat-card card-hover">
            <div class="stat-value text-danger">${:.2}</div>
            <div class="stat-label">Monthly Expenses</div>
        </div>
    </div>

    <!-- Tab navigation -->
    <div class="tabs">
        <button class="tab-btn active" data-tab="overview">Overview</button>
        <button class="tab-btn" data-tab="transactions">Transactions</button>
        <button class="tab-btn" data-tab="analytics">Analytics</button>
        <button class="tab-btn" data-tab="settings">Settings</button>
    </div>

    <div id="tab-overview" class="tab-panel">
        <div class="grid-2">
            <div class="card">
                <div class="card-header">Income vs Expenses</div>
                <div class="chart">{}
                </div>
                <div class="chart-legend">
                    <span class="legend-dot income"></span> Income
                    <span class="legend-dot expense"></span> Expenses
                </div>
            </div>
            <div class="card">
                <div class="card-header">Quick Actions</div>
                <form id="transaction-form" class="action-form">
                    <input type="hidden" name="userId" value="{}">
                    <select name="action">
                        <option value="deposit">Deposit</option>
                        <option value="withdraw">Withdraw</option>
                        <option value="transfer">Transfer</option>
                    </select>
                    <input name="amount" type="number" min="0.01" step="0.01" placeholder="Amount" required>
                    <input name="recipientId" type="text" placeholder="Recipient (transfers only)">
                    <button type="submit" class="btn btn-primary">Submit</button>
                </form>
                <p id="transaction-result" class="text-muted"></p>
            </div>
        </div>
    </div>

    <div id="tab-transactions" class="tab-panel hidden">
        <div class="card">
            <div class="card-header">Recent Transactions</div>
            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>Date</th>
                            <th>Type</th>
                            <th>Amount</th>
                        </tr>
                    </thead>
                    <tbody>{}
                    </tbody>
                </table>
            </div>
        </div>
    </div>

    <div id="tab-analytics" class="tab-panel hidden">
        <div class="card">
            <p class="text-muted">Analytics are not part of the demo yet.</p>
        </div>
    </div>

    <div id="tab-settings" class="tab-panel hidden">
        <div class="card">
            <p class="text-muted">Settings are not part of the demo yet.</p>
        </div>
    </div>
</main>
</div>
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        NAV_HTML, user, today, balance, income, expenses, chart_html, user, rows_html
    )
}

// User ids come straight from the query string.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>"a"&'b'</script>"#),
            "&lt;script&gt;&quot;a&quot;&amp;&#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("alice"), "alice");
    }

    #[test]
    fn rendered_page_contains_the_demo_cards() {
        let page = render_dashboard(
            "alice",
            dec!(1000),
            dec!(100),
            dec!(50),
            &recent_transactions(),
        );
        assert!(page.contains("Available Balance"));
        assert!(page.contains("$1000.00"));
        assert!(page.contains("Monthly Income"));
        assert!(page.contains("data-tab=\"transactions\""));
        assert!(page.contains("2025-02-10"));
    }
}
