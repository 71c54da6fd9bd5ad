//! Deposit, withdraw and transfer actions plus the recent-transactions feed.

use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::SharedState;
use teller_ledger::{LedgerError, TransactionKind};

// === API Types ===

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub user_id: String,
    pub action: String,
    pub amount: Option<Decimal>,
    pub recipient_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub message: &'static str,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub id: u32,
    pub amount: Decimal,
    pub date: &'static str,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub transactions: Vec<RecentTransaction>,
}

/// Canned feed the dashboard charts against. The demo keeps this static so
/// the page has data to render before any real transactions exist.
pub fn recent_transactions() -> Vec<RecentTransaction> {
    vec![
        RecentTransaction {
            id: 1,
            amount: dec!(100.00),
            date: "2025-02-10",
            kind: TransactionKind::Deposit,
        },
        RecentTransaction {
            id: 2,
            amount: dec!(50.00),
            date: "2025-02-11",
            kind: TransactionKind::Withdrawal,
        },
    ]
}

// === API Endpoints ===

/// GET /api/transactions/recent - Static demo feed
pub async fn recent() -> Json<RecentResponse> {
    Json(RecentResponse {
        transactions: recent_transactions(),
    })
}

/// POST /api/transactions - Deposit, withdraw or transfer, keyed by `action`
///
/// Responses carry the source account's new balance together with a message
/// string the front-end shows verbatim.
pub async fn submit_transaction(
    State(state): State<SharedState>,
    Json(req): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = match req.action.as_str() {
        "deposit" => {
            let amount = required_amount(req.amount)?;
            let balance = state
                .ledger
                .deposit(&req.user_id, amount)
                .map_err(|e| reject(e, "Insufficient Funds"))?;
            TransactionResponse {
                message: "Deposit Successful",
                balance,
            }
        }
        "withdraw" => {
            let amount = required_amount(req.amount)?;
            let balance = state
                .ledger
                .withdraw(&req.user_id, amount)
                .map_err(|e| reject(e, "Insufficient Funds"))?;
            TransactionResponse {
                message: "Withdrawal Successful",
                balance,
            }
        }
        "transfer" => {
            let amount = required_amount(req.amount)?;
            let recipient = req
                .recipient_id
                .as_deref()
                .filter(|r| !r.is_empty())
                .ok_or_else(|| ApiError::rejected("Invalid Recipient"))?;
            let balance = state
                .ledger
                .transfer(&req.user_id, recipient, amount)
                .map_err(|e| reject(e, "Transfer Failed. Insufficient Funds"))?;
            TransactionResponse {
                message: "Transfer Successful",
                balance,
            }
        }
        _ => return Err(ApiError::rejected("Invalid Action")),
    };

    Ok(Json(response))
}

fn required_amount(amount: Option<Decimal>) -> Result<Decimal, ApiError> {
    amount.ok_or_else(|| ApiError::rejected("Invalid Amount"))
}

fn reject(err: LedgerError, insufficient: &'static str) -> ApiError {
    match err {
        LedgerError::InsufficientFunds => ApiError::rejected(insufficient),
        LedgerError::InvalidAmount => ApiError::rejected("Invalid Amount"),
    }
}
