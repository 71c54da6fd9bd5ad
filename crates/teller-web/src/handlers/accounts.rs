//! Account balance lookup.

use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::SharedState;
use teller_ledger::TransactionRecord;

// === API Types ===

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
    pub transactions: Vec<TransactionRecord>,
}

// === API Endpoints ===

/// POST /api/accounts/balance - Balance and history for an existing account
///
/// Never creates an account: unseen user ids get a 404 so the front-end
/// can distinguish "no account yet" from a zero balance.
pub async fn balance(
    State(state): State<SharedState>,
    Json(req): Json<BalanceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (balance, transactions) = state
        .ledger
        .balance_with_history(&req.user_id)
        .ok_or(ApiError::AccountNotFound)?;

    Ok(Json(BalanceResponse {
        balance,
        transactions,
    }))
}
