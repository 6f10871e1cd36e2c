use crate::domain::payment::{
    CreatePaymentResponse, ErrorEnvelope, ErrorPayload, GetPaymentResponse, PaymentRequest,
};
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn root() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "Payment Service")
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

pub async fn create_payment(
    State(state): State<AppState>,
    Json(mut req): Json<PaymentRequest>,
) -> impl IntoResponse {
    if let Err((status, body)) = validate_request(&req) {
        return (status, Json(body)).into_response();
    }
    req.currency = req.currency.to_uppercase();

    match state.payment_service.create_payment_request(req).await {
        Ok(payment) => (
            axum::http::StatusCode::OK,
            Json(CreatePaymentResponse {
                id: payment.id,
                authorized_uri: payment.charge.authorize_uri,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, body) = error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

pub async fn get_payment(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.payment_service.find(id).await {
        Ok(payment) => (
            axum::http::StatusCode::OK,
            Json(GetPaymentResponse {
                id: payment.id,
                status: payment.status,
                amount: payment.amount,
                currency: payment.currency,
                source_type: payment.charge.source_type,
                created_at: payment.created_at,
                updated_at: payment.updated_at,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, body) = error_response(e);
            (status, Json(body)).into_response()
        }
    }
}

fn validate_request(req: &PaymentRequest) -> Result<(), (axum::http::StatusCode, ErrorEnvelope)> {
    if req.amount <= 0 {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            err("INVALID_AMOUNT", "amount must be > 0"),
        ));
    }
    if req.currency.len() != 3 || !req.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            err("INVALID_CURRENCY", "currency must be a 3-letter code"),
        ));
    }
    if req.source_type.is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            err("INVALID_SOURCE_TYPE", "source_type is required"),
        ));
    }
    if req.return_uri.is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            err("INVALID_RETURN_URI", "return_uri is required"),
        ));
    }
    Ok(())
}

fn error_response(e: PaymentError) -> (axum::http::StatusCode, ErrorEnvelope) {
    let (status, code) = match &e {
        PaymentError::NotFound => (axum::http::StatusCode::BAD_REQUEST, "PAYMENT_NOT_FOUND"),
        PaymentError::UnknownStatus(_) => {
            (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "UNKNOWN_CHARGE_STATUS")
        }
        PaymentError::Gateway(_) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "GATEWAY_ERROR"),
        PaymentError::Store(_) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
    };

    if status == axum::http::StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("payment operation failed: {:?}", e);
    }

    (status, err(code, &e.to_string()))
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
        },
    }
}
