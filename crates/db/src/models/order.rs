//! Order model and DTOs.
//!
//! An order is the snapshot of one filled-out greeting card: the recipient,
//! the sender, the full text-field store, the chosen design style, and the
//! expiry of the hosted link. Orders are created `pending`; payment
//! confirmation is an external collaborator's job.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mesajkart_core::store::TextFieldStore;
use mesajkart_core::types::{DbId, Timestamp};

/// Initial status for every new order.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub template_id: DbId,
    pub recipient_name: String,
    pub sender_name: String,
    pub message: String,
    pub buyer_email: Option<String>,
    /// Flat string→string snapshot of the text-field store.
    pub text_fields: serde_json::Value,
    pub design_style: String,
    pub bg_audio_url: Option<String>,
    pub special_date: Option<chrono::NaiveDate>,
    pub status: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub template_id: DbId,
    pub recipient_name: String,
    pub sender_name: String,
    pub message: String,
    pub buyer_email: Option<String>,
    #[serde(default)]
    pub text_fields: TextFieldStore,
    pub design_style: Option<String>,
    pub bg_audio_url: Option<String>,
    pub special_date: Option<chrono::NaiveDate>,
    /// Lifetime of the hosted link; defaults to 24 hours when absent.
    pub expires_in_hours: Option<i64>,
}
