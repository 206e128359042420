//! Repository for the `orders` table.

use sqlx::PgPool;

use mesajkart_core::types::{DbId, Timestamp};

use crate::models::order::{CreateOrder, Order, ORDER_STATUS_PENDING};

const COLUMNS: &str = "id, template_id, recipient_name, sender_name, message, buyer_email, \
     text_fields, design_style, bg_audio_url, special_date, status, expires_at, created_at";

/// Provides persistence for greeting-card orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new pending order, returning the created row.
    ///
    /// `design_style` must already be normalized and `expires_at` computed by
    /// the caller; this method only persists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrder,
        design_style: &str,
        expires_at: Timestamp,
    ) -> Result<Order, sqlx::Error> {
        let text_fields = serde_json::to_value(&input.text_fields)
            .unwrap_or_else(|_| serde_json::Value::Object(Default::default()));

        let query = format!(
            "INSERT INTO orders \
                (template_id, recipient_name, sender_name, message, buyer_email, \
                 text_fields, design_style, bg_audio_url, special_date, status, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.template_id)
            .bind(&input.recipient_name)
            .bind(&input.sender_name)
            .bind(&input.message)
            .bind(&input.buyer_email)
            .bind(text_fields)
            .bind(design_style)
            .bind(&input.bg_audio_url)
            .bind(input.special_date)
            .bind(ORDER_STATUS_PENDING)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an order by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
