use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stocklist_core::ItemId;

use crate::app::{dto, errors};
use crate::context::SessionContext;

pub async fn list_items(Extension(ctx): Extension<SessionContext>) -> impl IntoResponse {
    Json(ctx.session().with_inventory(|inv| dto::inventory_to_json(&*inv)))
}

pub async fn add_item(
    Extension(ctx): Extension<SessionContext>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let quantity = body.quantity.as_text();
    let added = ctx
        .session()
        .with_inventory(|inv| inv.add(&body.name, &quantity));

    match added {
        Ok(item) => {
            tracing::info!(
                session_id = %ctx.session_id(),
                item_id = %item.id_typed(),
                quantity = item.quantity().get(),
                "item added"
            );
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "message": dto::added_message(&item),
                    "item": item,
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(session_id = %ctx.session_id(), error = %e, "item rejected");
            errors::inventory_error_to_response(e)
        }
    }
}

/// Deleting an unknown (or malformed) id still reports success.
pub async fn remove_item(
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = match id.parse::<ItemId>() {
        Ok(item_id) => ctx.session().with_inventory(|inv| inv.remove(item_id)),
        Err(e) => {
            tracing::debug!(session_id = %ctx.session_id(), error = %e, "malformed item id");
            false
        }
    };

    tracing::info!(session_id = %ctx.session_id(), item_id = %id, removed, "item remove requested");

    Json(serde_json::json!({
        "removed": removed,
        "message": dto::ITEM_REMOVED_MESSAGE,
    }))
}
