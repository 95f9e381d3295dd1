//! Info page route

use std::fmt::Display;
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use chrono::{DateTime, Local, TimeZone};

use super::errors::ApiResult;
use super::person_routes::PhonebookState;

/// Create the `/info` route
pub fn info_routes(state: Arc<PhonebookState>) -> Router {
    Router::new()
        .route("/info", get(info_handler))
        .with_state(state)
}

async fn info_handler(State(state): State<Arc<PhonebookState>>) -> ApiResult<Html<String>> {
    let total = state.store.count().await?;
    tracing::debug!(total, "rendering info page");
    Ok(Html(render_info(total, &Local::now())))
}

/// Render the info fragment, e.g.
/// `<p>Phonebook has info for 4 people</p><p>Fri Oct 16 2026 09:30:00 GMT+0300</p>`
pub fn render_info<Tz>(total: usize, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "<p>Phonebook has info for {} people</p><p>{}</p>",
        total,
        now.format("%a %b %d %Y %H:%M:%S GMT%z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_render_info() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        assert_eq!(
            render_info(4, &now),
            "<p>Phonebook has info for 4 people</p><p>Fri Oct 16 2026 09:30:00 GMT+0300</p>"
        );
    }
}
