use parley_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(?name, "host timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Formats the day of `date` like "Jan 5, 2024"
pub fn format_day(date: &Time) -> String {
    format_day_in(date, &local_tz())
}

fn format_day_in(date: &Time, tz: &chrono_tz::Tz) -> String {
    date.with_timezone(tz).format("%b %-d, %Y").to_string()
}

pub fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(msg) {
            tracing::error!(?err, "failed showing alert");
        }
    }
}

/// Asks the user a yes/no question, treating any failure as "no"
pub fn confirm(msg: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(msg).ok())
        .unwrap_or(false)
}
