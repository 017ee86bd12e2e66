/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Human-readable relative timestamps in Brazilian Portuguese.
//!
//! Each band is checked in order. A band with a `unit` recomputes the
//! difference in that unit; a band without one reuses the previous unit.
//! The first band whose rounded count fits under `max` wins. A count of one
//! or less falls back to the singular phrase of the band before it.

use chrono::{DateTime, Utc};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const MONTH_MS: f64 = 365.25 / 12.0 * DAY_MS;
const YEAR_MS: f64 = 12.0 * MONTH_MS;

struct Band {
    phrase: &'static str,
    max: Option<u64>,
    unit_ms: Option<f64>,
}

const BANDS: [Band; 11] = [
    Band { phrase: "poucos segundos", max: Some(44), unit_ms: Some(SECOND_MS) },
    Band { phrase: "um minuto", max: Some(89), unit_ms: None },
    Band { phrase: "%d minutos", max: Some(44), unit_ms: Some(MINUTE_MS) },
    Band { phrase: "uma hora", max: Some(89), unit_ms: None },
    Band { phrase: "%d horas", max: Some(21), unit_ms: Some(HOUR_MS) },
    Band { phrase: "um dia", max: Some(35), unit_ms: None },
    Band { phrase: "%d dias", max: Some(25), unit_ms: Some(DAY_MS) },
    Band { phrase: "um mês", max: Some(45), unit_ms: None },
    Band { phrase: "%d meses", max: Some(10), unit_ms: Some(MONTH_MS) },
    Band { phrase: "um ano", max: Some(17), unit_ms: None },
    Band { phrase: "%d anos", max: None, unit_ms: Some(YEAR_MS) },
];

/// Describe `target` relative to `now`, e.g. `"há 3 dias"` or `"em uma hora"`.
pub fn relative_to(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (target - now).num_milliseconds() as f64;

    let mut result = 0.0_f64;
    let mut phrase = String::new();
    for (i, band) in BANDS.iter().enumerate() {
        if let Some(unit_ms) = band.unit_ms {
            result = diff_ms / unit_ms;
        }
        let count = result.abs().round() as u64;
        if band.max.is_none_or(|max| count <= max) {
            let band = if count <= 1 && i > 0 { &BANDS[i - 1] } else { band };
            phrase = band.phrase.replace("%d", &count.to_string());
            break;
        }
    }

    if result > 0.0 {
        format!("em {phrase}")
    } else {
        format!("há {phrase}")
    }
}

/// Current wall-clock time from the browser.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Describe `target` relative to the browser clock.
pub fn from_now(target: DateTime<Utc>) -> String {
    relative_to(target, now())
}
