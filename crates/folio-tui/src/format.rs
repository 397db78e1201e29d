use chrono::NaiveDateTime;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable file size: 1024-based scaling with up to two decimals,
/// trailing zeros trimmed. `0` is special-cased as `0 Bytes`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".into();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(i32::try_from(exp).unwrap_or(0));
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", trim_decimals(rounded), SIZE_UNITS[exp])
}

fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Format a server upload timestamp for display. The backend sends local
/// datetimes without an offset; anything unparseable is shown verbatim.
#[must_use]
pub fn format_upload_date(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_owned(),
    }
}
