//! Reading raw form input into payload values.
//!
//! Blank numeric inputs become `None`, which every payload serialises as an
//! explicit `null` under its key.

/// Parse the leading integer of an input, ignoring whatever follows it
/// ("3.7" → 3, "12kg" → 12, "1e3" → 1).
pub fn optional_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len() - sign_len);
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse::<i64>().ok()
}

pub fn optional_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split on `separator`, trim each item and drop the empty ones.
pub fn split_items(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated lists (equipment, goals).
pub fn comma_list(raw: &str) -> Vec<String> {
    split_items(raw, ',')
}

/// One item per line (instructions).
pub fn line_list(raw: &str) -> Vec<String> {
    split_items(raw, '\n')
}

/// Keep `selected` in the order of `table`, the order the checkboxes render in.
pub fn checked_in_order(table: &[(&str, &str)], selected: &[String]) -> Vec<String> {
    table
        .iter()
        .filter(|(code, _)| selected.iter().any(|s| s == code))
        .map(|(code, _)| code.to_string())
        .collect()
}

/// Toggle `code` in a checkbox selection.
pub fn toggle(selected: &mut Vec<String>, code: &str, checked: bool) {
    let present = selected.iter().any(|s| s == code);
    if checked && !present {
        selected.push(code.to_string());
    } else if !checked {
        selected.retain(|s| s != code);
    }
}
