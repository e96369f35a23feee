//! HTML fragments for the list containers.
//!
//! Cards are plain strings so a whole list can be swapped into its container
//! in one assignment. Every interpolated value goes through [`escape`].

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Rendered HTML for one card or one whole container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Static texts for an empty list.
#[derive(Debug, Clone, Copy)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn loading(message: &str) -> Fragment {
    Fragment(format!(r#"<div class="loading">{}</div>"#, escape(message)))
}

pub fn empty_state(state: &EmptyState) -> Fragment {
    Fragment(format!(
        r#"<div class="empty-state"><h3>{}</h3><p>{}</p></div>"#,
        escape(state.title),
        escape(state.hint)
    ))
}

/// Error block shown in place of the list, e.g. "No se pudo cargar las rutinas: HTTP 500".
pub fn load_error(prefix: &str, error: &impl Display) -> Fragment {
    Fragment(format!(
        r#"<div class="empty-state"><h3>Error</h3><p>{}: {}</p></div>"#,
        escape(prefix),
        escape(&error.to_string())
    ))
}

/// Either the empty state or every record's card, joined.
pub fn list<T>(records: &[T], empty: &EmptyState, card: impl Fn(&T) -> Fragment) -> Fragment {
    if records.is_empty() {
        return empty_state(empty);
    }
    Fragment(records.iter().map(|r| card(r).into_string()).collect())
}

/// `<p><strong>label:</strong> value</p>` with the value escaped.
pub fn field(label: &str, value: impl Display) -> String {
    field_html(label, &escape(&value.to_string()))
}

/// Like [`field`] but `html` is already safe markup.
pub fn field_html(label: &str, html: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", escape(label), html)
}

pub fn optional_field<V: Display>(label: &str, value: Option<V>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => field(label, v),
        Some(v) => field(label, format!("{} {}", v, unit)),
        None => String::new(),
    }
}

pub fn list_field(label: &str, items: &[String], joined: impl FnOnce(&[String]) -> String) -> String {
    if items.is_empty() {
        String::new()
    } else {
        field(label, joined(items))
    }
}

pub fn badge(class: &str, label: &str) -> String {
    format!(
        r#"<span class="badge {}">{}</span>"#,
        escape(class),
        escape(label)
    )
}

pub fn tag(class: &str, label: &str) -> String {
    format!(r#"<span class="tag {}">{}</span>"#, escape(class), escape(label))
}

/// Card frame shared by every resource.
pub struct Card<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub body: Vec<String>,
    pub tags: Vec<String>,
    /// Record id for the delete button; `None` for resources without delete.
    pub delete_id: Option<i64>,
}

impl Card<'_> {
    pub fn render(self) -> Fragment {
        let actions = match self.delete_id {
            Some(id) => format!(
                r#"<div class="card-actions"><button class="btn btn-danger" data-delete-id="{}">Eliminar</button></div>"#,
                id
            ),
            None => String::new(),
        };
        Fragment(format!(
            concat!(
                r#"<div class="card">"#,
                r#"<div class="card-header"><div>"#,
                r#"<div class="card-title">{}</div>"#,
                r#"<div class="card-id">{}</div>"#,
                r#"</div></div>"#,
                r#"<div class="card-body">{}</div>"#,
                r#"<div class="card-tags">{}</div>"#,
                "{}",
                r#"</div>"#,
            ),
            escape(self.title),
            escape(self.subtitle),
            self.body.concat(),
            self.tags.concat(),
            actions
        ))
    }
}

/// Format a backend timestamp as `d/m/yyyy, H:MM:SS` in the viewer's zone.
pub fn timestamp(raw: &str) -> String {
    timestamp_in(raw, &Local)
}

/// Offset-carrying timestamps are converted to `zone`; naive ones are taken
/// as already local. Anything unparseable is returned as is.
fn timestamp_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    const FORMAT: &str = "%-d/%-m/%Y, %-H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(zone).format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    raw.to_string()
}
