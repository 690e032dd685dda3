//! Server-rendered HTML for the page routes.
//!
//! Pages are small enough that they are assembled with `format!`; every
//! database-sourced string goes through [`escape`] on the way in.

pub mod course;
pub mod student;
pub mod teacher;

use axum::response::Html;
use chrono::{NaiveDate, NaiveDateTime};

/// Display format for calendar dates on every page.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Escape a nullable column, rendering `NULL` as an empty string.
pub(crate) fn text(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

pub(crate) fn date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub(crate) fn date_of(value: NaiveDateTime) -> String {
    date(value.date())
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> Html<String> {
    let title = escape(title);
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/StudentPage/List\">Students</a> | \
         <a href=\"/TeacherPage/List\">Teachers</a> | \
         <a href=\"/CoursePage/List\">Courses</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    ))
}

/// Landing page linking the three list views.
pub fn index() -> Html<String> {
    layout(
        "School Records",
        "<ul>\n\
         <li><a href=\"/StudentPage/List\">Students</a></li>\n\
         <li><a href=\"/TeacherPage/List\">Teachers</a></li>\n\
         <li><a href=\"/CoursePage/List\">Courses</a></li>\n\
         </ul>",
    )
}

/// Error page shown by page routes in place of a JSON error body.
pub fn error_page(status: u16, message: &str) -> Html<String> {
    layout(
        &format!("Error {status}"),
        &format!("<p class=\"error\">{}</p>", escape(message)),
    )
}

/// Render a `<table>` with the given header cells and pre-rendered rows.
pub(crate) fn table(headers: &[&str], rows: Vec<String>) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let body: String = rows.concat();
    format!("<table>\n<thead><tr>{head}</tr></thead>\n<tbody>\n{body}</tbody>\n</table>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn null_text_renders_empty() {
        assert_eq!(text(&None), "");
        assert_eq!(text(&Some("<b>".into())), "&lt;b&gt;");
    }

    #[test]
    fn layout_escapes_title() {
        let Html(page) = layout("<Students>", "<p>x</p>");
        assert!(page.contains("<title>&lt;Students&gt;</title>"));
        assert!(page.contains("<p>x</p>"));
    }

    #[test]
    fn dates_use_iso_format() {
        let d = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(date(d), "2022-01-01");
        assert_eq!(date_of(d.and_hms_opt(9, 30, 0).unwrap()), "2022-01-01");
    }
}
