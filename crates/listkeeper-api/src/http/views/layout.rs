//! Page shell, flash rendering and HTML escaping shared by every view.

use axum::http::StatusCode;

use listkeeper_types::session::Flash;

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
header { display: flex; justify-content: space-between; align-items: baseline; }
ul.lists, ul.todos { list-style: none; padding: 0; }
ul.lists li, ul.todos li { display: flex; align-items: center; gap: 0.5rem; padding: 0.4rem 0; border-bottom: 1px solid #ddd; }
li.complete a, li.complete .name { color: #888; text-decoration: line-through; }
.flash { padding: 0.5rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.flash.error { background: #fdecea; color: #8a1c1c; }
.flash.success { background: #e8f5e9; color: #1b5e20; }
form.inline { display: inline; margin: 0; }
meter { width: 6rem; }
";

/// Escape text for use in HTML element content and quoted attributes.
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

/// Wrap `body` in the full document, with pending flashes above it.
pub fn page(title: &str, flashes: &[Flash], body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Listkeeper</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         {flashes}\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        style = STYLE,
        flashes = render_flashes(flashes),
    )
}

fn render_flashes(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|flash| {
            format!(
                "<div class=\"flash {}\"><p>{}</p></div>\n",
                flash.kind,
                escape(&flash.message)
            )
        })
        .collect()
}

/// Standalone page for error responses.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/lists\">Back to all lists</a></p>\n",
        escape(heading),
        escape(message)
    );
    page(heading, &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_page_renders_flashes_escaped() {
        let html = page(
            "Lists",
            &[Flash::error("<oops>"), Flash::success("done")],
            "<p>body</p>",
        );
        assert!(html.contains("<div class=\"flash error\"><p>&lt;oops&gt;</p></div>"));
        assert!(html.contains("<div class=\"flash success\"><p>done</p></div>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<title>Lists - Listkeeper</title>"));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(StatusCode::NOT_FOUND, "list 3 not found");
        assert!(html.contains("<h1>Not Found</h1>"));
        assert!(html.contains("list 3 not found"));
    }
}
