//! List overview and the new-list form.

use listkeeper_core::view::{item_counts, list_css_class, percent_remaining};
use listkeeper_types::list::TodoList;
use listkeeper_types::session::Flash;

use super::layout::{escape, page};

/// `GET /lists`: every list with its progress.
pub fn overview(lists: &[TodoList], flashes: &[Flash]) -> String {
    let mut body = String::from(
        "<header>\n<h1>Your lists</h1>\n<a href=\"/lists/new\">New list</a>\n</header>\n",
    );

    if lists.is_empty() {
        body.push_str("<p>No lists yet.</p>\n");
    } else {
        body.push_str("<ul class=\"lists\">\n");
        for (index, list) in lists.iter().enumerate() {
            body.push_str(&overview_row(index, list));
        }
        body.push_str("</ul>\n");
    }

    page("Your lists", flashes, &body)
}

fn overview_row(index: usize, list: &TodoList) -> String {
    let class = list_css_class(list)
        .map(|c| format!(" class=\"{c}\""))
        .unwrap_or_default();
    format!(
        "<li{class}><a href=\"/lists/{index}\">{name}</a> \
         <meter min=\"0\" max=\"1\" value=\"{remaining:.2}\" title=\"remaining\"></meter> \
         <span class=\"count\">{counts}</span></li>\n",
        name = escape(&list.name),
        remaining = percent_remaining(list),
        counts = item_counts(list),
    )
}

/// `GET /lists/new`, and the re-render after a rejected name. `previous`
/// refills the input so the visitor can fix it.
pub fn new_list_form(flashes: &[Flash], previous: &str) -> String {
    let body = format!(
        "<h1>New list</h1>\n\
         <form method=\"post\" action=\"/lists\">\n\
         <label for=\"list_name\">List name</label>\n\
         <input id=\"list_name\" name=\"list_name\" value=\"{value}\" autofocus>\n\
         <button type=\"submit\">Save</button>\n\
         <a href=\"/lists\">Cancel</a>\n\
         </form>\n",
        value = escape(previous),
    );
    page("New list", flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_types::list::TodoItem;

    #[test]
    fn test_overview_empty() {
        let html = overview(&[], &[]);
        assert!(html.contains("No lists yet."));
    }

    #[test]
    fn test_overview_rows_link_by_position() {
        let mut done = TodoList::new("Done <list>");
        done.todos.push(TodoItem {
            completed: true,
            ..TodoItem::new("x")
        });
        let lists = vec![TodoList::new("Groceries"), done];

        let html = overview(&lists, &[]);

        assert!(html.contains("<li><a href=\"/lists/0\">Groceries</a>"));
        assert!(html.contains("<li class=\"complete\"><a href=\"/lists/1\">Done &lt;list&gt;</a>"));
        assert!(html.contains("<span class=\"count\">0/0</span>"));
        assert!(html.contains("<span class=\"count\">0/1</span>"));
        assert!(html.contains("value=\"1.00\""));
        assert!(html.contains("value=\"0.00\""));
    }

    #[test]
    fn test_new_list_form_refills_escaped_input() {
        let html = new_list_form(&[Flash::error("bad")], "\"quoted\"");
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
        assert!(html.contains("action=\"/lists\""));
        assert!(html.contains("flash error"));
    }
}
