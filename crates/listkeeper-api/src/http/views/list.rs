//! Single list page and the rename form.

use listkeeper_core::view::{is_list_complete, item_counts};
use listkeeper_types::list::{TodoItem, TodoList};
use listkeeper_types::session::Flash;

use super::layout::{escape, page};

/// `GET /lists/{list_number}`.
pub fn list_page(index: usize, list: &TodoList, flashes: &[Flash]) -> String {
    let name = escape(&list.name);
    let header_class = if is_list_complete(list) {
        " class=\"complete\""
    } else {
        ""
    };

    let mut body = format!(
        "<header{header_class}>\n\
         <h1>{name} <small>{counts}</small></h1>\n\
         <a href=\"/edit_list/{index}\">Edit list</a>\n\
         </header>\n\
         <form class=\"inline\" method=\"post\" action=\"/lists/{index}/complete_all\">\n\
         <button type=\"submit\">Complete all</button>\n\
         </form>\n",
        counts = item_counts(list),
    );

    body.push_str("<ul class=\"todos\">\n");
    for (item_index, item) in list.todos.iter().enumerate() {
        body.push_str(&item_row(index, item_index, item));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<form method=\"post\" action=\"/lists/{index}/list_item\">\n\
         <label for=\"list_item\">New item</label>\n\
         <input id=\"list_item\" name=\"list_item\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <p><a href=\"/lists\">All lists</a></p>\n"
    ));

    page(&list.name, flashes, &body)
}

fn item_row(list_index: usize, item_index: usize, item: &TodoItem) -> String {
    let (class, toggle_label) = if item.completed {
        (" class=\"complete\"", "Undo")
    } else {
        ("", "Done")
    };
    format!(
        "<li{class}>\n\
         <form class=\"inline\" method=\"post\" action=\"/lists/{list_index}/list_item/{item_index}/complete\">\n\
         <input type=\"hidden\" name=\"completed\" value=\"{next}\">\n\
         <button type=\"submit\">{toggle_label}</button>\n\
         </form>\n\
         <span class=\"name\">{name}</span>\n\
         <form class=\"inline\" method=\"post\" action=\"/lists/{list_index}/list_item/{item_index}/delete\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         </li>\n",
        next = !item.completed,
        name = escape(&item.name),
    )
}

/// `GET /edit_list/{list_number}`, and the re-render after a rejected
/// rename. `proposed` refills the input with what the visitor typed.
pub fn edit_list_form(
    index: usize,
    list: &TodoList,
    flashes: &[Flash],
    proposed: Option<&str>,
) -> String {
    let body = format!(
        "<h1>Editing {name}</h1>\n\
         <form method=\"post\" action=\"/edit_list/{index}\">\n\
         <label for=\"new_name\">List name</label>\n\
         <input id=\"new_name\" name=\"new_name\" value=\"{value}\" autofocus>\n\
         <button type=\"submit\">Save</button>\n\
         <a href=\"/lists/{index}\">Cancel</a>\n\
         </form>\n\
         <form method=\"post\" action=\"/lists/delete\">\n\
         <input type=\"hidden\" name=\"list_number\" value=\"{index}\">\n\
         <button type=\"submit\">Delete list</button>\n\
         </form>\n",
        name = escape(&list.name),
        value = escape(proposed.unwrap_or(&list.name)),
    );
    page(&format!("Editing {}", list.name), flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chores() -> TodoList {
        let mut list = TodoList::new("Chores");
        list.todos.push(TodoItem::new("Sweep"));
        list.todos.push(TodoItem {
            completed: true,
            ..TodoItem::new("<Mop>")
        });
        list
    }

    #[test]
    fn test_list_page_item_forms() {
        let html = list_page(2, &chores(), &[]);

        assert!(html.contains("<small>1/2</small>"));
        assert!(html.contains("action=\"/lists/2/list_item/0/complete\""));
        assert!(html.contains("action=\"/lists/2/list_item/1/delete\""));
        assert!(html.contains("action=\"/lists/2/complete_all\""));
        assert!(html.contains("action=\"/lists/2/list_item\""));
        assert!(html.contains("href=\"/edit_list/2\""));
        assert!(html.contains("&lt;Mop&gt;"));
    }

    #[test]
    fn test_list_page_toggle_sends_negation() {
        let html = list_page(0, &chores(), &[]);
        // Sweep is open, so its toggle completes it; Mop is done, so it reopens.
        let sweep = html.find("Sweep").unwrap();
        let mop = html.find("&lt;Mop&gt;").unwrap();
        let first_true = html.find("name=\"completed\" value=\"true\"").unwrap();
        let first_false = html.find("name=\"completed\" value=\"false\"").unwrap();
        assert!(first_true < sweep);
        assert!(sweep < first_false && first_false < mop);
    }

    #[test]
    fn test_complete_list_header_class() {
        let mut list = chores();
        list.todos.iter_mut().for_each(|t| t.completed = true);
        assert!(list_page(0, &list, &[]).contains("<header class=\"complete\">"));
        assert!(!list_page(0, &chores(), &[]).contains("<header class=\"complete\">"));
    }

    #[test]
    fn test_edit_form_prefers_proposed_name() {
        let list = chores();
        let html = edit_list_form(1, &list, &[], None);
        assert!(html.contains("value=\"Chores\""));
        assert!(html.contains("action=\"/edit_list/1\""));
        assert!(html.contains("name=\"list_number\" value=\"1\""));

        let html = edit_list_form(1, &list, &[Flash::error("nope")], Some("Other"));
        assert!(html.contains("value=\"Other\""));
        assert!(html.contains("nope"));
    }
}
