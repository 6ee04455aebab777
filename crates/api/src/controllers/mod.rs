//! Page controllers.
//!
//! One controller per page. Each owns the transient UI state of its page
//! (inputs, [`FormStatus`](toolshelf_core::submission::FormStatus), loaded
//! lists) and drives a repository in response to user actions. Controllers
//! are the only layer that turns errors into user-visible messages; those
//! messages never carry an error code.
//!
//! Views are plain serializable snapshots that a client renders from.

pub mod add_category;
pub mod add_tool;
pub mod home;
pub mod update_category;
pub mod update_tool;

pub use add_category::AddCategoryController;
pub use add_tool::AddToolController;
pub use home::HomeController;
pub use update_category::UpdateCategoryController;
pub use update_tool::UpdateToolController;

use url::form_urlencoded;

/// Navigation target after a successful add-tool or update-tool submit.
pub const HOME_PATH: &str = "/";

/// Page path for editing one category.
pub fn update_category_path(category_id: &str) -> String {
    page_path("/update-category", "categoryId", category_id)
}

/// Page path for editing one tool.
pub fn update_tool_path(tool_id: &str) -> String {
    page_path("/update-tool", "toolId", tool_id)
}

/// `path?name=value` with the value form-encoded.
fn page_path(path: &str, name: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(name, value)
        .finish();
    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_paths_carry_plain_ids_verbatim() {
        assert_eq!(
            update_category_path("0190a1b2-c3d4"),
            "/update-category?categoryId=0190a1b2-c3d4"
        );
        assert_eq!(update_tool_path("t1"), "/update-tool?toolId=t1");
    }

    #[test]
    fn update_paths_encode_query_delimiters() {
        assert_eq!(
            update_category_path("a&toolId=b"),
            "/update-category?categoryId=a%26toolId%3Db"
        );
        assert_eq!(update_tool_path("x y#z"), "/update-tool?toolId=x+y%23z");
    }
}
