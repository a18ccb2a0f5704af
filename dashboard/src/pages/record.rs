//! Copy and links shared by the product and category pages.

use inventory_router::FormMode;

/// The kind of record a detail or form page works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordKind {
    /// Capitalized name, e.g. `Product`.
    pub name: &'static str,
    /// Lowercase name used in log lines.
    pub noun: &'static str,
    pub list_href: &'static str,
    pub delete_prompt: &'static str,
}

pub const PRODUCT: RecordKind = RecordKind {
    name: "Product",
    noun: "product",
    list_href: "/products",
    delete_prompt: "Are you sure you want to delete this product?",
};

pub const CATEGORY: RecordKind = RecordKind {
    name: "Category",
    noun: "category",
    list_href: "/categories",
    delete_prompt: "Are you sure you want to delete this category? \
                    This will also affect associated products.",
};

impl RecordKind {
    pub fn detail_href(&self, id: &str) -> String {
        format!("{}/{}", self.list_href, id)
    }

    pub fn edit_href(&self, id: &str) -> String {
        format!("{}/{}/edit", self.list_href, id)
    }

    pub fn new_href(&self) -> String {
        format!("{}/new", self.list_href)
    }

    /// Form heading, `Create New Product` or `Edit Product`.
    pub fn form_heading(&self, mode: &FormMode) -> String {
        match mode {
            FormMode::Create => format!("Create New {}", self.name),
            FormMode::Edit(_) => format!("Edit {}", self.name),
        }
    }

    pub fn submit_label(&self, mode: &FormMode) -> String {
        match mode {
            FormMode::Create => format!("Create {}", self.name),
            FormMode::Edit(_) => format!("Update {}", self.name),
        }
    }

    /// Log line written when the form is submitted.
    pub fn submit_message(&self, mode: &FormMode) -> String {
        match mode {
            FormMode::Create => format!("Create {}", self.noun),
            FormMode::Edit(id) => format!("Update {}: {}", self.noun, id),
        }
    }

    pub fn delete_message(&self, id: &str) -> String {
        format!("Delete {}: {}", self.noun, id)
    }

    /// Identifier line on the detail page, e.g. `Product ID: 42`.
    pub fn id_line(&self, id: &str) -> String {
        format!("{} ID: {}", self.name, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        assert_eq!(PRODUCT.detail_href("42"), "/products/42");
        assert_eq!(PRODUCT.edit_href("42"), "/products/42/edit");
        assert_eq!(CATEGORY.new_href(), "/categories/new");
    }

    #[test]
    fn test_form_copy_follows_mode() {
        let create = FormMode::Create;
        let edit = FormMode::from_id(Some("7".to_string()));

        assert_eq!(PRODUCT.form_heading(&create), "Create New Product");
        assert_eq!(PRODUCT.form_heading(&edit), "Edit Product");
        assert_eq!(CATEGORY.submit_label(&create), "Create Category");
        assert_eq!(CATEGORY.submit_label(&edit), "Update Category");
    }

    #[test]
    fn test_log_messages() {
        assert_eq!(PRODUCT.submit_message(&FormMode::Create), "Create product");
        assert_eq!(
            CATEGORY.submit_message(&FormMode::Edit("3".to_string())),
            "Update category: 3"
        );
        assert_eq!(PRODUCT.delete_message("9"), "Delete product: 9");
    }

    #[test]
    fn test_category_prompt_warns_about_products() {
        assert!(CATEGORY.delete_prompt.ends_with("This will also affect associated products."));
        assert_eq!(PRODUCT.id_line("1"), "Product ID: 1");
    }
}
