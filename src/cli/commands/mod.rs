mod add;
mod list;
mod remove;
mod show;

pub use add::cmd_add_product;
pub use list::cmd_list_products;
pub use remove::cmd_remove_product;
pub use show::cmd_show_product;
