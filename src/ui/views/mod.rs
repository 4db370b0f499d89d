pub mod load_view;
pub mod user_list_view;
