pub mod admin;
pub mod article_detail;
pub mod articles;
pub mod author_detail;
pub mod authors;
pub mod banned;
pub mod categories;
pub mod category_detail;
pub mod directory;
pub mod github_callback;
pub mod home;
pub mod not_found;
