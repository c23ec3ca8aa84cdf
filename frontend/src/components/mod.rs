// Reusable components live here.

pub mod article_card;
pub mod ban_notice;
pub mod comments;
pub mod directory_grid;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod pagination;
pub mod toc;
