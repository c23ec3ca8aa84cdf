/// Configuration for the frontend application

// API base URL - 编译时从环境变量读取，默认本地开发地址
// 生产环境通过 workflow 设置 API_BASE_URL 环境变量
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Articles shown per page on listing pages.
pub const ARTICLES_PER_PAGE: usize = 6;

/// Authors shown per page on the authors listing.
pub const AUTHORS_PER_PAGE: usize = 9;

/// Articles shown in the home page "latest" strip.
pub const HOME_LATEST_COUNT: usize = 3;

/// GitHub OAuth client id, empty when sign-in is not configured.
pub const GITHUB_CLIENT_ID: &str = match option_env!("GITHUB_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

/// Id of the element listing pages scroll back to when the page changes.
pub const LIST_TOP_ANCHOR: &str = "list-top";
