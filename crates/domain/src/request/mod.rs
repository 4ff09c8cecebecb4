//! HTTP request templates

mod method;
mod template;

pub use method::HttpMethod;
pub use template::RequestTemplate;
