pub mod category;
pub mod draft;
pub mod post;
pub mod session;
pub mod stats;
pub mod utils;
pub mod validation;
