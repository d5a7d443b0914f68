pub mod cookie;
pub mod logout;
pub mod session;
pub mod token;

pub use logout::handle_logout;
pub use token::issue_session;
