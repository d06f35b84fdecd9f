mod developer;
mod home;
mod login;
mod post;

pub use developer::Developer;
pub use home::Home;
pub use login::{ClientLogin, UserLogin};
pub use post::CreatePost;

