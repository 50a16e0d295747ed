//! HTML handlers for the public site.

mod delete;
mod home;
mod redirect;

pub use delete::delete_handler;
pub use home::{IndexTemplate, ShortenForm, home_handler, web_shorten_handler};
pub use redirect::redirect_handler;
