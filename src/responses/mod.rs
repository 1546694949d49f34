pub mod errors;
pub mod html;
pub mod redirect;
pub mod text;
pub mod xlsx;

pub use errors::{error_to_response, ResultResp};

pub use html::html_response;
pub use redirect::redirect_response;
pub use text::text_response;
pub use xlsx::xlsx_response;
