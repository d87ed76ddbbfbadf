pub mod pdf_reader;
pub mod search_session;

pub use pdf_reader::{validate_input_path, PdfTextExtractor};
pub use search_session::SearchSession;
