pub mod docx_writer;
pub mod google_scraper;
pub mod pdf_writer;
pub mod question_splitter;
pub mod traits;

pub use docx_writer::DocxWriter;
pub use google_scraper::GoogleScraper;
pub use pdf_writer::PdfWriter;
pub use question_splitter::{parse_questions, split_questions};
pub use traits::{DocumentTextExtractor, ReportRenderer, ScrapedPage, SearchScraper};
