mod pdf;
mod text_sink;

pub use pdf::PdfTextExtractor;
pub use text_sink::DirectoryTextSink;
