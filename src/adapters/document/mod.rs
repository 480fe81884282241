//! Document adapters - renderer implementations.

mod pdf_renderer;

pub use pdf_renderer::PdfRenderer;
