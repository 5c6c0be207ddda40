//! Domain services: QR generation and upload storage.

pub mod qr;
pub mod upload;

pub use upload::UploadStore;
