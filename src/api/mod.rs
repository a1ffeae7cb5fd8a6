/// HTTP surface of the processing backend.
///
/// * `POST /api/process`         – multipart `prompt` (+ optional `file`) → [`types::ResultBundle`]
/// * `GET  /api/download/{type}` – raw artifact bytes for [`types::DownloadKind`]

pub mod client;
pub mod error;
pub mod types;
