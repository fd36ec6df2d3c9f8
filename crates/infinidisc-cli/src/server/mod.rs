//! HTTP catalog server.
//!
//! | route | response |
//! |---|---|
//! | `GET /` | server info |
//! | `GET /api/records` | `{ "records": [...] }` |
//! | `GET /api/album-art/{index}` | `{ "albumArt": "data:image/png;base64,..." }` |
//! | `GET /api/album-art/{index}/raw` | PNG bytes |
//! | `GET /api/audio/{index}` | `{ "audio": "data:audio/wav;base64,..." }` |
//! | `GET /api/audio/{index}/raw` | WAV bytes |

mod api;
mod error;
mod http_layers;
#[allow(clippy::module_inception)]
mod server;
mod state;


pub use api::data_url;
pub use error::ApiError;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub use state::ServerState;
