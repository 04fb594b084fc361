//! Kiosk Edge - checkout printing for self-order kiosks
//!
//! # Module structure
//!
//! ```text
//! kiosk-edge/src/
//! ├── core/          # configuration
//! ├── printing/      # classifier, renderers, scheduler, dispatch
//! └── utils/         # logging
//! ```

pub mod core;
pub mod printing;
pub mod utils;

// Re-export public types
pub use core::Config;
pub use printing::{
    DispatchAdapter, DispatchError, DispatchHandles, PrintSettings, RenderedDocuments,
    TokioScheduler, probe_host_bridge,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
