//! Host boundary — adaptation into the host tooling's diagnostic records.
//!
//! The diagnostics pipeline uses its own types throughout; conversion to
//! the host's record shape happens once, here, at the boundary.

mod host;

pub use host::{
    HostCategory, HostDiagnostic, HostMessage, to_host_diagnostic, to_host_diagnostics,
    to_host_message,
};
