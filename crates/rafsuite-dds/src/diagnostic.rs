//! Non-fatal header inconsistencies.

use thiserror::Error;

use crate::flags::PixelFormatFlags;
use crate::header::FourCC;

/// A header inconsistency that was reported but did not stop decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The stored pitch/linear size disagrees with the computed one.
    #[error("unexpected pitch size {stored}, expected {expected}")]
    PitchMismatch { stored: u32, expected: u32 },

    /// The declared mipmap count disagrees with the full chain length.
    #[error("unexpected mipmap count {declared}, expected {expected}")]
    MipMapCountMismatch { declared: u32, expected: u32 },

    /// The pixel format did not resolve to a known layout.
    #[error("unknown pixel format (fourcc {}, flags {flags:?})", four_cc_label(.four_cc))]
    UnknownFormat {
        four_cc: Option<FourCC>,
        flags: PixelFormatFlags,
    },
}

fn four_cc_label(four_cc: &Option<FourCC>) -> String {
    four_cc.map_or_else(|| "none".to_string(), |code| code.to_string())
}

/// Record a diagnostic and emit it as a warning.
pub(crate) fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    tracing::warn!(%diagnostic, "inconsistent DDS header");
    diagnostics.push(diagnostic);
}
