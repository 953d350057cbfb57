//! Pipeline stages.

use std::fmt;

/// Stage of one export run.
///
/// A run moves `Idle → Decoding → Serializing → Mapping → Assembling` and
/// ends in `Done` or `Failed`. Both end states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportStage {
    /// Not started.
    #[default]
    Idle,
    /// Parsing mesh bytes.
    Decoding,
    /// Writing model markup.
    Serializing,
    /// Translating settings into profile text.
    Mapping,
    /// Building the archive.
    Assembling,
    /// A package was produced.
    Done,
    /// The run stopped with an error.
    Failed,
}

impl ExportStage {
    /// Stage that follows this one on success, if any.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Decoding),
            Self::Decoding => Some(Self::Serializing),
            Self::Serializing => Some(Self::Mapping),
            Self::Mapping => Some(Self::Assembling),
            Self::Assembling => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Whether the run has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Lowercase stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Decoding => "decoding",
            Self::Serializing => "serializing",
            Self::Mapping => "mapping",
            Self::Assembling => "assembling",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
