use std::fmt;

/// Which utility is running. Selects the system prompt, endpoint source and output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    CommitMessage,
    FileName,
}

impl ToolKind {
    #[must_use]
    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::CommitMessage => "gpt-commit",
            Self::FileName => "gpt-filename",
        }
    }

    /// Environment variable holding the endpoint, for tools that require one.
    #[must_use]
    pub const fn endpoint_var(self) -> Option<&'static str> {
        match self {
            Self::CommitMessage => None,
            Self::FileName => Some("GPT_FILENAME_ENDPOINT"),
        }
    }
}

/// Pipeline stage of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Collecting,
    Building,
    Calling,
    Validating,
    Emitting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Collecting => "collecting",
            Self::Building => "building",
            Self::Calling => "calling",
            Self::Validating => "validating",
            Self::Emitting => "emitting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}
