// command.rs - User intents coming from the input layer

/// Everything the input collaborator can ask the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleCell { row: usize, col: usize },
    Start,
    TogglePause,
    Stop,
    /// Raw text from the size inputs; validated by the session.
    ApplySize { cols: String, rows: String },
    StepBackward,
    StepForward,
    RandomFill,
    /// Index into `patterns::PATTERNS`.
    ApplyPattern(usize),
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleCell { .. } => "toggle-cell",
            Self::Start => "start",
            Self::TogglePause => "toggle-pause",
            Self::Stop => "stop",
            Self::ApplySize { .. } => "apply-size",
            Self::StepBackward => "step-backward",
            Self::StepForward => "step-forward",
            Self::RandomFill => "random-fill",
            Self::ApplyPattern(_) => "apply-pattern",
            Self::Clear => "clear",
        }
    }
}
