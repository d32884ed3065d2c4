pub mod assess;

#[derive(Debug)]
pub enum Action {
    Assess(assess::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Assess(args) => assess::execute(args).await,
        }
    }
}
