use crate::calculation::{
    evaluate, CalculationRequest, CalculationResult, CalculationType, HistoryRepository,
    PreconditionViolation,
};
use crate::load::LoadConfiguration;
use crate::policy::LoadPolicy;
use crate::repository::{RepositoryError, SpecificationRepository};

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionViolation),
}

/// Caller side of the engine: owns the policy and both repositories
///
/// Looks a crane up, evaluates, and records the result. Rejected requests
/// leave the history untouched.
#[derive(Debug)]
pub struct LoadCalculationWorkspace<S: SpecificationRepository, H: HistoryRepository> {
    pub policy: LoadPolicy,
    specifications: S,
    history: H,
}

impl<S: SpecificationRepository, H: HistoryRepository> LoadCalculationWorkspace<S, H> {
    pub fn new(policy: LoadPolicy, specifications: S, history: H) -> Self {
        Self {
            policy,
            specifications,
            history,
        }
    }

    pub fn run(
        &mut self,
        crane_id: &str,
        load: LoadConfiguration,
        calculation_type: CalculationType,
    ) -> Result<CalculationResult, WorkspaceError> {
        let crane = self.specifications.get(crane_id)?;
        let request = CalculationRequest::new(crane, load, calculation_type);
        let result = evaluate(&request, &self.policy)?;

        self.history.record(result.clone());
        Ok(result)
    }

    pub fn specifications(&self) -> &S {
        &self.specifications
    }

    pub fn specifications_mut(&mut self) -> &mut S {
        &mut self.specifications
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
