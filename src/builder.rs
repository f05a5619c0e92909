use crate::engine::LengthStrategy;
use crate::{DpEngine, SequenceDp};

pub struct DpEngineBuilder<P: SequenceDp> {
    problem: P,
    length_strategy: Option<LengthStrategy>,
}

impl<P: SequenceDp> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            length_strategy: None,
        }
    }
    pub fn with_length_strategy(mut self, strategy: LengthStrategy) -> Self {
        self.length_strategy = Some(strategy);
        self
    }
    pub fn build(self) -> DpEngine<P> {
        match self.length_strategy {
            Some(s) => DpEngine::with_strategy(self.problem, s),
            None => DpEngine::new(self.problem),
        }
    }
}
