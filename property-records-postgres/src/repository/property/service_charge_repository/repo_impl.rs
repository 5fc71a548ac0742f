use crate::executor::Executor;

pub struct ServiceChargeRepositoryImpl {
    pub executor: Executor,
}

impl ServiceChargeRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
