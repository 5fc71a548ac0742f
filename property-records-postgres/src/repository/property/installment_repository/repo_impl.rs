use crate::executor::Executor;

pub struct InstallmentRepositoryImpl {
    pub executor: Executor,
}

impl InstallmentRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
