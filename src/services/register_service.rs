use crate::services::ledger_service::LedgerService;

#[derive(Clone)]
pub struct ServiceRegister {
    pub ledger_service: LedgerService,
}

impl ServiceRegister {
    pub fn new(ledger_service: LedgerService) -> Self {
        Self { ledger_service }
    }
}
