pub mod chart_loader;
pub mod ledger_service;
pub mod register_service;
