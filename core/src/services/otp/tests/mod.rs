mod ledger_tests;
mod mocks;
