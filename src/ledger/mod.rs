pub mod push_ledger;
