pub mod ledger;
pub mod page;
pub mod rpc;
