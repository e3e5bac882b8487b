mod category_rule_source;
mod client;
mod dto;
mod product_source;

pub use category_rule_source::CategoryRuleSourceRemote;
pub use client::RemoteApiClient;
pub use product_source::ProductSourceRemote;
