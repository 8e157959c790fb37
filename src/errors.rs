// Whitelist
pub const ERR_BALANCE_LESS_THAN_THRESHOLD: &str = "BalanceLessThanThreshold";
pub const ERR_NOT_ENOUGH_BALANCE: &str = "NotEnoughBalance";

// Settlement
pub const ERR_RESOLVER_NOT_WHITELISTED: &str = "ResolverIsNotWhitelisted";
pub const ERR_SETTLEMENT_IN_PROGRESS: &str = "SettlementInProgress";
pub const ERR_ACCESS_DENIED: &str = "AccessDenied";
pub const ERR_INCORRECT_CALLDATA: &str = "IncorrectCalldataParams";
