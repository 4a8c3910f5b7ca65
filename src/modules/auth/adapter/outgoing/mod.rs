pub mod account_query_postgres;
pub mod account_repository_postgres;
pub mod account_store_memory;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod token_blacklist_memory;
pub mod token_blacklist_redis;
