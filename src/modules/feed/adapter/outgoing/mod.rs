pub mod feed_event_tracing;
pub mod post_query_postgres;
pub mod post_repository_postgres;
pub mod post_store_memory;
pub mod sea_orm_entity;
