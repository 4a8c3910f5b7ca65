use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
/// - No Redis
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks critical dependencies
/// - In memory mode neither backend is registered and both report "skipped"
#[get("/ready")]
pub async fn readiness(
    db: Option<web::Data<Arc<DatabaseConnection>>>,
    redis: Option<web::Data<Arc<deadpool_redis::Pool>>>,
) -> impl Responder {
    let db_status = match db {
        Some(db) => {
            match db
                .execute(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1",
                ))
                .await
            {
                Ok(_) => "ok",
                Err(_) => "unhealthy",
            }
        }
        None => "skipped",
    };

    let redis_status = match redis {
        Some(pool) => match pool.get().await {
            Ok(mut conn) => {
                match redis::cmd("PING").query_async::<String>(&mut conn).await {
                    Ok(_) => "ok",
                    Err(_) => "unhealthy",
                }
            }
            Err(_) => "unhealthy",
        },
        None => "skipped",
    };

    let healthy = db_status != "unhealthy" && redis_status != "unhealthy";

    if healthy {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: db_status,
            redis: redis_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: db_status,
            redis: redis_status,
        })
    }
}
