//! # HTTP Server
//!
//! Main HTTP server combining all resource routers under `/api`, with a
//! CORS layer configured from [`ServerConfig`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Duration;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::crypto::PasswordPolicy;
use crate::auth::jwt::JwtConfig;
use crate::auth::service::AuthService;
use crate::auth::user::InMemoryUserRepository;
use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::registry::exam::InMemoryExamRegistry;
use crate::registry::room::InMemoryRoomRegistry;
use crate::registry::student::InMemoryStudentRegistry;
use crate::registry::teacher::InMemoryTeacherRegistry;
use crate::scheduling::SchedulingService;

use super::auth_routes::{auth_routes, AuthRouteState};
use super::exam_routes::{exam_routes, ExamState};
use super::room_routes::{room_routes, RoomState};
use super::student_routes::{student_routes, StudentState};
use super::teacher_routes::{teacher_routes, TeacherState};

/// HTTP server for the college-management API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server from configuration
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig) -> Router {
        // Registries shared across routers
        let rooms = Arc::new(InMemoryRoomRegistry::new());
        let exams = Arc::new(InMemoryExamRegistry::new());
        let students = Arc::new(InMemoryStudentRegistry::new());
        let teachers = Arc::new(InMemoryTeacherRegistry::new());

        let auth = Arc::new(AuthService::new(
            InMemoryUserRepository::new(),
            JwtConfig {
                secret: config.jwt_secret.clone(),
                token_ttl: Duration::minutes(config.token_ttl_minutes),
                ..JwtConfig::default()
            },
            PasswordPolicy::default(),
        ));
        let scheduler = Arc::new(SchedulingService::new(rooms.clone(), exams));

        let auth_state = Arc::new(AuthRouteState {
            service: auth.clone(),
        });
        let exam_state = Arc::new(ExamState {
            scheduler: scheduler.clone(),
        });
        let room_state = Arc::new(RoomState {
            rooms,
            scheduler,
            auth: auth.clone(),
        });
        let student_state = Arc::new(StudentState {
            students,
            auth: auth.clone(),
        });
        let teacher_state = Arc::new(TeacherState { teachers, auth });

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/api/auth", auth_routes(auth_state))
            .nest("/api/students", student_routes(student_state))
            .nest("/api/teachers", teacher_routes(teacher_state))
            .nest("/api/exams", exam_routes(exam_state))
            .nest("/api/exam-rooms", room_routes(room_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid socket address")
        })?;

        Logger::info(
            "server_started",
            &[
                ("host", &self.config.host),
                ("port", &self.config.port.to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "campusd",
    })
}
