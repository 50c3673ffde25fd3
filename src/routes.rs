use crate::{
    api::{attendance, audit, leave, notification, tracking},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter) // rate limiting
            .service(
                web::scope("/attendance")
                    // /attendance/month
                    .service(
                        web::resource("/month").route(web::post().to(attendance::fetch_monthly)),
                    )
                    // /attendance/status
                    .service(
                        web::resource("/status").route(web::post().to(attendance::check_status)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    // /leaves/status
                    .service(web::resource("/status").route(web::put().to(leave::update_status))),
            )
            .service(
                web::scope("/notifications")
                    // fixed paths first so they are not captured by /{id}/read
                    .service(
                        web::resource("/mark-all-read")
                            .route(web::put().to(notification::mark_all_read)),
                    )
                    .service(
                        web::resource("/unread-count")
                            .route(web::get().to(notification::unread_count)),
                    )
                    // /notifications/{id}/read
                    .service(
                        web::resource("/{id}/read").route(web::put().to(notification::mark_read)),
                    ),
            )
            .service(
                web::scope("/audit")
                    // /audit/employee/{employeeId}
                    .service(
                        web::resource("/employee/{employeeId}")
                            .route(web::get().to(audit::by_employee)),
                    )
                    // /audit/logs/{entityType}/{entityId}
                    .service(
                        web::resource("/logs/{entityType}/{entityId}")
                            .route(web::get().to(audit::by_entity)),
                    ),
            )
            .service(
                web::scope("/tracking")
                    // /tracking/location
                    .service(
                        web::resource("/location").route(web::post().to(tracking::report_location)),
                    ),
            ),
    );
}
