use crate::{
    api::{idm, mode, polling, status},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
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

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::resource("/status")
                    .wrap(build_limiter(config.rate_status_per_min))
                    .route(web::get().to(status::status)),
            )
            .service(
                web::resource("/gas-polling")
                    .wrap(build_limiter(config.rate_poll_per_min))
                    .route(web::get().to(polling::gas_polling)),
            )
            .service(
                web::resource("/idm")
                    .wrap(build_limiter(config.rate_idm_per_min))
                    .route(web::post().to(idm::receive_idm)),
            )
            .service(
                web::resource("/mode")
                    .wrap(build_limiter(config.rate_mode_per_min))
                    .route(web::post().to(mode::switch_mode)),
            ),
    );
}
