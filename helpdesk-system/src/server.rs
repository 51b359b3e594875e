use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use domain_identity::model::entity::Role;
use tracing::{error, info};

use crate::api;
use crate::api::error::WebError;
use crate::infrastructure::config::{build_config, HelpMeConfig};
use crate::infrastructure::middleware::authorization::{JwtValidation, RequireRoles};
use crate::infrastructure::middleware::rate_limit::{GuardKind, RateGuard};
use crate::infrastructure::{telemetry, ServiceProvider};
use crate::maintenance;

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let raw = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    let config = match HelpMeConfig::load(raw) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if let Err(e) = telemetry::init_telemetry() {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    }

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {:#}", "Cannot build Service Provider".red(), e);
        }
    };

    if std::env::args().nth(1).as_deref() == Some("cleanup") {
        maintenance::run(&service_provider).await;
        service_provider.shutdown().await;
        return;
    }

    tokio::select! {
        _ = initialize_web_host(service_provider.clone()) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            service_provider.shutdown().await;
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host.clone();
    let rate_limit = sp.config().rate_limit.clone();
    let token_settings = sp.token_settings();
    let counter_store = sp.counter_store();

    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .wrap(RateGuard::new(counter_store.clone(), GuardKind::Write, rate_limit.write))
            .wrap(RateGuard::new(counter_store.clone(), GuardKind::General, rate_limit.general))
            .app_data(actix_web::web::Data::from(sp.clone()))
            .app_data(web::JsonConfig::default().error_handler(|_, _| {
                WebError::bad_request("Corpo da requisição inválido.".to_string()).into()
            }))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(api::auth::login))
                    .route("/refresh", web::post().to(api::auth::refresh)),
            )
            .service(
                web::scope("/usuario")
                    .wrap(RequireRoles::new(&[Role::Admin]))
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .route("", web::post().to(api::usuario::create))
                    .route("", web::get().to(api::usuario::list))
                    .route("/{id}", web::get().to(api::usuario::get))
                    .route("/{id}", web::put().to(api::usuario::update))
                    .route("/{id}", web::delete().to(api::usuario::deactivate)),
            )
            .service(
                web::scope("/chamado")
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .service(
                        web::resource("")
                            .wrap(RequireRoles::new(&[Role::User]))
                            .route(web::post().to(api::chamado::open)),
                    )
                    .service(
                        web::resource("/{id}/historico")
                            .route(web::get().to(api::chamado::history)),
                    )
                    .service(
                        web::resource("/{id}/assumir")
                            .wrap(RequireRoles::new(&[Role::Technician, Role::Admin]))
                            .route(web::put().to(api::chamado::assign)),
                    )
                    .service(
                        web::resource("/{id}/fechar")
                            .wrap(RequireRoles::new(&[Role::Technician, Role::Admin]))
                            .route(web::put().to(api::chamado::close)),
                    )
                    .service(
                        web::resource("/{id}/reabrir")
                            .wrap(RequireRoles::new(&[Role::User, Role::Admin]))
                            .route(web::put().to(api::chamado::reopen)),
                    )
                    .service(web::resource("/{id}").route(web::get().to(api::chamado::get))),
            )
            .service(
                web::scope("/filadechamados")
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .service(
                        web::resource("/meus-chamados")
                            .wrap(RequireRoles::new(&[Role::User]))
                            .route(web::get().to(api::fila_de_chamados::own)),
                    )
                    .service(
                        web::resource("/atribuidos")
                            .wrap(RequireRoles::new(&[Role::Technician]))
                            .route(web::get().to(api::fila_de_chamados::assigned)),
                    )
                    .service(
                        web::resource("/todos-chamados")
                            .wrap(RequireRoles::new(&[Role::Admin]))
                            .route(web::get().to(api::fila_de_chamados::all_by_status)),
                    )
                    .service(
                        web::resource("/abertos")
                            .wrap(RequireRoles::new(&[Role::Admin, Role::Technician]))
                            .route(web::get().to(api::fila_de_chamados::open_queue)),
                    ),
            )
            .service(
                web::scope("/servico")
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .route("", web::get().to(api::servico::list))
                    .route("", web::post().to(api::servico::create))
                    .route("/{id}", web::get().to(api::servico::get))
                    .route("/{id}", web::put().to(api::servico::update))
                    .route("/{id}", web::delete().to(api::servico::deactivate)),
            )
            .service(
                web::scope("/tecnico")
                    .wrap(RequireRoles::new(&[Role::Admin]))
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .route("", web::post().to(api::tecnico::register))
                    .route("", web::get().to(api::tecnico::list))
                    .route("/{id}/expediente", web::put().to(api::tecnico::set_shift)),
            )
            .service(
                web::scope("/admin")
                    .wrap(RequireRoles::new(&[Role::Admin]))
                    .wrap(JwtValidation::new(token_settings.clone()))
                    .route("/dashboard", web::get().to(api::admin::dashboard)),
            )
    })
    .bind((host.bind_address.to_owned(), host.bind_port))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
