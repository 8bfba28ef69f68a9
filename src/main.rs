use deadpool_postgres::{ManagerConfig, RecyclingMethod};

use cardmate::args;
use cardmate::controller::db_prefill;
use cardmate::controller::lookup::LookupConfig;
use cardmate::controller::{auth, history, manage, round, settings};
use cardmate::model::database_write::create_tables;
use cardmate::prefs::PrefStore;
use cardmate::state::AppState;
use cardmate::view;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{
    ConfigAndPool, DatabaseType, MiddlewarePool, MiddlewarePoolConnection, QueryAndParams,
};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let cfg = deadpool_postgres::Config::new();
    let config_and_pool: ConfigAndPool;
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = cfg;
        postgres_config.dbname = Some(args.db_name.clone());
        postgres_config.host = args.db_host.clone();
        postgres_config.port = args.db_port;
        postgres_config.user = args.db_user.clone();
        postgres_config.password = args.db_password.clone();
        postgres_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        config_and_pool = ConfigAndPool::new_postgres(postgres_config).await?;
    } else {
        let a = ConfigAndPool::new_sqlite(args.db_name.clone()).await;
        match a {
            Ok(a) => {
                config_and_pool = a;
            }
            Err(e) => {
                eprintln!(
                    "Error: {}\nBacktrace: {:?}",
                    e,
                    std::backtrace::Backtrace::capture()
                );
                std::process::exit(1);
            }
        }
    }

    create_tables(&config_and_pool).await?;

    if args.db_startup_script.is_some() {
        let script = args.combined_sql_script.clone();
        let query_and_params = QueryAndParams {
            query: script,
            params: vec![],
        };

        let pool = config_and_pool.pool.get().await?;
        let sconn = MiddlewarePool::get_connection(pool).await?;
        (match sconn {
            MiddlewarePoolConnection::Postgres(mut xx) => {
                let tx = xx.transaction().await?;

                tx.batch_execute(&query_and_params.query).await?;
                tx.commit().await?;
                Ok::<_, SqlMiddlewareDbError>(())
            }
            MiddlewarePoolConnection::Sqlite(xx) => {
                xx.interact(move |xxx| {
                    let tx = xxx.transaction()?;
                    tx.execute_batch(&query_and_params.query)?;

                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await?
            }
        })?;
    }

    if let Some(json_path) = &args.db_populate_json {
        db_prefill::db_prefill(json_path, &config_and_pool).await?;
    }

    let lookup = LookupConfig {
        base_url: args.lookup_base_url.clone(),
        api_key: args.lookup_api_key.clone().unwrap_or_default(),
    };
    let prefs = PrefStore::load(&args.prefs_path);
    let state = AppState::new(config_and_pool, lookup, prefs);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .route("/", web::get().to(index))
            .route("/health", web::get().to(HttpResponse::Ok))
            .route("/auth/signin", web::get().to(auth::signin))
            .route("/auth/signout", web::get().to(auth::signout))
            .route("/round", web::get().to(round::round_page))
            .route("/round/course", web::get().to(round::select_course))
            .route("/round/score", web::get().to(round::set_score))
            .route("/round/player/add", web::get().to(round::add_player))
            .route("/round/reset", web::get().to(round::reset_round))
            .route("/round/hole/next", web::get().to(round::next_hole))
            .route("/round/hole/prev", web::get().to(round::prev_hole))
            .route("/round/complete", web::get().to(round::complete_round))
            .route("/scorecard", web::get().to(round::scorecard_page))
            .route("/manage", web::get().to(manage::manage_page))
            .route("/manage/player/add", web::get().to(manage::player_add))
            .route("/manage/player/rename", web::get().to(manage::player_rename))
            .route("/manage/player/delete", web::get().to(manage::player_delete))
            .route("/manage/course/add", web::get().to(manage::course_add))
            .route("/manage/course/update", web::get().to(manage::course_update))
            .route("/manage/course/delete", web::get().to(manage::course_delete))
            .route("/lookup/search", web::get().to(manage::lookup_search))
            .route("/lookup/import", web::get().to(manage::lookup_import))
            .route("/history", web::get().to(history::history_page))
            .route("/history/delete", web::get().to(history::history_delete))
            .route("/settings", web::get().to(settings::settings_page))
            .route("/settings/update", web::get().to(settings::settings_update))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind("0.0.0.0:8081")?
    .run()
    .await?;
    Ok(())
}

async fn index(state: Data<AppState>) -> impl Responder {
    let signed_in = state.signed_in_owner().await.is_some();
    let prefs = state.prefs.read().await.current;

    let markup = view::index::page(
        "CardMate",
        &prefs,
        None,
        view::index::render_index_template(signed_in),
    );
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
