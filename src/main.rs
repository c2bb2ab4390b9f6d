use dotenv::dotenv;
use human_panic::setup_panic;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

// 从 lib.rs 导入模块
use academy_attendance::config::AppConfig;
use academy_attendance::errors::AcademyError;
use academy_attendance::models::students::requests::StudentListQuery;
use academy_attendance::runtime::lifetime;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let context = match lifetime::startup::prepare_startup().await {
        Ok(context) => context,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // 输出预处理时间
    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    let courses = context.storage.count_courses().await;
    let students = context
        .students
        .list_students(StudentListQuery {
            size: Some(1),
            ..Default::default()
        })
        .await;

    match (courses, students) {
        (Ok(courses), Ok(students)) => {
            info!(
                "Academy ready: {} courses, {} students",
                courses, students.pagination.total
            );
            ExitCode::SUCCESS
        }
        (Err(e), _) | (_, Err(e)) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &AcademyError) {
    #[cfg(debug_assertions)]
    eprintln!("{}", e.format_colored());
    error!("[{}] {}", e.code(), e.format_simple());
}
