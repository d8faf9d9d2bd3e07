pub mod cards;
pub mod dto;
pub mod gameplay;
pub mod gameroom;
pub mod hosting;

/// Seats at a Kabo table. The whole ruleset is written for exactly two.
pub const SEATS: usize = 2;
/// Cards dealt to each hand at the start of a round.
pub const HAND: usize = 4;
/// Free peeks granted to each player during the PEEK phase.
pub const PEEKS: u8 = 2;

/// Hand totals and per-card scoring values. Red kings are negative.
pub type Score = i32;

/// Initialize combined terminal + file logging.
/// Terminal shows Info+, file captures Debug+ under logs/.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("install ctrl-c handler");
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
