use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    Config,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_fallback();
    }
}

fn init_fallback() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER)
                .build(LevelFilter::Warn),
        );
    if let Ok(config) = config {
        // a logger may already be installed by the embedding program
        let _ = log4rs::init_config(config);
    }
}
