use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file_name = record
            .file()
            .map(|file| file.rsplit(['/', '\\']).next().unwrap_or(file))
            .unwrap_or("?");
        eprintln!(
            "[{}][{}:{}] {}",
            record.level(),
            file_name,
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub fn level_filter(verbose_n: u8) -> LevelFilter {
    match verbose_n {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logger(verbose_n: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_filter(verbose_n));

    Ok(())
}
