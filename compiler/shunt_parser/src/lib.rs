//! Shunting-yard conversion of shunt token sequences to postfix order.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::parse_to_postfix;

#[cfg(test)]
mod tests {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Trace)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .init();
            log::info!("Test logger initialized");
        });
    }
}
