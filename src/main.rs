use history_trivia::TriviaApp;
use history_trivia::data::{load_config, read_config_embedded};
use history_trivia::model::TriviaConfig;
use std::path::Path;

const CONFIG_FILE: &str = "trivia_config.yaml";

fn config() -> TriviaConfig {
    match load_config(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}; usando la configuración por defecto");
            read_config_embedded().unwrap_or_default()
        }
    }
}

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = config();
    log::info!("Banco de preguntas: {} (categoría {})", config.endpoint, config.category_id);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Trivia de Historia",
        options,
        Box::new(|_cc| Ok(Box::new(TriviaApp::new(config)))),
    )
}
