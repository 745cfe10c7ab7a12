// src/data.rs

use crate::model::TriviaConfig;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuración YAML inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn parse_config(content: &str) -> Result<TriviaConfig, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Carga la configuración embebida en el binario
pub fn read_config_embedded() -> Result<TriviaConfig, ConfigError> {
    let file_content = include_str!("data/trivia_config.yaml");
    parse_config(file_content)
}

/// Lee `path` si existe; si no, usa la configuración embebida.
pub fn load_config(path: &Path) -> Result<TriviaConfig, ConfigError> {
    if path.exists() {
        log::info!("Cargando configuración desde {}", path.display());
        let content = std::fs::read_to_string(path)?;
        parse_config(&content)
    } else {
        read_config_embedded()
    }
}
