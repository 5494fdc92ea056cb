//! Prints the resolved signature pad configuration.
//!
//! Usage: `signature-defaults [CONFIG.json]`

use serde_json::{Map, Value, json};
use signature_core::{ConfigResult, DrawType, SignatureConfig};

fn resolve_config(path: Option<&str>) -> ConfigResult<SignatureConfig> {
    match path {
        Some(path) => {
            let config = SignatureConfig::load(path)?;
            log::info!("Loaded config from: {}", path);
            Ok(config)
        }
        None => Ok(SignatureConfig::default()),
    }
}

fn report(config: &SignatureConfig) -> Value {
    let draw_types: Map<String, Value> = DrawType::ALL
        .into_iter()
        .map(|draw_type| {
            (
                draw_type.name().to_string(),
                json!({
                    "compositeOperation": draw_type.composite_operation(),
                    "lineWidth": config.stroke_width(draw_type),
                }),
            )
        })
        .collect();

    json!({
        "config": config,
        "drawTypes": draw_types,
    })
}

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1);
    let config = match resolve_config(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report(&config)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("Failed to serialize config: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let value = report(&SignatureConfig::default());
        assert_eq!(value["config"]["size"]["w"], 1400);
        assert_eq!(value["drawTypes"]["Pen"]["compositeOperation"], "source-over");
        assert_eq!(value["drawTypes"]["Eraser"]["compositeOperation"], "destination-out");
        assert_eq!(value["drawTypes"]["Eraser"]["lineWidth"], 24);
    }

    #[test]
    fn test_resolve_without_path() {
        assert_eq!(resolve_config(None).unwrap(), SignatureConfig::default());
    }

    #[test]
    fn test_resolve_missing_file() {
        assert!(resolve_config(Some("/nonexistent/signature.json")).is_err());
    }
}
