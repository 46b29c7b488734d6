use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
  #[serde(default = "default_stage_width")]
  pub stage_width: u32,
  #[serde(default = "default_stage_height")]
  pub stage_height: u32,
  #[serde(default = "default_frame_rate")]
  pub frame_rate: u32,
  #[serde(default = "default_title")]
  pub title: String,
  #[serde(default = "default_script")]
  pub script: String,
}

fn default_stage_width() -> u32 {
  800
}

fn default_stage_height() -> u32 {
  600
}

fn default_frame_rate() -> u32 {
  30
}

fn default_title() -> String {
  format!("tabscript")
}

fn default_script() -> String {
  format!("./script")
}

impl Default for Config {
  fn default() -> Config {
    Config {
      stage_width: default_stage_width(),
      stage_height: default_stage_height(),
      frame_rate: default_frame_rate(),
      title: default_title(),
      script: default_script(),
    }
  }
}

impl Config {
  /// Reads `config.json` if it exists; anything unreadable falls back to the
  /// defaults with a warning.
  pub fn load(path: &str) -> Config {
    let file = match File::open(path) {
      Ok(file) => file,
      Err(_) => return Config::default(),
    };
    match serde_json::from_reader(BufReader::new(file)) {
      Ok(config) => config,
      Err(err) => {
        warn!("{path} is not valid: {err}");
        Config::default()
      }
    }
  }
}
