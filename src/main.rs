mod assets;
mod config;
mod engine;
mod parse;
mod textures;
use crate::assets::preload;
use crate::config::Config;
use crate::engine::Engine;
use crate::parse::Parser;
use crate::textures::TextureStore;
use log::{debug, error, info};
use sdl2::{event::Event, pixels::Color, rect::Rect};
use std::process::exit;
use std::time::Duration;

fn main() {
  pretty_env_logger::init();
  let config = Config::load("config.json");
  let source = match std::fs::read_to_string(&config.script) {
    Ok(source) => source,
    Err(err) => {
      error!("could not read {}: {err}", config.script);
      exit(1);
    }
  };
  let program = Parser::new().parse(&source);
  for (index, instruction) in program.instructions.iter().enumerate() {
    debug!("{index}: {instruction:?}");
  }
  debug!("labels: {:?}", program.labels);
  let sdl_context = sdl2::init().unwrap();
  let video_subsystem = sdl_context.video().unwrap();
  let window = video_subsystem
    .window(&config.title, config.stage_width, config.stage_height)
    .opengl()
    .position_centered()
    .build()
    .unwrap();
  let mut canvas = window.into_canvas().build().unwrap();
  let mut event_pump = sdl_context.event_pump().unwrap();
  let texture_creator = canvas.texture_creator();
  let mut store = TextureStore::new(&texture_creator);
  preload(&program, &mut store);
  info!("{} textures are cached.", store.len());
  let mut engine = Engine::new(program);
  'main: loop {
    for event in event_pump.poll_iter() {
      match event {
        Event::Quit { .. } => {
          break 'main;
        }
        _ => {}
      }
    }
    engine.step(&store);
    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.clear();
    for image in engine.state.images.values() {
      let rect = image.rect;
      canvas
        .copy(
          store.texture(image.handle),
          None,
          Rect::new(rect.x, rect.y, rect.w as u32, rect.h as u32),
        )
        .unwrap();
    }
    canvas.present();
    std::thread::sleep(Duration::new(0, 1_000_000_000u32 / config.frame_rate));
  }
}
