use crate::assets::{AssetHandle, AssetRegistry};
use derivative::Derivative;
use log::{error, info};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;

/// SDL-backed asset registry. Textures live here for the whole run; the
/// engine only ever sees their indices.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct TextureStore<'a> {
  #[derivative(Debug = "ignore")]
  texture_creator: &'a TextureCreator<WindowContext>,
  #[derivative(Debug = "ignore")]
  textures: Vec<Texture<'a>>,
  key_to_index: HashMap<String, usize>,
}

impl<'a> TextureStore<'a> {
  pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> TextureStore<'a> {
    TextureStore {
      texture_creator,
      textures: Vec::new(),
      key_to_index: HashMap::new(),
    }
  }

  pub fn texture(&self, handle: AssetHandle) -> &Texture<'a> {
    &self.textures[handle.0]
  }

  pub fn len(&self) -> usize {
    self.textures.len()
  }
}

impl<'a> AssetRegistry for TextureStore<'a> {
  fn has(&self, key: &str) -> bool {
    self.key_to_index.contains_key(key)
  }

  fn handle(&self, key: &str) -> Option<AssetHandle> {
    self.key_to_index.get(key).copied().map(AssetHandle)
  }

  fn load(&mut self, key: &str) -> Option<AssetHandle> {
    if let Some(index) = self.key_to_index.get(key) {
      return Some(AssetHandle(*index));
    }
    if !Path::new(key).exists() {
      return None;
    }
    let texture = match self.texture_creator.load_texture(key) {
      Ok(texture) => texture,
      Err(err) => {
        error!("could not load {key}: {err}");
        return None;
      }
    };
    let index = self.textures.len();
    self.textures.push(texture);
    self.key_to_index.insert(key.to_string(), index);
    info!("loaded {key}");
    Some(AssetHandle(index))
  }
}
