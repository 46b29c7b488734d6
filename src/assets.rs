use crate::parse::{CommandKind, Param, Program};
use log::error;

/// Opaque identifier handed out by the registry. The engine stores these in
/// its image map and never touches the underlying resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetHandle(pub usize);

pub trait AssetRegistry {
  fn has(&self, key: &str) -> bool;
  fn handle(&self, key: &str) -> Option<AssetHandle>;
  /// Loads the asset behind `key`, or returns the existing handle if it was
  /// loaded before. None means the asset is missing or unloadable.
  fn load(&mut self, key: &str) -> Option<AssetHandle>;
}

/// Requests every asset the program references, before any stepping starts.
/// Bad references are diagnosed and skipped; the instruction itself is left
/// alone and will fail on its own when stepped.
pub fn preload(program: &Program, registry: &mut dyn AssetRegistry) {
  for instruction in &program.instructions {
    if instruction.kind != CommandKind::Image {
      continue;
    }
    if instruction.params.len() < 2 {
      error!("'image' command should have a file path at 2nd argument.");
      continue;
    }
    let path = match &instruction.params[1] {
      Param::String(path) => path,
      _ => {
        error!("2nd argument of 'image' command should be a string.");
        continue;
      }
    };
    if registry.load(path).is_none() {
      error!("file: {path} not found.");
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::parse::Parser;
  use std::collections::HashMap;

  /// In-memory stand-in for the SDL texture store.
  pub struct FakeRegistry {
    pub on_disk: Vec<String>,
    pub loaded: HashMap<String, AssetHandle>,
  }

  impl FakeRegistry {
    pub fn new(on_disk: &[&str]) -> FakeRegistry {
      FakeRegistry {
        on_disk: on_disk.iter().map(|key| key.to_string()).collect(),
        loaded: HashMap::new(),
      }
    }
  }

  impl AssetRegistry for FakeRegistry {
    fn has(&self, key: &str) -> bool {
      self.loaded.contains_key(key)
    }
    fn handle(&self, key: &str) -> Option<AssetHandle> {
      self.loaded.get(key).copied()
    }
    fn load(&mut self, key: &str) -> Option<AssetHandle> {
      if let Some(handle) = self.loaded.get(key) {
        return Some(*handle);
      }
      if !self.on_disk.iter().any(|entry| entry == key) {
        return None;
      }
      let handle = AssetHandle(self.loaded.len());
      self.loaded.insert(key.to_string(), handle);
      Some(handle)
    }
  }

  #[test]
  fn preload_loads_each_referenced_asset_once() {
    let parser = Parser::new();
    let program = parser.parse(
      "image\ta\t\"hero.png\"\t0\t0\t1\t1\nimage\tb\t\"hero.png\"\t5\t5\t1\t1",
    );
    let mut registry = FakeRegistry::new(&["hero.png"]);
    preload(&program, &mut registry);
    assert_eq!(registry.loaded.len(), 1);
    assert!(registry.has("hero.png"));
  }

  #[test]
  fn preload_skips_short_or_untyped_references() {
    let parser = Parser::new();
    // One image with no path, one whose path is a bare symbol.
    let program = parser.parse("image\ta\nimage\tb\thero.png\t0\t0\t1\t1");
    let mut registry = FakeRegistry::new(&["hero.png"]);
    preload(&program, &mut registry);
    assert!(registry.loaded.is_empty());
  }

  #[test]
  fn preload_skips_missing_files() {
    let parser = Parser::new();
    let program = parser.parse("image\ta\t\"missing.png\"\t0\t0\t1\t1");
    let mut registry = FakeRegistry::new(&[]);
    preload(&program, &mut registry);
    assert!(registry.loaded.is_empty());
  }
}
