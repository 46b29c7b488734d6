use crate::assets::{AssetHandle, AssetRegistry};
use crate::parse::{CommandKind, Param, Program};
use log::error;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
  pub x: i32,
  pub y: i32,
  pub w: i32,
  pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageState {
  pub handle: AssetHandle,
  pub rect: Rect,
}

#[derive(Debug, Default)]
pub struct EngineState {
  /// Reserved for the `set`/`input`/`if` family; nothing writes here yet.
  pub variables: HashMap<String, String>,
  pub images: HashMap<String, ImageState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Running,
  Halted,
}

pub struct Engine {
  program: Program,
  pc: usize,
  pub state: EngineState,
}

impl Engine {
  pub fn new(program: Program) -> Engine {
    Engine {
      program,
      pc: 0,
      state: EngineState::default(),
    }
  }

  pub fn status(&self) -> Status {
    if self.pc < self.program.len() {
      Status::Running
    } else {
      Status::Halted
    }
  }

  /// Executes the instruction under the program counter and advances it by
  /// one, whether the handler succeeded or not. Once halted, stepping is a
  /// no-op, so the frame loop can keep calling this forever.
  pub fn step(&mut self, registry: &dyn AssetRegistry) -> bool {
    if self.pc >= self.program.len() {
      return true;
    }
    let instruction = &self.program.instructions[self.pc];
    let ok = match instruction.kind {
      CommandKind::Image => {
        command_image(&mut self.state, registry, &instruction.params)
      }
      // Recognized but not yet executed. Real handlers for these must keep
      // the one-instruction-per-step contract; the label table and the
      // variables map are already in place for them.
      CommandKind::Label
      | CommandKind::Clear
      | CommandKind::Text
      | CommandKind::Goto
      | CommandKind::Set
      | CommandKind::Input
      | CommandKind::If
      | CommandKind::Return => true,
    };
    self.pc += 1;
    ok
  }
}

fn command_image(
  state: &mut EngineState,
  registry: &dyn AssetRegistry,
  params: &[Param],
) -> bool {
  if params.len() < 6 {
    error!("'image' takes 6 parameters, got {}", params.len());
    return false;
  }
  let id = params[0].text();
  let path = params[1].text();
  let Some(handle) = registry.handle(path) else {
    error!("'image': {path} is not loaded.");
    return false;
  };
  let (Some(x), Some(y), Some(w), Some(h)) = (
    aux_i32(&params[2]),
    aux_i32(&params[3]),
    aux_i32(&params[4]),
    aux_i32(&params[5]),
  ) else {
    error!("'image': position and size parameters must be integers.");
    return false;
  };
  state.images.insert(
    id.to_string(),
    ImageState {
      handle,
      rect: Rect { x, y, w, h },
    },
  );
  true
}

fn aux_i32(param: &Param) -> Option<i32> {
  param.text().parse().ok()
}
