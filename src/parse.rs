use log::{error, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
  Label,
  Image,
  Clear,
  Text,
  Goto,
  Set,
  Input,
  If,
  Return,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Param {
  Number(String),
  String(String),
  Symbol(String),
}

impl Param {
  pub fn text(&self) -> &str {
    match self {
      Param::Number(text) => text,
      Param::String(text) => text,
      Param::Symbol(text) => text,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
  pub kind: CommandKind,
  pub params: Vec<Param>,
}

#[derive(Debug)]
pub struct Program {
  pub instructions: Vec<Instruction>,
  pub labels: HashMap<String, usize>,
}

impl Program {
  pub fn len(&self) -> usize {
    self.instructions.len()
  }
}

pub fn classify_param(token: &str) -> Param {
  if token.parse::<f64>().is_ok() {
    return Param::Number(token.to_string());
  }
  // A lone `"` is not a string, it has no inner text.
  if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
    return Param::String(token[1..token.len() - 1].to_string());
  }
  Param::Symbol(token.to_string())
}

pub struct Parser {
  keywords: HashMap<&'static str, CommandKind>,
}

impl Parser {
  pub fn new() -> Parser {
    Parser {
      keywords: HashMap::from([
        ("label", CommandKind::Label),
        ("image", CommandKind::Image),
        ("clear", CommandKind::Clear),
        ("text", CommandKind::Text),
        ("goto", CommandKind::Goto),
        ("set", CommandKind::Set),
        ("input", CommandKind::Input),
        ("if", CommandKind::If),
        ("return", CommandKind::Return),
      ]),
    }
  }

  pub fn parse(&self, source: &str) -> Program {
    let mut instructions = Vec::new();
    for line in source.split('\n') {
      if line.is_empty() {
        continue;
      }
      let mut tokens = line.split('\t');
      let keyword = tokens.next().unwrap();
      let kind = match self.keywords.get(keyword) {
        Some(kind) => *kind,
        None => {
          error!("Invalid command name: '{keyword}'");
          continue;
        }
      };
      let params = tokens.map(classify_param).collect();
      instructions.push(Instruction { kind, params });
    }
    let labels = build_labels(&instructions);
    Program {
      instructions,
      labels,
    }
  }
}

fn build_labels(instructions: &[Instruction]) -> HashMap<String, usize> {
  let mut labels = HashMap::new();
  for (index, instruction) in instructions.iter().enumerate() {
    if instruction.kind != CommandKind::Label {
      continue;
    }
    let Some(name) = instruction.params.first() else {
      warn!("'label' at instruction {index} has no name");
      continue;
    };
    if let Some(previous) = labels.insert(name.text().to_string(), index) {
      warn!(
        "label '{}' redefined at instruction {index}, was {previous}",
        name.text()
      );
    }
  }
  labels
}
