//! A small closed subject hierarchy, used by the `pmatch` binary and as a
//! worked example of implementing [`Narrow`] for an enum.

use serde::{Deserialize, Serialize};

use crate::context::PatternMatch;
use crate::errors::Result;
use crate::narrow::Narrow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skunk {
    pub name: String,
}

/// Two animals are equal when they are the same kind and share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
    Skunk(Skunk),
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Skunk {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal {
    pub fn name(&self) -> &str {
        match self {
            Animal::Dog(d) => &d.name,
            Animal::Cat(c) => &c.name,
            Animal::Skunk(s) => &s.name,
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Animal::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Animal::Cat(cat)
    }
}

impl From<Skunk> for Animal {
    fn from(skunk: Skunk) -> Self {
        Animal::Skunk(skunk)
    }
}

impl Narrow<Dog> for Animal {
    fn narrow(&self) -> Option<&Dog> {
        match self {
            Animal::Dog(d) => Some(d),
            _ => None,
        }
    }
}

impl Narrow<Cat> for Animal {
    fn narrow(&self) -> Option<&Cat> {
        match self {
            Animal::Cat(c) => Some(c),
            _ => None,
        }
    }
}

impl Narrow<Skunk> for Animal {
    fn narrow(&self) -> Option<&Skunk> {
        match self {
            Animal::Skunk(s) => Some(s),
            _ => None,
        }
    }
}

/// Describes an animal, falling back to a generic description.
pub fn describe(animal: &Animal) -> String {
    known_cases(animal)
        .otherwise(|a| format!("an animal called {}", a.name()))
        .result_or_default()
}

/// Describes an animal, failing with `MatchError::MatchFailure` when no
/// specific case applies.
pub fn describe_strict(animal: &Animal) -> Result<String> {
    Ok(known_cases(animal).otherwise_throw()?.result_or_default())
}

fn known_cases(animal: &Animal) -> PatternMatch<'_, Animal, String> {
    let berty = Dog::new("Berty");
    // Typed for `String` from the start; no retype needed
    PatternMatch::<_, String>::new(animal)
        .case_value(&berty, |_| "Berty!".to_string())
        .case_when(|a: &Animal| a.name() == "Rover", |_| "Rover!".to_string())
        .case(|dog: &Dog| format!("a dog called {}", dog.name))
        .case(|cat: &Cat| format!("a cat called {}", cat.name))
}
