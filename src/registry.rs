//! Registry factory.
//!
//! Two shapes of the same idea. [`Registry`] keeps its records in a private
//! field and takes `&mut self` for writes, so it updates in place.
//! [`manage_animals`] hands back an [`AnimalKeeper`] made of three closures
//! over one shared sequence; its writes rebuild the sequence and rebind it,
//! reusing every untouched record.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

use crate::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub name: String,
    pub verse: String,
}

impl Animal {
    pub fn new(id: u32, name: impl Into<String>, verse: impl Into<String>) -> Self {
        Animal {
            id,
            name: name.into(),
            verse: verse.into(),
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ id: {}, name: '{}', verse: '{}' }}",
            self.id, self.name, self.verse
        )
    }
}

/// The four records every factory starts from unless given its own.
pub fn seed_animals() -> Vec<Animal> {
    vec![
        Animal::new(1, "chicken", "cluck"),
        Animal::new(2, "zebra", "neigh"),
        Animal::new(3, "penguin", "chirp"),
        Animal::new(4, "dolphin", "whistle"),
    ]
}

fn check_unique_ids(animals: &[Animal]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for animal in animals {
        if !seen.insert(animal.id) {
            return Err(RegistryError::DuplicateId { id: animal.id });
        }
    }
    Ok(())
}

fn write_animals<'a, W>(out: &mut W, animals: impl IntoIterator<Item = &'a Animal>) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "[")?;
    for animal in animals {
        writeln!(out, "  {animal},")?;
    }
    writeln!(out, "]")
}

// =============================================================================
// Struct form
// =============================================================================

/// Ordered records reachable only through the methods below.
///
/// ```compile_fail
/// let registry = closures::Registry::new();
/// let animals = registry.animals;
/// ```
pub struct Registry {
    animals: Vec<Animal>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            animals: seed_animals(),
        }
    }

    pub fn with_animals(animals: Vec<Animal>) -> Result<Self, RegistryError> {
        check_unique_ids(&animals)?;
        Ok(Registry { animals })
    }

    /// Returns the verse of the record with `id`, or `None` if there is none.
    pub fn get_verse(&self, id: u32) -> Option<&str> {
        self.animals
            .iter()
            .find(|animal| animal.id == id)
            .map(|animal| animal.verse.as_str())
    }

    pub fn require_verse(&self, id: u32) -> Result<&str, RegistryError> {
        self.get_verse(id).ok_or(RegistryError::UnknownId { id })
    }

    /// Replaces the verse of the record with `id` and returns the old one.
    ///
    /// An unknown `id` leaves every record as it was and returns `None`.
    pub fn set_verse(&mut self, id: u32, verse: impl Into<String>) -> Option<String> {
        match self.animals.iter_mut().find(|animal| animal.id == id) {
            Some(animal) => {
                let previous = std::mem::replace(&mut animal.verse, verse.into());
                debug!(id, %previous, verse = %animal.verse, "replaced verse");
                Some(previous)
            }
            None => {
                debug!(id, "no animal with this id, registry unchanged");
                None
            }
        }
    }

    pub fn print_registry<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_animals(out, &self.animals)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Closure form
// =============================================================================

type SharedAnimals = Rc<RefCell<Vec<Rc<Animal>>>>;

/// Accessors returned by [`manage_animals`]. The record list lives only in
/// the closures' captured state.
///
/// ```compile_fail
/// let keeper = closures::manage_animals();
/// let animals = keeper.animals;
/// ```
pub struct AnimalKeeper {
    get_verse: Box<dyn Fn(u32) -> Option<String>>,
    set_verse: Box<dyn Fn(u32, String) -> Option<String>>,
    print_animals: Box<dyn Fn(&mut dyn Write) -> io::Result<()>>,
}

/// Creates a fresh keeper over its own copy of the seed records.
pub fn manage_animals() -> AnimalKeeper {
    AnimalKeeper::from_shared(share(seed_animals()))
}

fn share(animals: Vec<Animal>) -> SharedAnimals {
    Rc::new(RefCell::new(animals.into_iter().map(Rc::new).collect()))
}

impl AnimalKeeper {
    pub fn with_animals(animals: Vec<Animal>) -> Result<Self, RegistryError> {
        check_unique_ids(&animals)?;
        Ok(Self::from_shared(share(animals)))
    }

    fn from_shared(animals: SharedAnimals) -> Self {
        let get_verse = {
            let animals = Rc::clone(&animals);
            Box::new(move |id: u32| {
                animals
                    .borrow()
                    .iter()
                    .find(|animal| animal.id == id)
                    .map(|animal| animal.verse.clone())
            })
        };

        let set_verse = {
            let animals = Rc::clone(&animals);
            Box::new(move |id: u32, verse: String| {
                let current = animals.borrow();
                let Some(previous) = current
                    .iter()
                    .find(|animal| animal.id == id)
                    .map(|animal| animal.verse.clone())
                else {
                    debug!(id, "no animal with this id, registry unchanged");
                    return None;
                };

                let next: Vec<Rc<Animal>> = current
                    .iter()
                    .map(|animal| {
                        if animal.id == id {
                            Rc::new(Animal {
                                verse: verse.clone(),
                                ..Animal::clone(animal)
                            })
                        } else {
                            Rc::clone(animal)
                        }
                    })
                    .collect();
                drop(current);

                debug!(id, %previous, %verse, "rebuilt registry with replaced verse");
                *animals.borrow_mut() = next;
                Some(previous)
            })
        };

        let print_animals = Box::new(move |out: &mut dyn Write| {
            let current = animals.borrow();
            write_animals(out, current.iter().map(|animal| &**animal))
        });

        AnimalKeeper {
            get_verse,
            set_verse,
            print_animals,
        }
    }

    pub fn get_verse(&self, id: u32) -> Option<String> {
        (self.get_verse)(id)
    }

    /// Replaces the verse of the record with `id` and returns the old one.
    /// Unknown ids are a no-op returning `None`.
    pub fn set_verse(&self, id: u32, verse: impl Into<String>) -> Option<String> {
        (self.set_verse)(id, verse.into())
    }

    pub fn print_animals<W: Write>(&self, out: &mut W) -> io::Result<()> {
        (self.print_animals)(out)
    }
}
