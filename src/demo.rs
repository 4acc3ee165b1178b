//! The console walkthrough: independent counters, independent registries,
//! then a few lookups.

use colored::Colorize;
use std::io::Write;
use tracing::{info, warn};

use crate::config::DemoConfig;
use crate::counter::create_counter;
use crate::error::DemoError;
use crate::registry::AnimalKeeper;

pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    run_counters(config, out)?;
    run_registries(config, out)?;
    run_lookups(config, out)?;
    Ok(())
}

fn run_counters<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "{}", "=== Counters ===".bold())?;

    // Create every counter up front so they are all alive at once.
    let mut counters: Vec<_> = config.counter_calls.iter().map(|_| create_counter()).collect();
    for (idx, (counter, &calls)) in counters.iter_mut().zip(&config.counter_calls).enumerate() {
        writeln!(out, "counter {}:", idx + 1)?;
        for _ in 0..calls {
            writeln!(out, "{}", counter())?;
        }
    }

    info!(counters = counters.len(), "counters done");
    Ok(())
}

fn run_registries<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Registries ===".bold())?;

    let keepers = config
        .updates
        .iter()
        .map(|_| AnimalKeeper::with_animals(config.animals.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    for (keeper, update) in keepers.iter().zip(&config.updates) {
        if keeper.set_verse(update.id, update.verse.as_str()).is_none() {
            warn!(id = update.id, "update skipped, no animal with this id");
        }
    }

    for (idx, (keeper, update)) in keepers.iter().zip(&config.updates).enumerate() {
        writeln!(
            out,
            "registry {} after set_verse({}, {:?}):",
            idx + 1,
            update.id,
            update.verse
        )?;
        keeper.print_animals(out)?;
    }

    info!(registries = keepers.len(), "registries done");
    Ok(())
}

fn run_lookups<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Lookups (fresh registry) ===".bold())?;

    let registry = config.registry()?;
    for &id in &config.lookups {
        match registry.require_verse(id) {
            Ok(verse) => writeln!(out, "get_verse({id}) = {verse}")?,
            Err(err) => {
                warn!(%err, "lookup failed");
                writeln!(out, "get_verse({id}) = undefined")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerseUpdate;
    use crate::registry::Animal;

    fn render(config: &DemoConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_walkthrough() {
        let output = render(&DemoConfig::default());
        let lines: Vec<&str> = output.lines().collect();

        let first = lines.iter().position(|l| *l == "counter 1:").unwrap();
        assert_eq!(&lines[first + 1..first + 5], &["1", "2", "3", "4"]);
        assert_eq!(lines[first + 5], "counter 2:");
        assert_eq!(&lines[first + 6..first + 9], &["1", "2", "3"]);

        assert!(output.contains("registry 1 after set_verse(4, \"bark\"):"));
        assert!(output.contains("registry 2 after set_verse(4, \"buzz\"):"));
        assert!(output.contains("{ id: 4, name: 'dolphin', verse: 'bark' }"));
        assert!(output.contains("{ id: 4, name: 'dolphin', verse: 'buzz' }"));

        assert!(output.contains("get_verse(3) = chirp"));
        assert!(output.contains("get_verse(4) = whistle"));
    }

    #[test]
    fn test_each_registry_keeps_its_own_update() {
        let output = render(&DemoConfig::default());
        let second = output.find("registry 2 after").unwrap();
        let (registry_one, registry_two) = output.split_at(second);

        assert!(registry_one.contains("verse: 'bark'"));
        assert!(!registry_one.contains("verse: 'buzz'"));
        assert!(registry_two.contains("verse: 'buzz'"));
        assert!(!registry_two.contains("verse: 'bark'"));
        assert!(registry_two.contains("verse: 'chirp'"));
    }

    #[test]
    fn test_missing_lookup_prints_undefined() {
        let config = DemoConfig {
            lookups: vec![1, 77],
            ..DemoConfig::default()
        };
        let output = render(&config);
        assert!(output.contains("get_verse(1) = cluck"));
        assert!(output.contains("get_verse(77) = undefined"));
    }

    #[test]
    fn test_unknown_update_leaves_registry_as_seeded() {
        let config = DemoConfig {
            counter_calls: vec![],
            animals: vec![Animal::new(5, "frog", "ribbit")],
            updates: vec![VerseUpdate {
                id: 6,
                verse: "croak".to_string(),
            }],
            lookups: vec![],
        };
        let output = render(&config);
        assert!(output.contains("{ id: 5, name: 'frog', verse: 'ribbit' }"));
        assert!(!output.contains("croak'"));
    }

    #[test]
    fn test_duplicate_animals_fail() {
        let config = DemoConfig {
            animals: vec![Animal::new(1, "a", "x"), Animal::new(1, "b", "y")],
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        let result = run(&config, &mut out);
        assert!(matches!(result, Err(DemoError::Registry(_))));
    }
}
