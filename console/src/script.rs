//! Scripted keypad sessions.

use crate::command::{Command, CommandError};

/// A named sequence of console commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Script name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Commands in order.
    pub commands: Vec<Command>,
}

impl Script {
    /// Parse commands separated by ';' or newlines.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, CommandError> {
        let commands = text
            .split([';', '\n'])
            .filter(|step| !step.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Command>, _>>()?;

        Ok(Self {
            name: name.into(),
            description: String::new(),
            commands,
        })
    }

    /// Load a built-in script by name.
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let (description, text) = match name {
            "clear-and-type" => (
                "Erase the default amount, enter 250 and convert to EUR",
                "<<<<<<<; 250; to EUR",
            ),
            "swap-round-trip" => ("Swap the currencies there and back", "swap; swap"),
            "decimal-entry" => (
                "Start a fraction from an empty buffer",
                "<<<<<<<; ..; 5",
            ),
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown script: {} (available: {})",
                    name,
                    Self::builtin_names().join(", ")
                ))
            }
        };

        let mut script = Self::parse(name, text)?;
        script.description = description.to_string();
        Ok(script)
    }

    /// Names of the built-in scripts.
    pub fn builtin_names() -> &'static [&'static str] {
        &["clear-and-type", "swap-round-trip", "decimal-entry"]
    }
}
