//! Processing operations applied to every argument.
//!
//! The driver only sees the [`Processor`] trait, so it never depends on what
//! `ham`, `spam` or `eggs` actually do. Each operation writes a single line
//! to the supplied sink:
//!
//! - `ham` echoes the argument.
//! - `spam` echoes the argument together with its UTF-8 byte length.
//! - `eggs` prints the standard base64 encoding (with padding) of the argument.
//!
//! The free functions are usable on their own; the unit structs wrap them for
//! the driver.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose};

/// A single per-argument processing step.
pub trait Processor {
    /// Short name used in error context.
    fn name(&self) -> &'static str;

    /// Process `arg`, writing any output to `out`.
    fn process(&mut self, arg: &str, out: &mut dyn Write) -> Result<(), String>;
}

/// Write `ham: <arg>`.
pub fn ham(out: &mut dyn Write, arg: &str) -> Result<(), String> {
    writeln!(out, "ham: {}", arg).map_err(|e| format!("ham write: {}", e))
}

/// Write `spam: <arg> (<n> bytes)`.
pub fn spam(out: &mut dyn Write, arg: &str) -> Result<(), String> {
    writeln!(out, "spam: {} ({} bytes)", arg, arg.len()).map_err(|e| format!("spam write: {}", e))
}

/// Write `eggs: <base64 of arg>`.
pub fn eggs(out: &mut dyn Write, arg: &str) -> Result<(), String> {
    let encoded = general_purpose::STANDARD.encode(arg.as_bytes());
    writeln!(out, "eggs: {}", encoded).map_err(|e| format!("eggs write: {}", e))
}

pub struct Ham;
pub struct Spam;
pub struct Eggs;

impl Processor for Ham {
    fn name(&self) -> &'static str {
        "ham"
    }

    fn process(&mut self, arg: &str, out: &mut dyn Write) -> Result<(), String> {
        ham(out, arg)
    }
}

impl Processor for Spam {
    fn name(&self) -> &'static str {
        "spam"
    }

    fn process(&mut self, arg: &str, out: &mut dyn Write) -> Result<(), String> {
        spam(out, arg)
    }
}

impl Processor for Eggs {
    fn name(&self) -> &'static str {
        "eggs"
    }

    fn process(&mut self, arg: &str, out: &mut dyn Write) -> Result<(), String> {
        eggs(out, arg)
    }
}

/// The processors the binary runs, in call order: ham, spam, eggs.
pub fn default_processors() -> Vec<Box<dyn Processor>> {
    vec![Box::new(Ham), Box::new(Spam), Box::new(Eggs)]
}
