//! Drives a calculator engine from key scripts and prints its display

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use calc_core::input::parse_script;
use calc_core::{evaluate, format_number, CalculatorEngine, EngineOutput};
use log::{debug, warn};

use crate::config::Config;

/// Options that shape how frames are printed
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub trace: bool,
    pub show_memory_indicator: bool,
    pub prompt: String,
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            trace: config.trace,
            show_memory_indicator: config.show_memory_indicator,
            prompt: config.prompt.clone(),
        }
    }
}

pub struct Session<W: Write> {
    engine: CalculatorEngine,
    out: W,
    options: SessionOptions,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, options: SessionOptions) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            out,
            options,
        }
    }

    /// Run one key script
    ///
    /// The whole script is parsed before anything is applied, so an unknown
    /// key leaves the engine untouched.
    pub fn run_script(&mut self, script: &str) -> Result<EngineOutput> {
        let commands = parse_script(script).context("Invalid key script")?;
        let mut output = self.engine.render();

        for command in commands {
            output = self.engine.process(command);
            if self.options.trace {
                self.print_frame(&output)?;
            }
        }

        Ok(output)
    }

    /// Read scripts line by line, printing the display after each one
    pub fn repl<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.print_prompt()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();

            if matches!(line, "quit" | "exit") {
                break;
            }

            if !line.is_empty() {
                match self.run_script(line) {
                    Ok(output) if !self.options.trace => self.print_frame(&output)?,
                    Ok(_) => {}
                    Err(e) => {
                        warn!("{:#}", e);
                        writeln!(self.out, "error: {:#}", e)?;
                    }
                }
            }

            self.print_prompt()?;
        }

        debug!("repl finished");
        Ok(())
    }

    /// Write a frame: expression line above main line
    pub fn print_frame(&mut self, output: &EngineOutput) -> Result<()> {
        let frame = self.format_frame(output);
        writeln!(self.out, "{}", frame).context("Failed to write output")
    }

    pub fn format_frame(&self, output: &EngineOutput) -> String {
        let indicator = if self.options.show_memory_indicator && self.engine.has_memory() {
            "M "
        } else {
            ""
        };
        format!("{}{}\n{}", indicator, output.expression_text.trim_end(), output.main_text)
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_prompt(&mut self) -> Result<()> {
        if !self.options.prompt.is_empty() {
            write!(self.out, "{}", self.options.prompt)?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Evaluate a plain expression, returning the display text
///
/// Failures come back as the sentinel text in `Err` so the caller can
/// choose an exit code.
pub fn eval_expression(expr: &str) -> std::result::Result<String, String> {
    evaluate(expr)
        .map(format_number)
        .map_err(|e| {
            debug!("evaluate {:?}: {}", expr, e);
            e.sentinel().to_string()
        })
}
