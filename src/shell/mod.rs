//! Interaction shell
//!
//! Turns commands into query-engine calls, prints results, reads the user's
//! choice and hands the chosen entry to a `Launcher`. Input and output are
//! generic so the whole flow can be driven from tests.

pub mod render;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use clap::Parser;
use colored::*;

use crate::catalog::Catalog;
use crate::catalog::path_store::PathStore;
use crate::cli::commands::{Commands, ReplLine, joined};
use crate::config::DisplayConfig;
use crate::domain::{Note, OfflineTool, Searchable, WebTool};
use crate::error::Result;
use crate::launcher::{LaunchOutcome, Launcher};
use crate::search;

const PROMPT: &str = "toolshed> ";

/// A catalog entry the user can start.
pub trait Launchable: Searchable {
    /// Plural noun for messages
    const NOUN: &'static str;
    /// Subcommand that searches this kind by tag
    const TAG_COMMAND: &'static str;

    fn launch_with<L: Launcher>(&self, launcher: &L) -> Result<LaunchOutcome>;
}

impl Launchable for OfflineTool {
    const NOUN: &'static str = "tools";
    const TAG_COMMAND: &'static str = "tool-tags";

    fn launch_with<L: Launcher>(&self, launcher: &L) -> Result<LaunchOutcome> {
        launcher.launch_offline(self)
    }
}

impl Launchable for WebTool {
    const NOUN: &'static str = "web tools";
    const TAG_COMMAND: &'static str = "web-tags";

    fn launch_with<L: Launcher>(&self, launcher: &L) -> Result<LaunchOutcome> {
        launcher.open_web(self)
    }
}

/// What the user typed at a prompt.
enum Answer {
    Line(String),
    Eof,
}

pub struct Shell<'a, L: Launcher, R: BufRead, W: Write> {
    catalog: &'a Catalog,
    launcher: &'a L,
    display: DisplayConfig,
    path_store: PathStore,
    input: R,
    output: W,
}

impl<'a, L: Launcher, R: BufRead, W: Write> Shell<'a, L, R, W> {
    pub fn new(
        catalog: &'a Catalog,
        launcher: &'a L,
        display: DisplayConfig,
        path_store: PathStore,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalog,
            launcher,
            display,
            path_store,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one command to completion.
    pub fn run(&mut self, command: &Commands) -> Result<()> {
        log::debug!("Running {:?}", command);
        let catalog = self.catalog;
        match command {
            Commands::Tools { query } => self.launch_flow(&catalog.offline_tools, &joined(query)),
            Commands::ToolTags { tag } => self.tag_flow(&catalog.offline_tools, &joined(tag)),
            Commands::Web { query } => self.launch_flow(&catalog.web_tools, &joined(query)),
            Commands::WebTags { tag } => self.tag_flow(&catalog.web_tools, &joined(tag)),
            Commands::Notes { query } => self.notes(&joined(query)),
            Commands::NoteTags { tag } => self.note_tags(&joined(tag)),
            Commands::AddPath { path } => {
                self.path_store.save(path)?;
                writeln!(self.output, "{} {}", "Catalog path saved:".green(), path.display())?;
                Ok(())
            }
        }
    }

    /// Read commands until EOF, `exit` or `quit`. A failing command never ends the loop.
    pub fn repl(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Toolshed - type 'help' for commands".cyan())?;
        loop {
            let line = match self.ask(PROMPT)? {
                Answer::Line(line) => line,
                Answer::Eof => break,
            };
            let words: Vec<&str> = line.split_whitespace().collect();
            match words.first().copied() {
                None => continue,
                Some("exit") | Some("quit") | Some("q") => break,
                Some(_) => {}
            }

            match ReplLine::try_parse_from(words) {
                Ok(parsed) => {
                    if let Err(e) = self.run(&parsed.command) {
                        log::error!("Command {:?} failed: {}", parsed.command, e);
                        writeln!(self.output, "{} {}", "Error:".red(), e)?;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e.render())?,
            }
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Answer::Eof);
        }
        Ok(Answer::Line(line.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(match self.ask(prompt)? {
            Answer::Line(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            Answer::Eof => false,
        })
    }

    fn launch_flow<T: Launchable>(&mut self, items: &[T], query: &str) -> Result<()> {
        if query.trim().is_empty() {
            let all: Vec<&T> = items.iter().collect();
            writeln!(self.output, "{}", render::title(&format!("All {}", T::NOUN)))?;
            self.list(&all, false)?;
            return Ok(());
        }

        let results = search::filter(items, query);
        match results.len() {
            0 => self.no_match(items, T::NOUN, T::TAG_COMMAND),
            1 => self.start(results[0]),
            _ => {
                if let Some(exact) = search::exact_name_match(&results, query) {
                    writeln!(self.output, "Exact match: {}", exact.display_name().bold())?;
                    if self.confirm("Launch it directly? (y/n): ")? {
                        return self.start(exact);
                    }
                    writeln!(self.output)?;
                }
                writeln!(self.output, "{}", render::title(&format!("Matching {}", T::NOUN)))?;
                let ordered = self.list(&results, true)?;
                self.select(&ordered)
            }
        }
    }

    fn tag_flow<T: Launchable>(&mut self, items: &[T], tag: &str) -> Result<()> {
        if tag.trim().is_empty() {
            return self.tag_catalog(items, T::NOUN);
        }

        let results = search::by_tag(items, tag);
        if results.is_empty() {
            writeln!(self.output, "{}", format!("No {} tagged like '{}'", T::NOUN, tag.trim()).yellow())?;
            return Ok(());
        }

        writeln!(self.output, "{}", render::title(&format!("{} tagged '{}'", T::NOUN, tag.trim())))?;
        let ordered = self.list(&results, true)?;
        self.select(&ordered)
    }

    fn notes(&mut self, query: &str) -> Result<()> {
        let catalog = self.catalog;
        let notes = &catalog.notes;
        if notes.is_empty() {
            writeln!(self.output, "No notes available")?;
            return Ok(());
        }

        let results = search::filter(notes, query);
        if results.is_empty() {
            return self.no_match(notes, "notes", "note-tags");
        }

        writeln!(self.output, "{}", render::title("Notes"))?;
        self.list(&results, false)?;
        Ok(())
    }

    fn note_tags(&mut self, tag: &str) -> Result<()> {
        let catalog = self.catalog;
        let notes: &[Note] = &catalog.notes;
        if tag.trim().is_empty() {
            return self.tag_catalog(notes, "notes");
        }

        let results = search::by_tag(notes, tag);
        if results.is_empty() {
            writeln!(self.output, "{}", format!("No notes tagged like '{}'", tag.trim()).yellow())?;
            return Ok(());
        }
        writeln!(self.output, "{}", render::title(&format!("Notes tagged '{}'", tag.trim())))?;
        self.list(&results, false)?;
        Ok(())
    }

    fn no_match<T: Searchable>(&mut self, items: &[T], noun: &str, tag_command: &str) -> Result<()> {
        writeln!(self.output, "{}", format!("No matching {}", noun).yellow())?;
        let top = search::top_tags(items, self.display.suggested_tags);
        if !top.is_empty() {
            writeln!(self.output, "Try one of these popular tags:")?;
            writeln!(self.output, "{}", render::tag_suggestions(&top))?;
            writeln!(self.output, "Use '{} <tag>' to search by tag", tag_command)?;
        }
        Ok(())
    }

    fn tag_catalog<T: Searchable>(&mut self, items: &[T], noun: &str) -> Result<()> {
        let tags = search::all_tags_with_counts(items);
        if tags.is_empty() {
            writeln!(self.output, "No tags on any {}", noun)?;
            return Ok(());
        }
        writeln!(self.output, "{}", render::title(&format!("Tags on {}", noun)))?;
        for tag in &tags {
            writeln!(self.output, "{}", render::tag_row(tag))?;
        }
        writeln!(self.output, "{}", render::totals(tags.len(), 1, "tags"))?;
        Ok(())
    }

    /// Print `items` grouped by sorted group, names sorted within each group.
    /// Returns the entries in display order so numbers map back to them.
    fn list<'b, T: Searchable>(&mut self, items: &[&'b T], numbered: bool) -> Result<Vec<&'b T>> {
        if items.is_empty() {
            writeln!(self.output, "Nothing to show")?;
            return Ok(Vec::new());
        }

        let mut groups: BTreeMap<&str, Vec<&'b T>> = BTreeMap::new();
        for item in items {
            groups.entry(item.group()).or_default().push(*item);
        }

        let mut ordered = Vec::with_capacity(items.len());
        for (group, mut members) in groups.iter().map(|(g, m)| (*g, m.clone())) {
            members.sort_by(|a, b| a.display_name().cmp(b.display_name()));
            writeln!(self.output, "{}", render::group_header(group))?;
            for member in members {
                ordered.push(member);
                let index = numbered.then_some(ordered.len());
                writeln!(self.output, "{}", render::entry_row(index, member))?;
            }
        }

        writeln!(self.output, "{}", render::totals(ordered.len(), groups.len(), "entries"))?;
        Ok(ordered)
    }

    fn select<T: Launchable>(&mut self, ordered: &[&T]) -> Result<()> {
        loop {
            let answer = match self.ask("\nSelect a number to launch (q to quit): ")? {
                Answer::Line(answer) => answer.to_lowercase(),
                Answer::Eof => return Ok(()),
            };
            if matches!(answer.as_str(), "q" | "quit" | "exit") {
                return Ok(());
            }

            let choice = match answer.parse::<usize>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "{}", "Invalid input, enter a number or q".red())?;
                    continue;
                }
            };

            match choice.checked_sub(1).and_then(|i| ordered.get(i)) {
                Some(item) => {
                    self.start(*item)?;
                    if !self.confirm("\nPick another? (y/n): ")? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "{}", "Invalid selection".red())?,
            }
        }
    }

    /// Launch and report. A launch failure is printed, never propagated.
    fn start<T: Launchable>(&mut self, item: &T) -> Result<()> {
        writeln!(self.output, "Starting {}", item.display_name().bold())?;
        match item.launch_with(self.launcher) {
            Ok(outcome) => {
                if outcome.degraded {
                    writeln!(
                        self.output,
                        "{}",
                        "No terminal emulator found, opened the directory instead".yellow()
                    )?;
                }
                log::info!("Started {} via {:?}", item.display_name(), outcome.strategy);
            }
            Err(e) => {
                log::warn!("Failed to start {}: {}", item.display_name(), e);
                writeln!(self.output, "{} {}", "Failed to start:".red(), e)?;
            }
        }
        Ok(())
    }
}
