//! Command implementations for the Slangdex CLI.

use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SlangdexConfig;
use crate::context::builder::ContextBuilder;
use crate::error::{Result, SlangdexError};
use crate::lexicon::Lexicon;
use crate::matcher::fuzzy::FindOptions;

/// Execute a CLI command.
pub fn execute_command(args: SlangdexArgs) -> Result<()> {
    let lexicon = open_lexicon(&args)?;

    match &args.command {
        Command::Expand(expand_args) => expand_term(expand_args, &lexicon, &args),
        Command::Find(find_args) => find_words(find_args, &lexicon, &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &lexicon, &args),
        Command::Define(define_args) => define_word(define_args, &lexicon, &args),
        Command::Stats => show_stats(&lexicon, &args),
        Command::Validate => validate_data(&lexicon, &args),
    }
}

/// Load the configuration and apply command line overrides.
fn load_config(args: &SlangdexArgs) -> Result<SlangdexConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            SlangdexConfig::load(path)?
        }
        None => SlangdexConfig::default(),
    };

    if let Command::Find(FindArgs {
        threshold: Some(threshold),
        ..
    }) = &args.command
    {
        config.matcher.threshold = *threshold;
        config.validate()?;
    }

    Ok(config)
}

/// Build the lexicon from data files, or from the built-in sample data.
fn open_lexicon(args: &SlangdexArgs) -> Result<Lexicon> {
    let config = load_config(args)?;
    let start = Instant::now();

    let lexicon = match (&args.entries, &args.relationships) {
        (Some(entries), Some(relationships)) => {
            info!(
                "Loading entries from {} and relationships from {}",
                entries.display(),
                relationships.display()
            );
            Lexicon::load(entries, relationships, config)?
        }
        (None, None) => Lexicon::builtin(config),
        _ => {
            return Err(SlangdexError::invalid_argument(
                "--entries and --relationships must be given together",
            ));
        }
    };

    debug!("Lexicon built in {:?}", start.elapsed());
    Ok(lexicon)
}

fn expand_term(args: &ExpandArgs, lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    let keys = lexicon.expand_search_term(&args.term);
    output_result(
        &format!("Expanding '{}'", args.term),
        &ExpansionResult {
            term: args.term.clone(),
            keys,
        },
        cli_args,
    )
}

fn find_words(args: &FindArgs, lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    let options = FindOptions {
        part_of_speech: args.part_of_speech.clone(),
    };
    let matches = lexicon.find_words(&args.query, args.limit, &options);
    output_result(
        &format!("Searching for '{}'", args.query),
        &MatchResults {
            query: args.query.clone(),
            matches,
        },
        cli_args,
    )
}

fn suggest_words(args: &SuggestArgs, lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    let matches = lexicon.suggest(&args.query, args.limit);
    output_result(
        &format!("Suggestions for '{}'", args.query),
        &MatchResults {
            query: args.query.clone(),
            matches,
        },
        cli_args,
    )
}

fn define_word(args: &DefineArgs, lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    let entry = lexicon
        .resolve_entry(&args.word)
        .cloned()
        .ok_or_else(|| SlangdexError::not_found(format!("no entry for '{}'", args.word.trim())))?;

    let related = lexicon
        .related_entries(&entry.key)
        .into_iter()
        .map(|related| related.key.clone())
        .collect();

    let prompt = if args.prompt {
        Some(ContextBuilder::new(lexicon).build_request(&entry.key)?.prompt)
    } else {
        None
    };

    output_result(
        &format!("Definition of '{}'", entry.key),
        &DefinitionResult {
            entry,
            related,
            prompt,
        },
        cli_args,
    )
}

fn show_stats(lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    output_result("Lexicon statistics", &lexicon.stats(), cli_args)
}

/// Report relationship data issues. Issues are findings, not failures.
fn validate_data(lexicon: &Lexicon, cli_args: &SlangdexArgs) -> Result<()> {
    let table = lexicon.index().table();
    output_result(
        "Validating relationship data",
        &ValidationResult {
            records: table.len(),
            diagnostics: table.diagnostics(),
        },
        cli_args,
    )
}
