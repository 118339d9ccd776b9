//! Translate command implementation.

use crate::commands::ValueType;
use clap::{Subcommand, ValueEnum};
use keyedfield_core::{FieldConfig, Fuzziness, Predicate, RewriteMethod, TermQuery, Value};
use tracing::{debug, info};

/// Predicate to translate.
#[derive(Debug, Subcommand)]
pub enum PredicateCommand {
    /// Exact value equality
    Term {
        /// Value to match
        value: String,
    },
    /// Membership in a set of values
    Terms {
        /// Values to match
        values: Vec<String>,
    },
    /// Any value present for the key
    Exists,
    /// Canonical value starts with a prefix
    Prefix {
        /// Prefix of the canonical value
        prefix: String,

        /// Rewrite strategy handed to the index engine
        #[arg(short, long)]
        rewrite: Option<Rewrite>,
    },
    /// Canonical value within bounds
    Range {
        /// Lower bound
        #[arg(long)]
        lower: Option<String>,

        /// Upper bound
        #[arg(long)]
        upper: Option<String>,

        /// Include the lower bound
        #[arg(long)]
        include_lower: bool,

        /// Include the upper bound
        #[arg(long)]
        include_upper: bool,
    },
    /// Free text, analyzed with the field's search analyzer
    Match {
        /// Text to analyze
        text: String,
    },
    /// Edit-distance match (rejected on keyed fields)
    Fuzzy {
        /// Value to match
        value: String,

        /// Maximum number of edits
        #[arg(long, default_value = "2")]
        edits: u8,
    },
    /// Regular-expression match (rejected on keyed fields)
    Regexp {
        /// Pattern to match
        pattern: String,
    },
    /// Wildcard match (rejected on keyed fields)
    Wildcard {
        /// Pattern to match
        pattern: String,
    },
}

/// Rewrite strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rewrite {
    /// Constant score for every match
    ConstantScore,
    /// Constant-score boolean over expanded terms
    ConstantScoreBoolean,
    /// Scored boolean over expanded terms
    ScoringBoolean,
}

impl From<Rewrite> for RewriteMethod {
    fn from(rewrite: Rewrite) -> Self {
        match rewrite {
            Rewrite::ConstantScore => RewriteMethod::ConstantScore,
            Rewrite::ConstantScoreBoolean => RewriteMethod::ConstantScoreBoolean,
            Rewrite::ScoringBoolean => RewriteMethod::ScoringBoolean,
        }
    }
}

/// Settings of the field the predicate targets.
#[derive(Debug, Clone)]
pub struct FieldSettings {
    /// Physical field name.
    pub field: String,
    /// Key bound to the field.
    pub key: String,
    /// Whether the field is indexed.
    pub indexed: bool,
    /// Whether free text is split on whitespace.
    pub split_on_whitespace: bool,
}

/// Runs the translate command.
pub fn run(
    settings: FieldSettings,
    predicate: PredicateCommand,
    value_type: ValueType,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = FieldConfig::new(settings.key)
        .name(settings.field)
        .indexed(settings.indexed)
        .split_queries_on_whitespace(settings.split_on_whitespace)
        .build()?;
    let queries = field.queries();

    let query = match predicate {
        PredicateCommand::Match { text } => {
            debug!(analyzer = field.search_analyzer().name(), "analyzing text");
            queries.match_text(&text)?
        }
        other => queries.translate(to_predicate(other, value_type)?)?,
    };
    info!(field = field.name(), key = field.key(), "translated predicate");

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&query)?);
        }
        _ => print_text_output(&query),
    }

    Ok(())
}

fn to_predicate(
    command: PredicateCommand,
    value_type: ValueType,
) -> Result<Predicate, Box<dyn std::error::Error>> {
    let parse = |raw: String| value_type.parse(&raw);
    let parse_opt = |raw: Option<String>| raw.map(|r| value_type.parse(&r)).transpose();

    let predicate = match command {
        PredicateCommand::Term { value } => Predicate::Equals(parse(value)?),
        PredicateCommand::Terms { values } => Predicate::InSet(
            values
                .into_iter()
                .map(parse)
                .collect::<Result<Vec<Value>, _>>()?,
        ),
        PredicateCommand::Exists => Predicate::Exists,
        PredicateCommand::Prefix { prefix, rewrite } => Predicate::PrefixMatch {
            prefix,
            rewrite: rewrite.map(Into::into),
        },
        PredicateCommand::Range {
            lower,
            upper,
            include_lower,
            include_upper,
        } => Predicate::range(
            parse_opt(lower)?,
            parse_opt(upper)?,
            include_lower,
            include_upper,
        ),
        PredicateCommand::Fuzzy { value, edits } => Predicate::Fuzzy {
            value: parse(value)?,
            fuzziness: Fuzziness::Edits(edits),
            prefix_length: 0,
            max_expansions: 50,
            transpositions: true,
        },
        PredicateCommand::Regexp { pattern } => Predicate::Regexp {
            pattern,
            flags: 0,
            max_determinized_states: 10_000,
        },
        PredicateCommand::Wildcard { pattern } => Predicate::wildcard(pattern),
        PredicateCommand::Match { .. } => {
            return Err("free-text match is analyzed, not translated directly".into());
        }
    };
    Ok(predicate)
}

fn print_text_output(query: &TermQuery) {
    match query {
        TermQuery::Exact { field, token } => {
            println!("exact   {} {}", field, token);
        }
        TermQuery::Set { field, tokens } => {
            println!("set     {} ({} tokens)", field, tokens.len());
            for token in tokens {
                println!("        {}", token);
            }
        }
        TermQuery::Prefix {
            field,
            prefix,
            rewrite,
        } => match rewrite {
            Some(rewrite) => println!("prefix  {} {} ({:?})", field, prefix, rewrite),
            None => println!("prefix  {} {}", field, prefix),
        },
        TermQuery::Range {
            field,
            low,
            high,
            include_low,
            include_high,
        } => {
            let open = if *include_low { '[' } else { '(' };
            let close = if *include_high { ']' } else { ')' };
            println!("range   {} {}{}, {}{}", field, open, low, high, close);
        }
    }
}
